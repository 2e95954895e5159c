pub mod frame_sink;

pub use frame_sink::FrameSink;
