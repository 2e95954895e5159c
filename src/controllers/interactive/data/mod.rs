pub mod frame_report;
pub mod input_event;
pub mod interaction_limits;
