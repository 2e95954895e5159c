pub mod fill_tile;
pub mod parallel_renderer;
pub mod ports;
pub mod render_frame_rayon_pool;
pub mod render_frame_scoped_threads;
