pub mod colour;
pub mod complex;
pub mod framebuffer;
pub mod point;
pub mod render_quality;
pub mod render_tile;
pub mod surface_dimensions;
pub mod view_parameters;
