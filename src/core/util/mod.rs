pub mod hsv_to_rgb;
pub mod partition_rows;
pub mod pixel_to_plane;
