//! Pixel format conversion helpers for presentation adapters.

/// Unpacks `0xAARRGGBB` cells into RGBA bytes with alpha forced to 255, so
/// background cells show as black.
///
/// # Panics
/// Panics if `dst` is not exactly four bytes per source cell.
pub fn copy_argb_to_rgba(src: &[u32], dst: &mut [u8]) {
    assert_eq!(
        dst.len(),
        src.len() * 4,
        "dst length {} does not match expected {}",
        dst.len(),
        src.len() * 4
    );

    for (&cell, dst_pixel) in src.iter().zip(dst.chunks_exact_mut(4)) {
        dst_pixel[0] = (cell >> 16) as u8;
        dst_pixel[1] = (cell >> 8) as u8;
        dst_pixel[2] = cell as u8;
        dst_pixel[3] = 255;
    }
}
