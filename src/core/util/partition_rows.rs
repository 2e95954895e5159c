use crate::core::data::render_tile::RenderTile;
use crate::core::data::surface_dimensions::SurfaceDimensions;
use std::num::NonZeroUsize;

/// Splits the surface into exactly `worker_count` row bands. Every band gets
/// `height / worker_count` rows and the last one absorbs the remainder, so with
/// more workers than rows the leading bands are empty.
#[must_use]
pub fn partition_rows(surface: SurfaceDimensions, worker_count: NonZeroUsize) -> Vec<RenderTile> {
    let height = surface.height() as usize;
    let workers = worker_count.get();
    let rows_per_tile = height / workers;

    (0..workers)
        .map(|index| {
            let start_row = index * rows_per_tile;
            let end_row = if index == workers - 1 {
                height
            } else {
                (index + 1) * rows_per_tile
            };

            RenderTile::new(start_row as u32, end_row as u32, surface.width())
        })
        .collect()
}
