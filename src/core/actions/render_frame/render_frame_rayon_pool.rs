use rayon::ThreadPool;

use crate::core::actions::render_frame::fill_tile::fill_tile;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::framebuffer::TileView;
use crate::core::data::render_quality::RenderQuality;

/// Hands one task per tile view to an existing pool. Returns once the pool
/// scope has completed every task.
pub fn render_frame_rayon_pool<Alg, CMap>(
    pool: &ThreadPool,
    views: Vec<TileView<'_>>,
    algorithm: &Alg,
    colour_map: &CMap,
    quality: RenderQuality,
) where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<T = Alg::Success> + Sync,
{
    pool.scope(|scope| {
        for view in views {
            scope.spawn(move |_| fill_tile(view, algorithm, colour_map, quality));
        }
    });
}
