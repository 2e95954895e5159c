use std::thread;

use crate::core::actions::render_frame::fill_tile::fill_tile;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::framebuffer::TileView;
use crate::core::data::render_quality::RenderQuality;

/// Spawns one scoped thread per tile view and joins all of them before returning.
pub fn render_frame_scoped_threads<Alg, CMap>(
    views: Vec<TileView<'_>>,
    algorithm: &Alg,
    colour_map: &CMap,
    quality: RenderQuality,
) where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<T = Alg::Success> + Sync,
{
    thread::scope(|scope| {
        views
            .into_iter()
            .map(|view| scope.spawn(move || fill_tile(view, algorithm, colour_map, quality)))
            .collect::<Vec<_>>()
            .into_iter()
            .for_each(|handle| {
                handle
                    .join()
                    .expect("Thread panicked during tile rendering")
            });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::framebuffer::Framebuffer;
    use crate::core::data::surface_dimensions::SurfaceDimensions;
    use crate::core::data::view_parameters::ViewParameters;
    use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
    use crate::core::fractals::mandelbrot::colour_map::RainbowColourMap;
    use crate::core::util::partition_rows::partition_rows;
    use std::num::NonZeroUsize;

    fn render(workers: usize) -> Framebuffer {
        let surface = SurfaceDimensions::new(64, 48).unwrap();
        let view = ViewParameters::default();
        let mut framebuffer = Framebuffer::new(surface);
        let tiles = partition_rows(surface, NonZeroUsize::new(workers).unwrap());

        render_frame_scoped_threads(
            framebuffer.tile_views(&tiles).unwrap(),
            &MandelbrotAlgorithm::new(view, surface),
            &RainbowColourMap::new(view.max_iterations()),
            RenderQuality::Full,
        );

        framebuffer
    }

    #[test]
    fn test_worker_count_does_not_change_output() {
        let single = render(1);

        assert_eq!(render(3), single);
        assert_eq!(render(7), single);
        assert_eq!(render(100), single);
    }
}
