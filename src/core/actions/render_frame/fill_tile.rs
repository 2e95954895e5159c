use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::framebuffer::TileView;
use crate::core::data::point::Point;
use crate::core::data::render_quality::RenderQuality;

/// Computes and writes every sampled pixel of one tile.
///
/// Under a stride above 1 the first row is rounded up to a multiple of the
/// stride, so which cells get sampled depends only on their absolute position
/// and never on where the tile boundaries fall.
pub fn fill_tile<Alg, CMap>(
    mut view: TileView<'_>,
    algorithm: &Alg,
    colour_map: &CMap,
    quality: RenderQuality,
) where
    Alg: FractalAlgorithm,
    CMap: ColourMap<T = Alg::Success>,
{
    let tile = view.tile();
    let stride = quality.stride();
    let first_row = tile.start_row().next_multiple_of(stride as u32);

    for y in (first_row..tile.end_row()).step_by(stride) {
        for x in (0..tile.width()).step_by(stride) {
            let value = algorithm.compute(Point {
                x: x as i32,
                y: y as i32,
            });
            view.set(x, y, colour_map.map(value).to_argb());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::framebuffer::{BACKGROUND, Framebuffer};
    use crate::core::data::render_tile::RenderTile;
    use crate::core::data::surface_dimensions::SurfaceDimensions;

    struct StubAlgorithm {}

    impl FractalAlgorithm for StubAlgorithm {
        type Success = Point;

        fn compute(&self, pixel: Point) -> Point {
            pixel
        }
    }

    struct StubColourMap {}

    impl ColourMap for StubColourMap {
        type T = Point;

        fn map(&self, value: Point) -> Colour {
            Colour {
                r: value.x as u8,
                g: value.y as u8,
                b: 1,
            }
        }
    }

    fn render(tiles: &[RenderTile], quality: RenderQuality) -> Framebuffer {
        let mut framebuffer = Framebuffer::new(SurfaceDimensions::new(5, 7).unwrap());
        for view in framebuffer.tile_views(tiles).unwrap() {
            fill_tile(view, &StubAlgorithm {}, &StubColourMap {}, quality);
        }
        framebuffer
    }

    #[test]
    fn test_full_quality_writes_every_cell_at_its_position() {
        let framebuffer = render(&[RenderTile::new(0, 7, 5)], RenderQuality::Full);

        for y in 0..7 {
            for x in 0..5 {
                let cell = framebuffer.pixel(Point { x, y }).unwrap();
                assert_eq!(Colour::from_argb(cell), Colour { r: x as u8, g: y as u8, b: 1 });
            }
        }
    }

    #[test]
    fn test_reduced_quality_samples_even_cells_across_odd_tile_boundaries() {
        let tiles = [
            RenderTile::new(0, 3, 5),
            RenderTile::new(3, 4, 5),
            RenderTile::new(4, 7, 5),
        ];
        let framebuffer = render(&tiles, RenderQuality::Reduced);

        for y in 0..7 {
            for x in 0..5 {
                let cell = framebuffer.pixel(Point { x, y }).unwrap();
                if x % 2 == 0 && y % 2 == 0 {
                    assert_ne!(cell, BACKGROUND, "({}, {}) was skipped", x, y);
                } else {
                    assert_eq!(cell, BACKGROUND, "({}, {}) was written", x, y);
                }
            }
        }
    }
}
