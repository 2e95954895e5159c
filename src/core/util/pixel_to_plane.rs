use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::surface_dimensions::SurfaceDimensions;
use crate::core::data::view_parameters::ViewParameters;

/// Width and height of the visible plane window at zoom 1.
pub const PLANE_SPAN: f64 = 4.0;

/// Maps a pixel to the plane. Each axis is scaled by its own surface dimension,
/// so non-square surfaces stretch.
#[must_use]
pub fn pixel_to_plane(pixel: Point, view: &ViewParameters, surface: SurfaceDimensions) -> Complex {
    let scale = 1.0 / view.zoom();
    let width = surface.width() as f64;
    let height = surface.height() as f64;
    let center = view.center();

    Complex {
        real: center.real + (pixel.x as f64 - width / 2.0) * (PLANE_SPAN * scale / width),
        imag: center.imag + (pixel.y as f64 - height / 2.0) * (PLANE_SPAN * scale / height),
    }
}

/// Inverse of [`pixel_to_plane`]. Returns fractional pixel coordinates as `(x, y)`.
#[must_use]
pub fn plane_to_pixel(
    point: Complex,
    view: &ViewParameters,
    surface: SurfaceDimensions,
) -> (f64, f64) {
    let width = surface.width() as f64;
    let height = surface.height() as f64;
    let center = view.center();

    (
        width / 2.0 + (point.real - center.real) * width * view.zoom() / PLANE_SPAN,
        height / 2.0 + (point.imag - center.imag) * height * view.zoom() / PLANE_SPAN,
    )
}

/// Plane distance covered by a pixel displacement at the given zoom.
#[must_use]
pub fn pixel_delta_to_plane(dx: i32, dy: i32, zoom: f64, surface: SurfaceDimensions) -> Complex {
    let span = PLANE_SPAN / zoom;

    Complex {
        real: dx as f64 * span / surface.width() as f64,
        imag: dy as f64 * span / surface.height() as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx_eq(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "{} is not approximately {}", a, b);
    }

    fn surface(width: u32, height: u32) -> SurfaceDimensions {
        SurfaceDimensions::new(width, height).unwrap()
    }

    #[test]
    fn test_top_left_of_default_view() {
        let result = pixel_to_plane(
            Point { x: 0, y: 0 },
            &ViewParameters::default(),
            surface(800, 800),
        );

        assert_eq!(result, Complex { real: -2.5, imag: -2.0 });
    }

    #[test]
    fn test_surface_center_maps_to_view_center() {
        for zoom in [0.25, 1.0, 3.0, 1e6] {
            let center = Complex {
                real: 0.3,
                imag: -0.7,
            };
            let view = ViewParameters::new(center, zoom, 100).unwrap();

            let result = pixel_to_plane(Point { x: 400, y: 300 }, &view, surface(800, 600));

            assert_eq!(result, center);
        }
    }

    #[test]
    fn test_odd_dimensions_use_fractional_half() {
        let view = ViewParameters::default();

        let result = pixel_to_plane(Point { x: 1, y: 1 }, &view, surface(3, 3));

        // (1 - 1.5) * 4 / 3
        assert_approx_eq(result.real, -0.5 - 2.0 / 3.0);
        assert_approx_eq(result.imag, -2.0 / 3.0);
    }

    #[test]
    fn test_axes_scale_independently() {
        let view = ViewParameters::new(Complex::ZERO, 1.0, 100).unwrap();

        let result = pixel_to_plane(Point { x: 0, y: 0 }, &view, surface(800, 400));

        assert_eq!(result, Complex { real: -2.0, imag: -2.0 });
    }

    #[test]
    fn test_zoom_shrinks_window() {
        let view = ViewParameters::new(Complex::ZERO, 2.0, 100).unwrap();

        let result = pixel_to_plane(Point { x: 0, y: 0 }, &view, surface(800, 800));

        assert_eq!(result, Complex { real: -1.0, imag: -1.0 });
    }

    #[test]
    fn test_plane_to_pixel_inverts_pixel_to_plane() {
        let view = ViewParameters::new(
            Complex {
                real: -0.75,
                imag: 0.1,
            },
            5.0,
            100,
        )
        .unwrap();
        let surface = surface(640, 480);

        let plane = pixel_to_plane(Point { x: 17, y: 401 }, &view, surface);
        let (x, y) = plane_to_pixel(plane, &view, surface);

        assert!((x - 17.0).abs() < 1e-9);
        assert!((y - 401.0).abs() < 1e-9);
    }

    #[test]
    fn test_pixel_delta_to_plane() {
        let delta = pixel_delta_to_plane(40, -20, 1.0, surface(800, 800));

        assert_eq!(delta.real, 40.0 * 4.0 / 800.0);
        assert_eq!(delta.imag, -20.0 * 4.0 / 800.0);
    }
}
