use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::surface_dimensions::SurfaceDimensions;
use crate::core::data::view_parameters::ViewParameters;
use crate::core::util::pixel_to_plane::pixel_to_plane;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Returns the 0-based iteration at which `z ← z² + c` first leaves the radius-2
/// disc, or `max_iterations` when it never does.
#[must_use]
pub fn escape_iterations(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = z * z + c;
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    max_iterations
}

/// Escape-time iteration for one frame's view snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    view: ViewParameters,
    surface: SurfaceDimensions,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(view: ViewParameters, surface: SurfaceDimensions) -> Self {
        Self { view, surface }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    fn compute(&self, pixel: Point) -> u32 {
        let c = pixel_to_plane(pixel, &self.view, self.surface);
        escape_iterations(c, self.view.max_iterations())
    }
}
