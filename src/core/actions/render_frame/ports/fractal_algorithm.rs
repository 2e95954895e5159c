use crate::core::data::point::Point;

/// Per-pixel computation run by the render workers. Total over the surface.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;
}
