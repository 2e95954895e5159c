use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

pub const DEFAULT_CENTER: Complex = Complex {
    real: -0.5,
    imag: 0.0,
};
pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewParametersError {
    NonFiniteCenter(Complex),
    InvalidZoom(f64),
    ZeroMaxIterations,
}

impl fmt::Display for ViewParametersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteCenter(center) => write!(
                f,
                "view center must be finite, got ({}, {})",
                center.real, center.imag
            ),
            Self::InvalidZoom(zoom) => {
                write!(f, "zoom must be finite and greater than zero, got {}", zoom)
            }
            Self::ZeroMaxIterations => write!(f, "max iterations must be at least 1"),
        }
    }
}

impl Error for ViewParametersError {}

/// Which part of the plane is on screen. The visible window spans
/// `4.0 / zoom` units horizontally and vertically around `center`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewParameters {
    center: Complex,
    zoom: f64,
    max_iterations: u32,
}

impl ViewParameters {
    pub fn new(
        center: Complex,
        zoom: f64,
        max_iterations: u32,
    ) -> Result<Self, ViewParametersError> {
        if !center.is_finite() {
            return Err(ViewParametersError::NonFiniteCenter(center));
        }

        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ViewParametersError::InvalidZoom(zoom));
        }

        if max_iterations == 0 {
            return Err(ViewParametersError::ZeroMaxIterations);
        }

        Ok(Self {
            center,
            zoom,
            max_iterations,
        })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub(crate) fn set_center(&mut self, center: Complex) {
        debug_assert!(center.is_finite());
        self.center = center;
    }

    pub(crate) fn set_zoom(&mut self, zoom: f64) {
        debug_assert!(zoom.is_finite() && zoom > 0.0);
        self.zoom = zoom;
    }

    pub(crate) fn set_max_iterations(&mut self, max_iterations: u32) {
        debug_assert!(max_iterations > 0);
        self.max_iterations = max_iterations;
    }
}

impl Default for ViewParameters {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}
