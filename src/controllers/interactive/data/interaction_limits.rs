use std::error::Error;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InteractionLimitsError {
    ZoomFactorTooSmall(f64),
    ZeroIterationStep,
    ZeroMinIterations,
    InvalidZoomRange { min_zoom: f64, max_zoom: f64 },
    ZoomOutsideRange { zoom: f64, min_zoom: f64, max_zoom: f64 },
}

impl fmt::Display for InteractionLimitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZoomFactorTooSmall(factor) => {
                write!(f, "zoom factor must be finite and greater than 1, got {}", factor)
            }
            Self::ZeroIterationStep => write!(f, "iteration step must be at least 1"),
            Self::ZeroMinIterations => write!(f, "minimum iterations must be at least 1"),
            Self::InvalidZoomRange { min_zoom, max_zoom } => write!(
                f,
                "zoom range must satisfy 0 < min <= max, got {}..{}",
                min_zoom, max_zoom
            ),
            Self::ZoomOutsideRange {
                zoom,
                min_zoom,
                max_zoom,
            } => write!(
                f,
                "zoom {} is outside the allowed range {}..{}",
                zoom, min_zoom, max_zoom
            ),
        }
    }
}

impl Error for InteractionLimitsError {}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InteractionLimits {
    /// Zoom multiplier per wheel notch.
    pub zoom_factor: f64,
    pub iteration_step: u32,
    pub min_iterations: u32,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// How long the view keeps counting as zooming after the last wheel event.
    pub zoom_settle: Duration,
}

impl InteractionLimits {
    pub fn validate(&self) -> Result<(), InteractionLimitsError> {
        if !self.zoom_factor.is_finite() || self.zoom_factor <= 1.0 {
            return Err(InteractionLimitsError::ZoomFactorTooSmall(self.zoom_factor));
        }

        if self.iteration_step == 0 {
            return Err(InteractionLimitsError::ZeroIterationStep);
        }

        if self.min_iterations == 0 {
            return Err(InteractionLimitsError::ZeroMinIterations);
        }

        if !(self.min_zoom > 0.0 && self.min_zoom <= self.max_zoom && self.max_zoom.is_finite()) {
            return Err(InteractionLimitsError::InvalidZoomRange {
                min_zoom: self.min_zoom,
                max_zoom: self.max_zoom,
            });
        }

        Ok(())
    }

    /// Rejects a zoom the wheel clamp would snap away from on the first notch.
    pub fn check_zoom(&self, zoom: f64) -> Result<(), InteractionLimitsError> {
        if !(zoom >= self.min_zoom && zoom <= self.max_zoom) {
            return Err(InteractionLimitsError::ZoomOutsideRange {
                zoom,
                min_zoom: self.min_zoom,
                max_zoom: self.max_zoom,
            });
        }

        Ok(())
    }
}

impl Default for InteractionLimits {
    fn default() -> Self {
        Self {
            zoom_factor: 1.1,
            iteration_step: 50,
            min_iterations: 50,
            min_zoom: 1e-6,
            max_zoom: 1e14,
            zoom_settle: Duration::from_millis(120),
        }
    }
}
