use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SurfaceDimensionsError {
    ZeroSize { width: u32, height: u32 },
}

impl fmt::Display for SurfaceDimensionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize { width, height } => {
                write!(
                    f,
                    "surface must be at least 1x1 pixels, got {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for SurfaceDimensionsError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SurfaceDimensions {
    width: u32,
    height: u32,
}

impl SurfaceDimensions {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceDimensionsError> {
        if width == 0 || height == 0 {
            return Err(SurfaceDimensionsError::ZeroSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }
}

impl Default for SurfaceDimensions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_width_fails() {
        assert_eq!(
            SurfaceDimensions::new(0, 10),
            Err(SurfaceDimensionsError::ZeroSize {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn test_zero_height_fails() {
        assert!(SurfaceDimensions::new(10, 0).is_err());
    }

    #[test]
    fn test_pixel_count() {
        let surface = SurfaceDimensions::new(800, 600).unwrap();
        assert_eq!(surface.pixel_count(), 480_000);
    }

    #[test]
    fn test_contains() {
        let surface = SurfaceDimensions::new(4, 3).unwrap();

        assert!(surface.contains(Point { x: 0, y: 0 }));
        assert!(surface.contains(Point { x: 3, y: 2 }));
        assert!(!surface.contains(Point { x: 4, y: 2 }));
        assert!(!surface.contains(Point { x: 3, y: 3 }));
        assert!(!surface.contains(Point { x: -1, y: 0 }));
    }
}
