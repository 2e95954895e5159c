use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::util::hsv_to_rgb::hsv_to_rgb;

/// Interior points are black, everything else walks the hue wheel in
/// proportion to how long it took to escape.
#[must_use]
pub fn colour_for(iterations: u32, max_iterations: u32) -> Colour {
    if iterations == max_iterations {
        return Colour::BLACK;
    }

    let hue = 360.0 * iterations as f64 / max_iterations as f64;
    hsv_to_rgb(hue, 1.0, 1.0)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RainbowColourMap {
    max_iterations: u32,
}

impl RainbowColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for RainbowColourMap {
    type T = u32;

    fn map(&self, value: u32) -> Colour {
        colour_for(value, self.max_iterations)
    }
}
