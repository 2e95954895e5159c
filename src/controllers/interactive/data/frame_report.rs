use crate::controllers::interactive::interaction_state::GesturePhase;
use crate::core::data::render_quality::RenderQuality;
use crate::core::data::view_parameters::ViewParameters;
use std::time::Duration;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameReport {
    pub frame_number: u64,
    pub quality: RenderQuality,
    pub phase: GesturePhase,
    pub view: ViewParameters,
    pub duration: Duration,
}

impl FrameReport {
    /// One-line summary for window titles and logs.
    #[must_use]
    pub fn status_line(&self) -> String {
        let center = self.view.center();

        format!(
            "center ({:.6}, {:.6}) | zoom {:.3e} | {} iterations | {:.1} ms{}",
            center.real,
            center.imag,
            self.view.zoom(),
            self.view.max_iterations(),
            self.duration.as_secs_f64() * 1000.0,
            match self.quality {
                RenderQuality::Full => "",
                RenderQuality::Reduced => " | preview",
            }
        )
    }
}
