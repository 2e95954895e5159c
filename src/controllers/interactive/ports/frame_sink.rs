use crate::controllers::interactive::data::frame_report::FrameReport;
use crate::core::data::framebuffer::Framebuffer;

/// Receives each finished frame. Called on the control thread after every
/// worker has been joined, so the framebuffer is complete and not shared.
pub trait FrameSink {
    fn present(&mut self, framebuffer: &Framebuffer, report: &FrameReport);
}
