use crate::adapters::pixel_format::copy_argb_to_rgba;
use crate::controllers::interactive::data::frame_report::FrameReport;
use crate::controllers::interactive::ports::frame_sink::FrameSink;
use crate::core::data::framebuffer::Framebuffer;
use crate::core::data::surface_dimensions::SurfaceDimensions;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

pub const WINDOW_TITLE: &str = "Mandelbrot Explorer";

/// Uploads finished frames to a `pixels` surface and mirrors the frame status
/// in the window title.
pub struct PixelsPresenter {
    window: &'static Window,
    pixels: Pixels<'static>,
    render_error: Option<pixels::Error>,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, surface: SurfaceDimensions) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(surface.width(), surface.height(), surface_texture)?;

        Ok(Self {
            window,
            pixels,
            render_error: None,
        })
    }

    /// The error from the most recent failed present, if any.
    pub fn take_render_error(&mut self) -> Option<pixels::Error> {
        self.render_error.take()
    }
}

impl FrameSink for PixelsPresenter {
    fn present(&mut self, framebuffer: &Framebuffer, report: &FrameReport) {
        copy_argb_to_rgba(framebuffer.cells(), self.pixels.frame_mut());

        self.window
            .set_title(&format!("{} | {}", WINDOW_TITLE, report.status_line()));

        if let Err(err) = self.pixels.render() {
            self.render_error = Some(err);
        }
    }
}
