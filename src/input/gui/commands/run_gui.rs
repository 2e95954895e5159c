use crate::config::explorer_config::ExplorerConfig;
use crate::controllers::interactive::InteractiveController;
use crate::input::gui::app::GuiApp;
use crate::presenters::pixels::presenter::{PixelsPresenter, WINDOW_TITLE};
use log::info;
use std::error::Error;
use winit::dpi::PhysicalSize;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

pub struct RunGuiCommand {
    config: ExplorerConfig,
}

impl RunGuiCommand {
    #[must_use]
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    /// Opens a fixed-size window and blocks until the explorer quits.
    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let surface = self.config.surface;
        let event_loop = EventLoop::new()?;

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(PhysicalSize::new(surface.width(), surface.height()))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter = PixelsPresenter::new(window, surface)?;
        let controller = InteractiveController::new(&self.config)?;

        info!(
            "Window open at {}x{}: drag to pan, wheel to zoom, 1/0 to change iterations, R to reset, Esc to quit",
            surface.width(),
            surface.height()
        );

        GuiApp::new(window, presenter, controller).run(event_loop)?;

        Ok(())
    }
}
