use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::data::input_event::{InputEvent, LoopControl};
use crate::input::gui::events::WinitInputTranslator;
use crate::presenters::pixels::presenter::PixelsPresenter;
use log::error;
use std::time::Instant;
use winit::error::EventLoopError;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::Window;

/// Collects the input of one poll cycle between redraws and runs a controller
/// cycle on every redraw.
pub struct GuiApp {
    window: &'static Window,
    presenter: PixelsPresenter,
    controller: InteractiveController,
    translator: WinitInputTranslator,
    pending: Vec<InputEvent>,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        presenter: PixelsPresenter,
        controller: InteractiveController,
    ) -> Self {
        Self {
            window,
            presenter,
            controller,
            translator: WinitInputTranslator::default(),
            pending: Vec::new(),
        }
    }

    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), EventLoopError> {
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent { window_id, event } if window_id == self.window.id() => {
                if matches!(event, WindowEvent::RedrawRequested) {
                    if self.redraw() == LoopControl::Quit {
                        elwt.exit();
                    }
                } else if let Some(input) = self.translator.translate(&event) {
                    self.pending.push(input);
                }
            }
            Event::AboutToWait => self.window.request_redraw(),
            _ => {}
        })
    }

    fn redraw(&mut self) -> LoopControl {
        let events = std::mem::take(&mut self.pending);

        let control = match self
            .controller
            .run_cycle(events, Instant::now(), &mut self.presenter)
        {
            Ok(control) => control,
            Err(err) => {
                error!("Frame render failed: {}", err);
                return LoopControl::Quit;
            }
        };

        if let Some(err) = self.presenter.take_render_error() {
            error!("Presenting frame failed: {}", err);
            return LoopControl::Quit;
        }

        control
    }
}
