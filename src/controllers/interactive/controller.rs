use crate::controllers::interactive::data::frame_report::FrameReport;
use crate::controllers::interactive::data::input_event::{InputEvent, Key, LoopControl, PointerButton};
use crate::controllers::interactive::data::interaction_limits::InteractionLimitsError;
use crate::controllers::interactive::interaction_state::InteractionState;
use crate::controllers::interactive::ports::frame_sink::FrameSink;
use crate::config::explorer_config::ExplorerConfig;
use crate::core::actions::render_frame::parallel_renderer::{ParallelRenderer, RendererError};
use crate::core::data::framebuffer::{Framebuffer, FramebufferError};
use log::{debug, info, trace};
use std::error::Error;
use std::fmt;
use std::time::Instant;

#[derive(Debug)]
pub enum ControllerError {
    Renderer(RendererError),
    Interaction(InteractionLimitsError),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Renderer(err) => write!(f, "renderer setup failed: {}", err),
            Self::Interaction(err) => write!(f, "invalid interaction setup: {}", err),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Renderer(err) => Some(err),
            Self::Interaction(err) => Some(err),
        }
    }
}

impl From<RendererError> for ControllerError {
    fn from(err: RendererError) -> Self {
        Self::Renderer(err)
    }
}

impl From<InteractionLimitsError> for ControllerError {
    fn from(err: InteractionLimitsError) -> Self {
        Self::Interaction(err)
    }
}

/// Owns the view, the renderer and the framebuffer, and runs them on the
/// control thread: input is applied strictly between frames.
pub struct InteractiveController {
    interaction: InteractionState,
    renderer: ParallelRenderer,
    framebuffer: Framebuffer,
    frames_rendered: u64,
}

impl InteractiveController {
    pub fn new(config: &ExplorerConfig) -> Result<Self, ControllerError> {
        let interaction = InteractionState::new(config.view, config.surface, config.limits)?;
        let renderer = ParallelRenderer::new(config.renderer)?;

        Ok(Self::from_parts(interaction, renderer))
    }

    #[must_use]
    pub fn from_parts(interaction: InteractionState, renderer: ParallelRenderer) -> Self {
        let surface = interaction.surface();

        info!(
            "Interactive controller ready: {}x{} surface",
            surface.width(),
            surface.height()
        );

        Self {
            interaction,
            renderer,
            framebuffer: Framebuffer::new(surface),
            frames_rendered: 0,
        }
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn handle_event(&mut self, event: InputEvent, now: Instant) -> LoopControl {
        trace!("Input event {:?}", event);

        let step = i64::from(self.interaction.limits().iteration_step);

        match event {
            InputEvent::PointerPressed {
                button: PointerButton::Left,
                position,
            } => self.interaction.begin_drag(position),
            InputEvent::PointerReleased {
                button: PointerButton::Left,
                ..
            } => self.interaction.end_drag(),
            InputEvent::PointerMoved { position } => self.interaction.update_drag(position),
            InputEvent::Scrolled { delta_y } => self.interaction.zoom(delta_y, now),
            InputEvent::KeyPressed(Key::IncreaseIterations) => {
                self.interaction.adjust_iteration_budget(step)
            }
            InputEvent::KeyPressed(Key::DecreaseIterations) => {
                self.interaction.adjust_iteration_budget(-step)
            }
            InputEvent::KeyPressed(Key::ResetView) => self.interaction.reset_view(),
            InputEvent::KeyPressed(Key::Quit) | InputEvent::QuitRequested => {
                return LoopControl::Quit;
            }
            InputEvent::PointerPressed { .. }
            | InputEvent::PointerReleased { .. }
            | InputEvent::KeyPressed(Key::Other) => {}
        }

        LoopControl::Continue
    }

    /// Renders the current view at the quality the gesture state asks for.
    pub fn render(&mut self, now: Instant) -> Result<FrameReport, FramebufferError> {
        let view = self.interaction.view();
        let phase = self.interaction.phase(now);
        let quality = self.interaction.quality(now);

        let start = Instant::now();
        self.renderer
            .render_frame(&view, &mut self.framebuffer, quality)?;
        let duration = start.elapsed();

        self.frames_rendered += 1;

        let report = FrameReport {
            frame_number: self.frames_rendered,
            quality,
            phase,
            view,
            duration,
        };

        debug!(
            "Frame {} rendered in {:?} ({:?}, {:?})",
            report.frame_number, report.duration, report.quality, report.phase
        );

        Ok(report)
    }

    /// Applies one poll cycle of input, then renders and presents a frame.
    /// A quit request ends the cycle without rendering.
    pub fn run_cycle<I, S>(
        &mut self,
        events: I,
        now: Instant,
        sink: &mut S,
    ) -> Result<LoopControl, FramebufferError>
    where
        I: IntoIterator<Item = InputEvent>,
        S: FrameSink + ?Sized,
    {
        for event in events {
            if self.handle_event(event, now) == LoopControl::Quit {
                self.interaction.finish_poll_cycle();
                return Ok(LoopControl::Quit);
            }
        }

        let report = self.render(now)?;
        sink.present(&self.framebuffer, &report);
        self.interaction.finish_poll_cycle();

        Ok(LoopControl::Continue)
    }
}
