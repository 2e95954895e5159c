mod adapters;
pub mod config;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use adapters::pixel_format::copy_argb_to_rgba;
pub use config::{ConfigError, ExplorerArgs, ExplorerConfig, StrategyArg, init_logging};
pub use controllers::interactive::{
    ControllerError, FrameReport, FrameSink, GesturePhase, InputEvent, InteractionGesture,
    InteractionLimits, InteractionLimitsError, InteractionState, InteractiveController, Key,
    LoopControl, PointerButton,
};
pub use crate::core::actions::render_frame::parallel_renderer::{
    ParallelRenderer, RendererConfig, RendererError, WorkerStrategy,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::framebuffer::{BACKGROUND, Framebuffer, FramebufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::render_quality::RenderQuality;
pub use crate::core::data::render_tile::RenderTile;
pub use crate::core::data::surface_dimensions::{SurfaceDimensions, SurfaceDimensionsError};
pub use crate::core::data::view_parameters::{ViewParameters, ViewParametersError};
pub use crate::core::fractals::mandelbrot::algorithm::escape_iterations;
pub use crate::core::fractals::mandelbrot::colour_map::colour_for;
pub use crate::core::util::partition_rows::partition_rows;
pub use crate::core::util::pixel_to_plane::{pixel_delta_to_plane, pixel_to_plane, plane_to_pixel};

#[cfg(feature = "gui")]
pub use input::gui::RunGuiCommand;
