//! Windowed front end: winit for the window and input, pixels for the framebuffer.

mod app;
pub mod commands;
mod events;

pub use commands::run_gui::RunGuiCommand;
