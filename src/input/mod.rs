//! Input adapters for the explorer.
//!
//! Each adapter receives events from some source and translates them into
//! controller input.

#[cfg(feature = "gui")]
pub mod gui;
