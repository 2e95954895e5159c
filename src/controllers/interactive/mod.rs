//! Interactive exploration on the control thread.
//!
//! Input events mutate an [`InteractionState`], the controller renders a
//! snapshot of its view through the parallel renderer, and the finished
//! framebuffer goes to a [`FrameSink`]. Rendering never overlaps with input
//! handling.

mod controller;
pub mod data;
pub mod interaction_state;
pub mod ports;

pub use controller::{ControllerError, InteractiveController};
pub use data::frame_report::FrameReport;
pub use data::input_event::{InputEvent, Key, LoopControl, PointerButton};
pub use data::interaction_limits::{InteractionLimits, InteractionLimitsError};
pub use interaction_state::{GesturePhase, InteractionGesture, InteractionState};
pub use ports::FrameSink;
