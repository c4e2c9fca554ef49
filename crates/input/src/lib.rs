//! Input layer: window events are mapped to [`Action`]s, accumulated in an
//! [`InputState`] during event polling, and drained once per frame into a
//! [`FrameInput`] that drives the camera.
//!
//! # Invariants
//! - Mouse-look is dropped while the free-cursor modifier is held.
//! - The first look sample after any cursor-mode change or refocus is discarded.
//! - Losing window focus releases held keys and recaptures the cursor.
//! - A frame's input is fully applied before its view matrix is read.

pub mod action;
pub mod state;

pub use action::{Action, CursorMode};
pub use state::{FrameInput, InputState};
