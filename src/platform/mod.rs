//! Platform abstraction layer
//!
//! The simulation talks to the outside world through two seams:
//! - `InputSource`: per-tick key state (movement, attack, quit)
//! - `Renderer`: consumes exported frames, never feeds back
//!
//! Frame pacing lives in `time`.

pub mod input;
pub mod output;
pub mod time;

pub use input::{Autopilot, ScriptedInput};
pub use output::LogRenderer;
pub use time::FramePacer;

use crate::renderer::Frame;
use crate::sim::{GameState, TickInput};

/// Source of per-tick input
pub trait InputSource {
    /// Sample input for the next tick. `state` is read-only context for
    /// sources that play the game themselves; device-backed sources ignore it.
    fn poll(&mut self, state: &GameState) -> TickInput;
}

/// Sink for rendered frames
pub trait Renderer {
    fn present(&mut self, frame: &Frame);
}
