//! Render export
//!
//! The simulation never draws. Each tick it is turned into a `Frame` of plain
//! draw commands that any external renderer can consume.

pub mod commands;
pub mod frame;

pub use commands::{DrawCommand, Shape, SpriteKind, TextCommand, colors};
pub use frame::{Frame, banner, build_frame, status_text};
