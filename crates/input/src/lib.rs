//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameInput`]. Each block
//! is bound to its digit key; everything else is either a restart, a quit or
//! ignored.

pub mod map;

pub use tui_simon_types as types;

pub use map::{handle_key_event, should_quit};
