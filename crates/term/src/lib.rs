//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout libraries and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Implement the engine's `Presenter` as plain state that is rendered each frame
//! - Map mouse clicks back onto blocks with the same layout used for drawing

pub mod fb;
pub mod game_view;
pub mod presenter;
pub mod render_throttle;
pub mod renderer;

pub use tui_simon_core as core;
pub use tui_simon_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BlockRect, GameView, Viewport};
pub use presenter::{Progress, TermPresenter};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_bell_into, encode_diff_into, encode_full_into, TerminalRenderer};
