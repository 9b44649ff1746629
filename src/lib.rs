//! TUI Simon (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_simon::{core,input,term,types}` so
//! the binary, integration tests and benches share one import path.

pub use tui_simon_core as core;
pub use tui_simon_input as input;
pub use tui_simon_term as term;
pub use tui_simon_types as types;
