//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the Simon game rules, the turn state machine and its
//! timing. It has **zero dependencies** on terminals, windows or audio, making it:
//!
//! - **Deterministic**: A scripted or seeded symbol source reproduces a game exactly
//! - **Testable**: Time is virtual; tests advance it with [`SimonGame::tick`]
//! - **Portable**: Output goes through the [`Presenter`] trait
//!
//! # Module Structure
//!
//! - [`config`]: Timing, alphabet and seed settings
//! - [`engine`]: The Listening → Inputting → Waiting state machine
//! - [`presenter`]: Output contract and a recording implementation
//! - [`rng`]: Swappable sources of random symbol indices
//! - [`scheduler`]: Generation-stamped timer queue
//! - [`sequence`]: Level sequence generation
//!
//! # Game Rules
//!
//! - **Level 0**: Fixed sequence `1 2 3 4`
//! - **Level N**: Previous sequence plus 2 random symbols
//! - **Replay**: One replay per level after a wrong input, then game over
//! - **Input gate**: Symbols are only accepted while the player is Inputting
//!
//! # Example
//!
//! ```
//! use tui_simon_core::{GameConfig, Recorder, ScriptedSource, SimonGame};
//! use tui_simon_types::{InputOutcome, Mode};
//!
//! let mut game = SimonGame::new(
//!     GameConfig::default(),
//!     Recorder::new(),
//!     ScriptedSource::new(vec![0u8, 1]),
//! )
//! .unwrap();
//! game.start();
//!
//! // Start delay, four played symbols, one more interval.
//! game.tick(1000 + 5 * 400);
//! assert_eq!(game.mode(), Mode::Inputting);
//!
//! let sequence = game.sequence().to_vec();
//! let mut outcome = InputOutcome::Ignored;
//! for symbol in sequence {
//!     outcome = game.press(symbol);
//! }
//! assert_eq!(outcome, InputOutcome::LevelComplete);
//! assert_eq!(game.level(), 1);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod presenter;
pub mod rng;
pub mod scheduler;
pub mod sequence;
pub mod snapshot;

pub use tui_simon_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use engine::SimonGame;
pub use error::ConfigError;
pub use presenter::{Presenter, PresenterCall, Recorder};
pub use rng::{ScriptedSource, SeededSource, SymbolSource};
pub use scheduler::{Scheduler, Stamp};
pub use sequence::SequenceGenerator;
pub use snapshot::GameSnapshot;
