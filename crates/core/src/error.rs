//! Error types for game configuration.
//!
//! Gameplay itself has no error paths: a wrong input is an ordinary state
//! transition. Only building a game from bad settings can fail.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("alphabet size must be between 1 and {max}, got {size}")]
    InvalidAlphabet { size: u8, max: u8 },

    #[error("play interval must be greater than zero")]
    ZeroInterval,

    #[error("flash duration ({flash_ms}ms) must be shorter than the play interval ({interval_ms}ms)")]
    FlashTooLong { flash_ms: u32, interval_ms: u32 },
}
