//! Runtime configuration for the terminal binary.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use tui_simon::core::GameConfig;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub game: GameConfig,
    /// Ring the terminal bell for audio cues.
    pub bell: bool,
    /// Write `tracing` output to this file; logging is off when unset.
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables (in addition to the `SIMON_*` game settings read
    /// by [`GameConfig::from_env`]):
    /// - `SIMON_BELL` - Set to "0", "false" or "off" to silence cues (default: on)
    /// - `SIMON_LOG_PATH` - Log file path (default: no logging)
    pub fn from_env() -> Result<Self> {
        let game = GameConfig::from_env();
        game.validate().context("invalid SIMON_* game settings")?;

        let bell = env::var("SIMON_BELL")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        let log_path = env::var("SIMON_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            game,
            bell,
            log_path,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}
