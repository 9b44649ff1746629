//! Game configuration: alphabet, timing and RNG seed.

use std::env;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::types::{
    Alphabet, FLASH_MS, LEVEL_PAUSE_MS, MAX_ALPHABET_SIZE, PLAY_INTERVAL_MS, START_DELAY_MS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub alphabet: Alphabet,
    /// Cadence of playback and of feedback steps.
    pub play_interval_ms: u32,
    /// Extra pause before a level (re)starts.
    pub pause_ms: u32,
    /// Delay before the first level after `start()`.
    pub start_delay_ms: u32,
    /// How long one flashed block stays lit.
    pub flash_ms: u32,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            play_interval_ms: PLAY_INTERVAL_MS,
            pause_ms: LEVEL_PAUSE_MS,
            start_delay_ms: START_DELAY_MS,
            flash_ms: FLASH_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Read overrides from the environment.
    ///
    /// Environment variables:
    /// - `SIMON_PLAY_INTERVAL_MS` - Playback cadence (default: 400)
    /// - `SIMON_PAUSE_MS` - Pause before a level restarts (default: 600)
    /// - `SIMON_START_DELAY_MS` - Delay before the first level (default: 1000)
    /// - `SIMON_FLASH_MS` - Single block flash duration (default: 100)
    /// - `SIMON_SEED` - Fixed RNG seed (default: OS entropy)
    ///
    /// Unparsable values fall back to the default. Call [`validate`](Self::validate)
    /// before using the result.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u32>("SIMON_PLAY_INTERVAL_MS") {
            config.play_interval_ms = ms;
        }
        if let Some(ms) = read_env::<u32>("SIMON_PAUSE_MS") {
            config.pause_ms = ms;
        }
        if let Some(ms) = read_env::<u32>("SIMON_START_DELAY_MS") {
            config.start_delay_ms = ms;
        }
        if let Some(ms) = read_env::<u32>("SIMON_FLASH_MS") {
            config.flash_ms = ms;
        }
        config.seed = read_env::<u64>("SIMON_SEED");

        config
    }

    pub fn with_alphabet_size(mut self, size: u8) -> Result<Self, ConfigError> {
        self.alphabet = Alphabet::new(size).ok_or(ConfigError::InvalidAlphabet {
            size,
            max: MAX_ALPHABET_SIZE,
        })?;
        Ok(self)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.play_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.flash_ms >= self.play_interval_ms {
            return Err(ConfigError::FlashTooLong {
                flash_ms: self.flash_ms,
                interval_ms: self.play_interval_ms,
            });
        }
        Ok(())
    }

    /// Delay from a mismatch or level completion to the next round.
    pub fn round_delay_ms(&self) -> u32 {
        self.play_interval_ms.saturating_add(self.pause_ms)
    }
}

/// Parse an environment variable, treating missing or malformed values as unset.
pub fn read_env<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
