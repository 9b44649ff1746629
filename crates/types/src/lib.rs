//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Alphabet
//!
//! Blocks are identified by a [`Symbol`], a 1-based index into an [`Alphabet`].
//! The default alphabet has 4 symbols (a 2x2 grid of blocks); up to 9 are
//! representable so every symbol maps to a single digit key.
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep of the terminal loop (~60 FPS) |
//! | `PLAY_INTERVAL_MS` | 400 | Cadence of sequence playback and feedback steps |
//! | `LEVEL_PAUSE_MS` | 600 | Extra pause before the next round starts |
//! | `START_DELAY_MS` | 1000 | Delay before the very first level |
//! | `FLASH_MS` | 100 | How long a single block stays lit |
//!
//! # Examples
//!
//! ```
//! use tui_simon_types::{Alphabet, Mode, Symbol};
//!
//! let alphabet = Alphabet::default();
//! assert_eq!(alphabet.size(), 4);
//!
//! // Symbols are 1-based and parse from digit keys
//! let s = Symbol::from_char('3').unwrap();
//! assert_eq!(s.number(), 3);
//! assert!(alphabet.contains(s));
//!
//! assert!(Mode::Inputting.accepts_input());
//! assert!(!Mode::Listening.accepts_input());
//! ```

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Interval between played symbols, and between feedback steps.
pub const PLAY_INTERVAL_MS: u32 = 400;

/// Pause added on top of one interval before a level (re)starts.
pub const LEVEL_PAUSE_MS: u32 = 600;

/// Delay before the first level starts.
pub const START_DELAY_MS: u32 = 1000;

/// How long a block stays lit after a single flash.
pub const FLASH_MS: u32 = 100;

/// Replays granted at the start of every level.
pub const REPLAYS_PER_LEVEL: u8 = 1;

/// Length of the fixed level-0 sequence.
pub const INITIAL_SEQUENCE_LEN: usize = 4;

/// Symbols appended to the sequence at the start of every level >= 1.
pub const SYMBOLS_PER_LEVEL: usize = 2;

/// Default number of blocks.
pub const DEFAULT_ALPHABET_SIZE: u8 = 4;

/// Largest alphabet, one digit key per symbol.
pub const MAX_ALPHABET_SIZE: u8 = 9;

/// Status text shown during the tutorial level.
pub const STATUS_TUTORIAL: &str = "Click in the flashing order";

/// Status text shown after a level is completed.
pub const STATUS_CORRECT: &str = "Correct!";

/// End-of-game summary when no level was completed.
pub const SUMMARY_NO_LEVEL: &str = "Oops! You didn't accomplish any level.";

/// Status text for the start of `level`.
///
/// ```
/// use tui_simon_types::{level_status, STATUS_TUTORIAL};
///
/// assert_eq!(level_status(0), STATUS_TUTORIAL);
/// assert_eq!(level_status(3), "Memory Level: 3");
/// ```
pub fn level_status(level: u32) -> String {
    if level == 0 {
        STATUS_TUTORIAL.to_string()
    } else {
        format!("Memory Level: {level}")
    }
}

/// End-of-game summary for a game that ended while `level` was current.
///
/// The level in progress was not completed, so the achieved level is one less.
pub fn end_summary(level: u32) -> String {
    if level <= 1 {
        SUMMARY_NO_LEVEL.to_string()
    } else {
        format!("Your Memory Level: {}", level - 1)
    }
}

/// One block/tone pairing, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u8);

impl Symbol {
    /// Create a symbol from its 1-based number.
    ///
    /// Returns `None` for 0 or anything above [`MAX_ALPHABET_SIZE`].
    pub const fn new(number: u8) -> Option<Self> {
        if number == 0 || number > MAX_ALPHABET_SIZE {
            None
        } else {
            Some(Self(number))
        }
    }

    /// Create a symbol from a zero-based index.
    pub const fn from_index(index: u8) -> Option<Self> {
        Self::new(index.wrapping_add(1))
    }

    /// 1-based number, as shown on the block.
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Zero-based index, for table lookups.
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Parse a digit key (`'1'..='9'`).
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).and_then(|d| Self::new(d as u8))
    }

    /// Digit character for this symbol.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

/// The fixed, non-empty set of symbols in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    size: u8,
}

impl Alphabet {
    /// Create an alphabet of `size` symbols (`1..=MAX_ALPHABET_SIZE`).
    pub const fn new(size: u8) -> Option<Self> {
        if size == 0 || size > MAX_ALPHABET_SIZE {
            None
        } else {
            Some(Self { size })
        }
    }

    pub const fn size(&self) -> u8 {
        self.size
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        symbol.number() <= self.size
    }

    /// Symbol at a zero-based index, wrapping around the alphabet.
    pub fn symbol_at(&self, index: usize) -> Symbol {
        Symbol((index % self.size as usize) as u8 + 1)
    }

    /// All symbols in canonical order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> {
        (1..=self.size).map(Symbol)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            size: DEFAULT_ALPHABET_SIZE,
        }
    }
}

/// The three-state gate controlling input acceptance.
///
/// - **Waiting**: feedback or a transition is in flight
/// - **Listening**: the sequence is being played back
/// - **Inputting**: the player reproduces the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Waiting,
    Listening,
    Inputting,
}

impl Mode {
    pub fn accepts_input(&self) -> bool {
        matches!(self, Mode::Inputting)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Waiting => "waiting",
            Mode::Listening => "listening",
            Mode::Inputting => "inputting",
        }
    }
}

/// Audio cue requested from the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// The tone paired with a block.
    Tone(Symbol),
    /// Chord played after a completed level.
    Correct,
    /// Chord played after a mismatch.
    Wrong,
}

impl Cue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Tone(_) => "tone",
            Cue::Correct => "correct",
            Cue::Wrong => "wrong",
        }
    }
}

/// Overall state of the input-progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Verdict {
    #[default]
    Pending,
    Correct,
    Wrong,
}

/// What a single input signal did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputOutcome {
    /// Input arrived outside the Inputting mode and was dropped.
    Ignored,
    /// Symbol matched, the sequence is not complete yet.
    Progress,
    /// The whole sequence was reproduced.
    LevelComplete,
    /// Mismatch with replay budget left; the level is played again.
    Replay,
    /// Mismatch with no replay budget left.
    GameOver,
}

/// Discrete player signals understood by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameInput {
    Press(Symbol),
    Restart,
}
