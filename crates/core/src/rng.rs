//! RNG module - sources of random symbol indices
//!
//! The sequence generator only ever needs "a uniform index below `bound`".
//! That is abstracted as [`SymbolSource`] so games can run on real randomness
//! ([`SeededSource`], ChaCha8) or on a fixed script ([`ScriptedSource`]) for
//! deterministic tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Draws uniform indices for new sequence symbols.
pub trait SymbolSource {
    /// Return a uniform index in `0..bound`. `bound` is never 0.
    fn next_index(&mut self, bound: u8) -> u8;
}

impl<S: SymbolSource + ?Sized> SymbolSource for &mut S {
    fn next_index(&mut self, bound: u8) -> u8 {
        (**self).next_index(bound)
    }
}

/// ChaCha8-backed source; the same seed produces the same game.
#[derive(Debug, Clone)]
pub struct SeededSource {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this source was created with (for reproducing a session).
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl SymbolSource for SeededSource {
    fn next_index(&mut self, bound: u8) -> u8 {
        self.inner.gen_range(0..bound)
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
///
/// Each scripted value is reduced modulo `bound`, so a script written for a
/// larger alphabet still yields valid symbols.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Vec<u8>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(script: impl Into<Vec<u8>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Number of indices handed out so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl SymbolSource for ScriptedSource {
    fn next_index(&mut self, bound: u8) -> u8 {
        if self.script.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % bound
    }
}
