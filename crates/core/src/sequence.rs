//! Sequence generator - builds the pattern the player has to reproduce
//!
//! Level 0 always uses the canonical sequence `1, 2, 3, 4`. Every later level
//! appends [`SYMBOLS_PER_LEVEL`] symbols drawn uniformly from the alphabet.

use crate::rng::SymbolSource;
use crate::types::{Alphabet, Symbol, INITIAL_SEQUENCE_LEN, SYMBOLS_PER_LEVEL};

#[derive(Debug, Clone)]
pub struct SequenceGenerator<S> {
    alphabet: Alphabet,
    source: S,
}

impl<S: SymbolSource> SequenceGenerator<S> {
    pub fn new(alphabet: Alphabet, source: S) -> Self {
        Self { alphabet, source }
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The fixed level-0 sequence, in canonical symbol order.
    ///
    /// Alphabets smaller than the sequence wrap around (`1, 2, 1, 2`).
    pub fn initial_sequence(&self) -> Vec<Symbol> {
        (0..INITIAL_SEQUENCE_LEN)
            .map(|i| self.alphabet.symbol_at(i))
            .collect()
    }

    /// Append the symbols for one more level.
    pub fn extend(&mut self, sequence: &mut Vec<Symbol>) {
        sequence.reserve(SYMBOLS_PER_LEVEL);
        for _ in 0..SYMBOLS_PER_LEVEL {
            let index = self.source.next_index(self.alphabet.size());
            sequence.push(self.alphabet.symbol_at(index as usize));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedSource, SeededSource};

    fn numbers(seq: &[Symbol]) -> Vec<u8> {
        seq.iter().map(|s| s.number()).collect()
    }

    #[test]
    fn test_initial_sequence_is_canonical() {
        let gen = SequenceGenerator::new(Alphabet::default(), SeededSource::new(1));
        assert_eq!(numbers(&gen.initial_sequence()), vec![1, 2, 3, 4]);

        // Same across seeds.
        let other = SequenceGenerator::new(Alphabet::default(), SeededSource::new(999));
        assert_eq!(gen.initial_sequence(), other.initial_sequence());
    }

    #[test]
    fn test_initial_sequence_wraps_small_alphabet() {
        let alphabet = Alphabet::new(2).unwrap();
        let gen = SequenceGenerator::new(alphabet, ScriptedSource::new(vec![0u8]));
        assert_eq!(numbers(&gen.initial_sequence()), vec![1, 2, 1, 2]);
    }

    #[test]
    fn test_extend_appends_two_symbols() {
        let mut gen = SequenceGenerator::new(Alphabet::default(), ScriptedSource::new(vec![3u8, 0]));
        let mut seq = gen.initial_sequence();
        gen.extend(&mut seq);
        assert_eq!(numbers(&seq), vec![1, 2, 3, 4, 4, 1]);
    }

    #[test]
    fn test_extend_never_touches_prefix() {
        let mut gen = SequenceGenerator::new(Alphabet::default(), SeededSource::new(42));
        let mut seq = gen.initial_sequence();
        for level in 1..=10 {
            let before = seq.clone();
            gen.extend(&mut seq);
            assert_eq!(seq.len(), 4 + 2 * level);
            assert_eq!(&seq[..before.len()], &before[..]);
        }
    }

    #[test]
    fn test_extend_stays_in_alphabet() {
        let alphabet = Alphabet::default();
        let mut gen = SequenceGenerator::new(alphabet, SeededSource::new(3));
        let mut seq = Vec::new();
        for _ in 0..200 {
            gen.extend(&mut seq);
        }
        assert!(seq.iter().all(|s| alphabet.contains(*s)));
    }
}
