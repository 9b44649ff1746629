//! TermPresenter: the engine's presenter for a terminal.
//!
//! It only stores what the engine asked for (lit blocks, status text,
//! progress, overlay, last cue). [`crate::GameView`] reads that state each
//! frame. Sound is approximated with the terminal bell.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::core::Presenter;
use crate::types::{Alphabet, Cue, Symbol, Verdict, MAX_ALPHABET_SIZE};

/// Input-progress indicator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Progress {
    pub total: usize,
    pub filled: usize,
    pub verdict: Verdict,
}

#[derive(Debug, Clone)]
pub struct TermPresenter {
    alphabet: Alphabet,
    lit: [bool; MAX_ALPHABET_SIZE as usize],
    input_enabled: bool,
    status: String,
    progress: Progress,
    overlay: Option<String>,
    last_cue: Option<Cue>,
    pending_bells: u32,
    bell: bool,
}

impl TermPresenter {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            lit: [false; MAX_ALPHABET_SIZE as usize],
            input_enabled: false,
            status: String::new(),
            progress: Progress::default(),
            overlay: None,
            last_cue: None,
            pending_bells: 0,
            bell: true,
        }
    }

    /// Enable or disable the terminal bell for cues.
    pub fn with_bell(mut self, bell: bool) -> Self {
        self.bell = bell;
        self
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn is_lit(&self, symbol: Symbol) -> bool {
        self.alphabet.contains(symbol) && self.lit[symbol.index()]
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn overlay(&self) -> Option<&str> {
        self.overlay.as_deref()
    }

    pub fn last_cue(&self) -> Option<Cue> {
        self.last_cue
    }

    /// Hash of everything visible, for skipping unchanged frames.
    pub fn fingerprint(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.lit.hash(&mut h);
        self.input_enabled.hash(&mut h);
        self.status.hash(&mut h);
        self.progress.hash(&mut h);
        self.overlay.hash(&mut h);
        self.last_cue.hash(&mut h);
        h.finish()
    }

    /// Bells requested since the last call.
    pub fn take_bells(&mut self) -> u32 {
        std::mem::take(&mut self.pending_bells)
    }

    fn set_lit(&mut self, symbol: Symbol, on: bool) {
        if self.alphabet.contains(symbol) {
            self.lit[symbol.index()] = on;
        }
    }
}

impl Presenter for TermPresenter {
    fn illuminate(&mut self, symbol: Symbol) {
        self.set_lit(symbol, true);
    }

    fn extinguish(&mut self, symbol: Symbol) {
        self.set_lit(symbol, false);
    }

    fn illuminate_all(&mut self) {
        let n = self.alphabet.size() as usize;
        self.lit[..n].fill(true);
    }

    fn extinguish_all(&mut self) {
        self.lit.fill(false);
    }

    fn play(&mut self, cue: Cue) {
        self.last_cue = Some(cue);
        if self.bell {
            self.pending_bells = self.pending_bells.saturating_add(1);
        }
    }

    fn set_status(&mut self, text: &str) {
        self.status.clear();
        self.status.push_str(text);
    }

    fn render_progress(&mut self, total: usize, filled: usize, verdict: Verdict) {
        self.progress = Progress {
            total,
            filled: filled.min(total),
            verdict,
        };
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }

    fn show_end_overlay(&mut self, summary: &str) {
        self.overlay = Some(summary.to_string());
    }

    fn hide_end_overlay(&mut self) {
        self.overlay = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(n: u8) -> Symbol {
        Symbol::new(n).unwrap()
    }

    #[test]
    fn lighting_is_idempotent() {
        let mut p = TermPresenter::new(Alphabet::default());
        p.illuminate(sym(2));
        p.illuminate(sym(2));
        assert!(p.is_lit(sym(2)));
        p.extinguish(sym(2));
        p.extinguish(sym(2));
        assert!(!p.is_lit(sym(2)));
    }

    #[test]
    fn all_on_only_covers_alphabet() {
        let mut p = TermPresenter::new(Alphabet::default());
        p.illuminate_all();
        assert!((1..=4).all(|n| p.is_lit(sym(n))));
        assert!(!p.is_lit(sym(5)));
        p.extinguish_all();
        assert!((1..=4).all(|n| !p.is_lit(sym(n))));
    }

    #[test]
    fn unknown_symbols_are_ignored() {
        let mut p = TermPresenter::new(Alphabet::default());
        p.illuminate(sym(9));
        assert!(!p.is_lit(sym(9)));
    }

    #[test]
    fn cues_ring_bell_when_enabled() {
        let mut p = TermPresenter::new(Alphabet::default());
        p.play(Cue::Tone(sym(1)));
        p.play(Cue::Wrong);
        assert_eq!(p.last_cue(), Some(Cue::Wrong));
        assert_eq!(p.take_bells(), 2);
        assert_eq!(p.take_bells(), 0);

        let mut quiet = TermPresenter::new(Alphabet::default()).with_bell(false);
        quiet.play(Cue::Correct);
        assert_eq!(quiet.take_bells(), 0);
        assert_eq!(quiet.last_cue(), Some(Cue::Correct));
    }

    #[test]
    fn fingerprint_tracks_visible_state() {
        let mut p = TermPresenter::new(Alphabet::default());
        let before = p.fingerprint();
        assert_eq!(before, p.fingerprint());
        p.illuminate(sym(1));
        assert_ne!(before, p.fingerprint());
        p.extinguish(sym(1));
        assert_eq!(before, p.fingerprint());
    }

    #[test]
    fn progress_and_overlay() {
        let mut p = TermPresenter::new(Alphabet::default());
        p.render_progress(4, 9, Verdict::Wrong);
        assert_eq!(
            p.progress(),
            Progress {
                total: 4,
                filled: 4,
                verdict: Verdict::Wrong
            }
        );

        p.show_end_overlay("bye");
        assert_eq!(p.overlay(), Some("bye"));
        p.hide_end_overlay();
        assert_eq!(p.overlay(), None);

        p.set_status("Memory Level: 2");
        assert_eq!(p.status(), "Memory Level: 2");
    }
}
