//! Presenter contract - everything the engine shows or plays
//!
//! The engine never touches a terminal, window or audio device directly. It
//! drives a [`Presenter`], which projects engine state onto whatever output
//! the host has. Every call is fire-and-forget: nothing is returned to the
//! engine, and the visual toggles are idempotent.

use crate::types::{Cue, Symbol, Verdict};

pub trait Presenter {
    fn illuminate(&mut self, symbol: Symbol);
    fn extinguish(&mut self, symbol: Symbol);
    fn illuminate_all(&mut self);
    fn extinguish_all(&mut self);

    /// Play a cue from the beginning, even if it is already playing.
    fn play(&mut self, cue: Cue);

    fn set_status(&mut self, text: &str);

    /// Show `total` indicator cells with the first `filled` marked.
    fn render_progress(&mut self, total: usize, filled: usize, verdict: Verdict);

    /// Whether blocks currently accept input (greyed out otherwise).
    fn set_input_enabled(&mut self, enabled: bool);

    fn show_end_overlay(&mut self, summary: &str);
    fn hide_end_overlay(&mut self);
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn illuminate(&mut self, symbol: Symbol) {
        (**self).illuminate(symbol)
    }
    fn extinguish(&mut self, symbol: Symbol) {
        (**self).extinguish(symbol)
    }
    fn illuminate_all(&mut self) {
        (**self).illuminate_all()
    }
    fn extinguish_all(&mut self) {
        (**self).extinguish_all()
    }
    fn play(&mut self, cue: Cue) {
        (**self).play(cue)
    }
    fn set_status(&mut self, text: &str) {
        (**self).set_status(text)
    }
    fn render_progress(&mut self, total: usize, filled: usize, verdict: Verdict) {
        (**self).render_progress(total, filled, verdict)
    }
    fn set_input_enabled(&mut self, enabled: bool) {
        (**self).set_input_enabled(enabled)
    }
    fn show_end_overlay(&mut self, summary: &str) {
        (**self).show_end_overlay(summary)
    }
    fn hide_end_overlay(&mut self) {
        (**self).hide_end_overlay()
    }
}

/// One recorded presenter call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterCall {
    Illuminate(Symbol),
    Extinguish(Symbol),
    IlluminateAll,
    ExtinguishAll,
    Play(Cue),
    Status(String),
    Progress {
        total: usize,
        filled: usize,
        verdict: Verdict,
    },
    InputEnabled(bool),
    ShowEndOverlay(String),
    HideEndOverlay,
}

/// Presenter that records every call, for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Vec<PresenterCall>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[PresenterCall] {
        &self.calls
    }

    /// Take all calls recorded so far.
    pub fn take(&mut self) -> Vec<PresenterCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn count(&self, call: &PresenterCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    /// Audio cues played, in order.
    pub fn cues(&self) -> Vec<Cue> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                PresenterCall::Play(cue) => Some(*cue),
                _ => None,
            })
            .collect()
    }

    pub fn last_status(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            PresenterCall::Status(s) => Some(s.as_str()),
            _ => None,
        })
    }

    pub fn last_progress(&self) -> Option<(usize, usize, Verdict)> {
        self.calls.iter().rev().find_map(|c| match c {
            PresenterCall::Progress {
                total,
                filled,
                verdict,
            } => Some((*total, *filled, *verdict)),
            _ => None,
        })
    }
}

impl Presenter for Recorder {
    fn illuminate(&mut self, symbol: Symbol) {
        self.calls.push(PresenterCall::Illuminate(symbol));
    }
    fn extinguish(&mut self, symbol: Symbol) {
        self.calls.push(PresenterCall::Extinguish(symbol));
    }
    fn illuminate_all(&mut self) {
        self.calls.push(PresenterCall::IlluminateAll);
    }
    fn extinguish_all(&mut self) {
        self.calls.push(PresenterCall::ExtinguishAll);
    }
    fn play(&mut self, cue: Cue) {
        self.calls.push(PresenterCall::Play(cue));
    }
    fn set_status(&mut self, text: &str) {
        self.calls.push(PresenterCall::Status(text.to_string()));
    }
    fn render_progress(&mut self, total: usize, filled: usize, verdict: Verdict) {
        self.calls.push(PresenterCall::Progress {
            total,
            filled,
            verdict,
        });
    }
    fn set_input_enabled(&mut self, enabled: bool) {
        self.calls.push(PresenterCall::InputEnabled(enabled));
    }
    fn show_end_overlay(&mut self, summary: &str) {
        self.calls
            .push(PresenterCall::ShowEndOverlay(summary.to_string()));
    }
    fn hide_end_overlay(&mut self) {
        self.calls.push(PresenterCall::HideEndOverlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_queries() {
        let mut r = Recorder::new();
        let one = Symbol::new(1).unwrap();
        r.illuminate(one);
        r.play(Cue::Tone(one));
        r.set_status("a");
        r.render_progress(4, 1, Verdict::Pending);
        r.play(Cue::Wrong);
        r.set_status("b");

        assert_eq!(r.cues(), vec![Cue::Tone(one), Cue::Wrong]);
        assert_eq!(r.last_status(), Some("b"));
        assert_eq!(r.last_progress(), Some((4, 1, Verdict::Pending)));
        assert_eq!(r.count(&PresenterCall::Illuminate(one)), 1);

        let taken = r.take();
        assert_eq!(taken.len(), 6);
        assert!(r.calls().is_empty());
    }

    #[test]
    fn test_presenter_through_mut_ref() {
        fn drive<P: Presenter>(mut p: P) {
            p.illuminate_all();
            p.hide_end_overlay();
        }

        let mut r = Recorder::new();
        drive(&mut r);
        assert_eq!(
            r.calls(),
            &[PresenterCall::IlluminateAll, PresenterCall::HideEndOverlay]
        );
    }
}
