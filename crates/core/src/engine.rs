//! Game engine - the Simon turn state machine
//!
//! A round cycles through three modes:
//!
//! ```text
//! Listening ──(sequence played)──▶ Inputting ──(full match / mismatch)──▶ Waiting
//!     ▲                                                                      │
//!     └──────────────────(next level / replay after a delay)─────────────────┘
//! ```
//!
//! All timing runs on a virtual clock advanced by [`SimonGame::tick`]. Deferred
//! work is a [`Timer`] in the [`Scheduler`], stamped with the generation and
//! mode current when it was scheduled. A timer whose stamp no longer matches
//! when it comes due is dropped, so a restart or a new round can never be
//! disturbed by leftovers of the previous one.

use tracing::{debug, info, trace};

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::presenter::Presenter;
use crate::rng::{SeededSource, SymbolSource};
use crate::scheduler::{Scheduler, Stamp};
use crate::sequence::SequenceGenerator;
use crate::snapshot::GameSnapshot;
use crate::types::{
    end_summary, level_status, Cue, InputOutcome, Mode, Symbol, Verdict, REPLAYS_PER_LEVEL,
    STATUS_CORRECT,
};

/// Deferred engine work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timer {
    /// Begin the current level (extending the sequence past level 0).
    StartLevel,
    /// Play the symbol at `index`, then schedule the next one.
    PlaybackTick { index: usize },
    BeginInput,
    FlashOff(Symbol),
    /// Mark the progress indicator correct, in step with the success chord.
    RevealVerdict,
    Celebrate,
    LightsOut,
    ReplayLevel,
    EndGame,
}

pub struct SimonGame<P, S = SeededSource> {
    config: GameConfig,
    presenter: P,
    generator: SequenceGenerator<S>,
    timers: Scheduler<Timer>,
    sequence: Vec<Symbol>,
    input: Vec<Symbol>,
    level: u32,
    replay_budget: u8,
    mode: Mode,
    /// Bumped on every listening round and on restart.
    generation: u32,
    clock_ms: u64,
    started: bool,
    overlay_visible: bool,
}

impl<P: Presenter> SimonGame<P, SeededSource> {
    /// Create a game seeded from `config.seed`, or from OS entropy.
    pub fn seeded(config: GameConfig, presenter: P) -> Result<Self, ConfigError> {
        let source = config
            .seed
            .map(SeededSource::new)
            .unwrap_or_else(SeededSource::from_entropy);
        Self::new(config, presenter, source)
    }
}

impl<P: Presenter, S: SymbolSource> SimonGame<P, S> {
    pub fn new(config: GameConfig, presenter: P, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let generator = SequenceGenerator::new(config.alphabet, source);
        let sequence = generator.initial_sequence();

        Ok(Self {
            config,
            presenter,
            generator,
            timers: Scheduler::new(),
            sequence,
            input: Vec::new(),
            level: 0,
            replay_budget: REPLAYS_PER_LEVEL,
            mode: Mode::Waiting,
            generation: 0,
            clock_ms: 0,
            started: false,
            overlay_visible: false,
        })
    }

    /// Schedule the first level after the configured start delay.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.presenter.set_input_enabled(false);
        self.schedule(self.config.start_delay_ms, Timer::StartLevel);
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn replay_budget(&self) -> u8 {
        self.replay_budget
    }

    pub fn sequence(&self) -> &[Symbol] {
        &self.sequence
    }

    pub fn input(&self) -> &[Symbol] {
        &self.input
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Number of timers still queued (stale ones included).
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            mode: self.mode,
            level: self.level,
            replay_budget: self.replay_budget,
            sequence_len: self.sequence.len(),
            input_len: self.input.len(),
            generation: self.generation,
            overlay_visible: self.overlay_visible,
            started: self.started,
        }
    }

    /// Advance the virtual clock, firing every timer that comes due.
    ///
    /// Timers fire at their own due time, so follow-up delays scheduled from a
    /// timer are exact regardless of how coarse `elapsed_ms` is.
    pub fn tick(&mut self, elapsed_ms: u32) {
        let target = self.clock_ms.saturating_add(u64::from(elapsed_ms));

        while let Some(due) = self.timers.pop_due(target) {
            self.clock_ms = due.at_ms;
            let current = self.stamp();
            if due.stamp != current {
                trace!(timer = ?due.timer, scheduled = ?due.stamp, current = ?current, "dropping stale timer");
                continue;
            }
            self.fire(due.timer);
        }

        self.clock_ms = target;
    }

    /// Handle one input symbol from the player.
    pub fn press(&mut self, symbol: Symbol) -> InputOutcome {
        if !self.mode.accepts_input() {
            trace!(symbol = symbol.number(), mode = self.mode.as_str(), "input ignored");
            return InputOutcome::Ignored;
        }

        self.input.push(symbol);
        let total = self.sequence.len();
        let on_track = self.sequence.starts_with(&self.input);

        let verdict = if on_track {
            Verdict::Pending
        } else {
            Verdict::Wrong
        };
        self.presenter
            .render_progress(total, self.input.len(), verdict);

        if self.generator.alphabet().contains(symbol) {
            self.flash(symbol);
        }

        if !on_track {
            return self.mismatch();
        }

        if self.input.len() == total {
            self.complete_level();
            InputOutcome::LevelComplete
        } else {
            InputOutcome::Progress
        }
    }

    /// Dismiss the end-of-game overlay and start over at level 0.
    ///
    /// Returns `false` (and does nothing) unless the overlay is showing.
    pub fn restart(&mut self) -> bool {
        if !self.overlay_visible {
            return false;
        }

        self.overlay_visible = false;
        self.presenter.hide_end_overlay();
        self.timers.clear();
        self.generation = self.generation.wrapping_add(1);
        self.level = 0;
        info!("game restarted");
        self.start_level();
        true
    }

    fn stamp(&self) -> Stamp {
        Stamp {
            generation: self.generation,
            mode: self.mode,
        }
    }

    fn schedule(&mut self, delay_ms: u32, timer: Timer) {
        let stamp = self.stamp();
        self.timers.schedule(self.clock_ms, delay_ms, stamp, timer);
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!(from = self.mode.as_str(), to = mode.as_str(), "mode change");
        }
        self.mode = mode;
        self.presenter.set_input_enabled(mode.accepts_input());
    }

    fn fire(&mut self, timer: Timer) {
        match timer {
            Timer::StartLevel => self.start_level(),
            Timer::PlaybackTick { index } => self.playback_tick(index),
            Timer::BeginInput => {
                self.input.clear();
                self.set_mode(Mode::Inputting);
            }
            Timer::FlashOff(symbol) => self.presenter.extinguish(symbol),
            Timer::RevealVerdict => {
                self.presenter
                    .render_progress(self.sequence.len(), self.input.len(), Verdict::Correct);
            }
            Timer::Celebrate => {
                self.presenter.illuminate_all();
                self.presenter.play(Cue::Correct);
                self.presenter.set_status(STATUS_CORRECT);
            }
            Timer::LightsOut => self.presenter.extinguish_all(),
            Timer::ReplayLevel => {
                self.presenter.set_status(&level_status(self.level));
                self.start_listening();
            }
            Timer::EndGame => self.end_game(),
        }
    }

    fn start_level(&mut self) {
        self.replay_budget = REPLAYS_PER_LEVEL;

        if self.level == 0 {
            self.sequence = self.generator.initial_sequence();
        } else {
            self.generator.extend(&mut self.sequence);
        }

        self.presenter.set_status(&level_status(self.level));
        debug!(
            level = self.level,
            sequence = %sequence_string(&self.sequence),
            "level started"
        );
        self.start_listening();
    }

    fn start_listening(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.input.clear();
        self.set_mode(Mode::Listening);
        self.presenter.extinguish_all();
        self.presenter
            .render_progress(self.sequence.len(), 0, Verdict::Pending);
        self.schedule(
            self.config.play_interval_ms,
            Timer::PlaybackTick { index: 0 },
        );
    }

    fn playback_tick(&mut self, index: usize) {
        if let Some(&symbol) = self.sequence.get(index) {
            self.flash(symbol);
        }

        let next = if index + 1 < self.sequence.len() {
            Timer::PlaybackTick { index: index + 1 }
        } else {
            Timer::BeginInput
        };
        self.schedule(self.config.play_interval_ms, next);
    }

    fn flash(&mut self, symbol: Symbol) {
        self.presenter.illuminate(symbol);
        self.presenter.play(Cue::Tone(symbol));
        self.schedule(self.config.flash_ms, Timer::FlashOff(symbol));
    }

    fn complete_level(&mut self) {
        self.replay_budget = REPLAYS_PER_LEVEL;
        self.level += 1;
        self.set_mode(Mode::Waiting);
        info!(level = self.level, "level complete");

        let interval = self.config.play_interval_ms;
        self.schedule(interval, Timer::RevealVerdict);
        self.schedule(interval, Timer::Celebrate);
        self.schedule(interval.saturating_mul(2), Timer::LightsOut);
        self.schedule(self.config.round_delay_ms(), Timer::StartLevel);
    }

    fn mismatch(&mut self) -> InputOutcome {
        self.set_mode(Mode::Waiting);
        self.presenter.illuminate_all();
        self.presenter.play(Cue::Wrong);

        let interval = self.config.play_interval_ms;
        if self.replay_budget > 0 {
            self.replay_budget -= 1;
            info!(level = self.level, typed = self.input.len(), "mismatch, replaying level");
            self.schedule(interval, Timer::LightsOut);
            self.schedule(self.config.round_delay_ms(), Timer::ReplayLevel);
            InputOutcome::Replay
        } else {
            info!(level = self.level, typed = self.input.len(), "mismatch, game over");
            self.schedule(interval, Timer::EndGame);
            InputOutcome::GameOver
        }
    }

    fn end_game(&mut self) {
        self.presenter.render_progress(0, 0, Verdict::Pending);
        self.presenter.extinguish_all();
        let summary = end_summary(self.level);
        self.presenter.show_end_overlay(&summary);
        self.overlay_visible = true;
        info!(level = self.level, summary = %summary, "game over");
        self.level = 0;
    }
}

fn sequence_string(sequence: &[Symbol]) -> String {
    sequence.iter().map(|s| s.as_char()).collect()
}
