//! Terminal Simon runner (default binary).
//!
//! Drives `SimonGame` from the wall clock, maps keys and mouse clicks to game
//! input, and draws through the framebuffer renderer.

mod config;

use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use tui_simon::core::SimonGame;
use tui_simon::input::{handle_key_event, should_quit};
use tui_simon::term::{FrameBuffer, GameView, RenderThrottle, TermPresenter, TerminalRenderer, Viewport};
use tui_simon::types::{GameInput, TICK_MS};

use crate::config::AppConfig;

/// Static screens are still repainted this often.
const STATIC_REPAINT_MS: u64 = 250;

type Game = SimonGame<TermPresenter>;

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    let _guard = setup_logging(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file when a path is configured; stdout belongs to the UI.
fn setup_logging(path: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let Some(path) = path else {
        return Ok(None);
    };

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("creating log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .with_context(|| format!("log path {} has no file name", path.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let alphabet = config.game.alphabet;
    let presenter = TermPresenter::new(alphabet).with_bell(config.bell);
    let mut game = SimonGame::seeded(config.game.clone(), presenter)?;
    game.start();
    info!(alphabet = alphabet.size(), bell = config.bell, "game started");

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(STATIC_REPAINT_MS);

    let epoch = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let now_ms = epoch.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, frame_fingerprint(&game)) {
            view.render_into(game.presenter(), &game.snapshot(), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }
        let bells = game.presenter_mut().take_bells();
        term.ring_bell(bells)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(level = game.level(), "quit");
                        return Ok(());
                    }
                    if let Some(input) = handle_key_event(key, alphabet) {
                        apply_input(&mut game, input);
                    }
                }
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    if game.overlay_visible() {
                        apply_input(&mut game, GameInput::Restart);
                    } else if let Some(symbol) = view.hit_test(alphabet, viewport, column, row) {
                        apply_input(&mut game, GameInput::Press(symbol));
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        // Tick. The game clock follows the wall clock so sub-millisecond
        // remainders never accumulate as drift.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let now_ms = epoch.elapsed().as_millis() as u64;
            let elapsed = now_ms.saturating_sub(game.clock_ms());
            game.tick(u32::try_from(elapsed).unwrap_or(u32::MAX));
        }
    }
}

fn apply_input(game: &mut Game, input: GameInput) {
    match input {
        GameInput::Press(symbol) => {
            let outcome = game.press(symbol);
            debug!(symbol = symbol.number(), ?outcome, "press");
        }
        GameInput::Restart => {
            if game.restart() {
                info!("restart");
            }
        }
    }
}

/// Everything the frame depends on: presenter state plus the side panel.
fn frame_fingerprint(game: &Game) -> u64 {
    let mut h = DefaultHasher::new();
    game.presenter().fingerprint().hash(&mut h);
    game.snapshot().hash(&mut h);
    h.finish()
}
