//! GameView: maps presenter state and a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout (4 blocks):
//!
//! ```text
//!        status text
//!
//!   ┌──────────┐  ┌──────────┐   LEVEL
//!   │    1     │  │    2     │   0
//!   └──────────┘  └──────────┘
//!   ┌──────────┐  ┌──────────┐   MODE
//!   │    3     │  │    4     │   listening
//!   └──────────┘  └──────────┘
//!
//!          ● ● ○ ○
//! ```

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::presenter::TermPresenter;
use crate::types::{Alphabet, Cue, Symbol, Verdict};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen rectangle of one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl BlockRect {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

#[derive(Debug, Clone, Copy)]
struct Layout {
    cols: u16,
    grid_x: u16,
    grid_y: u16,
    grid_w: u16,
    grid_h: u16,
    status_y: u16,
    progress_y: u16,
}

/// A lightweight terminal renderer for the memory game.
pub struct GameView {
    /// Block width in terminal columns.
    block_w: u16,
    /// Block height in terminal rows.
    block_h: u16,
    gap_x: u16,
    gap_y: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Wider than tall to compensate for terminal glyph aspect ratio.
        Self {
            block_w: 12,
            block_h: 5,
            gap_x: 2,
            gap_y: 1,
        }
    }
}

impl GameView {
    pub fn new(block_w: u16, block_h: u16) -> Self {
        Self {
            block_w: block_w.max(3),
            block_h: block_h.max(3),
            ..Self::default()
        }
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        board: &TermPresenter,
        snap: &GameSnapshot,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let alphabet = board.alphabet();
        let layout = self.layout(alphabet, viewport);

        // Status line.
        let status = board.status();
        let status_w = status.chars().count() as u16;
        let status_x = layout.grid_x + layout.grid_w.saturating_sub(status_w) / 2;
        fb.put_str(status_x, layout.status_y, status, label_style());

        for symbol in alphabet.symbols() {
            let rect = self.block_rect(&layout, symbol);
            self.draw_block(fb, rect, symbol, board.is_lit(symbol), board.input_enabled());
        }

        self.draw_progress(fb, board, &layout, viewport);
        self.draw_side_panel(fb, board, snap, &layout, viewport);

        if let Some(summary) = board.overlay() {
            self.draw_overlay(fb, &layout, summary);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        board: &TermPresenter,
        snap: &GameSnapshot,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, snap, viewport, &mut fb);
        fb
    }

    /// Which block (if any) is drawn at terminal cell `(x, y)`.
    pub fn hit_test(&self, alphabet: Alphabet, viewport: Viewport, x: u16, y: u16) -> Option<Symbol> {
        let layout = self.layout(alphabet, viewport);
        alphabet
            .symbols()
            .find(|s| self.block_rect(&layout, *s).contains(x, y))
    }

    /// Screen rectangle of `symbol` for the given viewport.
    pub fn block_at(&self, alphabet: Alphabet, viewport: Viewport, symbol: Symbol) -> BlockRect {
        let layout = self.layout(alphabet, viewport);
        self.block_rect(&layout, symbol)
    }

    fn layout(&self, alphabet: Alphabet, viewport: Viewport) -> Layout {
        let n = alphabet.size() as u16;
        let mut cols = 1u16;
        while cols * cols < n {
            cols += 1;
        }
        let rows = n.div_ceil(cols);

        let grid_w = cols * self.block_w + (cols - 1) * self.gap_x;
        let grid_h = rows * self.block_h + (rows - 1) * self.gap_y;
        // status, blank, grid, blank, progress
        let content_h = grid_h + 4;

        let grid_x = viewport.width.saturating_sub(grid_w) / 2;
        let status_y = viewport.height.saturating_sub(content_h) / 2;
        let grid_y = status_y + 2;

        Layout {
            cols,
            grid_x,
            grid_y,
            grid_w,
            grid_h,
            status_y,
            progress_y: grid_y + grid_h + 1,
        }
    }

    fn block_rect(&self, layout: &Layout, symbol: Symbol) -> BlockRect {
        let i = symbol.index() as u16;
        let col = i % layout.cols;
        let row = i / layout.cols;
        BlockRect {
            x: layout.grid_x + col * (self.block_w + self.gap_x),
            y: layout.grid_y + row * (self.block_h + self.gap_y),
            w: self.block_w,
            h: self.block_h,
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, rect: BlockRect, symbol: Symbol, lit: bool, enabled: bool) {
        let base = block_color(symbol);
        let fill = if lit {
            base
        } else if enabled {
            base.scaled(2, 5)
        } else {
            base.scaled(1, 5)
        };
        let style = CellStyle {
            fg: Rgb::new(240, 240, 240),
            bg: fill,
            bold: lit,
            dim: false,
        };

        fb.fill_rect(rect.x, rect.y, rect.w, rect.h, ' ', style);
        draw_frame(fb, rect.x, rect.y, rect.w, rect.h, style);
        fb.put_char(rect.x + rect.w / 2, rect.y + rect.h / 2, symbol.as_char(), style);
    }

    fn draw_progress(&self, fb: &mut FrameBuffer, board: &TermPresenter, layout: &Layout, viewport: Viewport) {
        let progress = board.progress();
        if progress.total == 0 {
            return;
        }

        let color = match progress.verdict {
            Verdict::Pending => Rgb::new(220, 220, 220),
            Verdict::Correct => Rgb::new(80, 140, 240),
            Verdict::Wrong => Rgb::new(230, 70, 70),
        };
        let style = CellStyle {
            fg: color,
            ..CellStyle::default()
        };

        let width = (progress.total as u16).saturating_mul(2).saturating_sub(1);
        let x0 = viewport.width.saturating_sub(width) / 2;
        for i in 0..progress.total {
            let ch = if i < progress.filled { '●' } else { '○' };
            fb.put_char(x0.saturating_add(i as u16 * 2), layout.progress_y, ch, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        board: &TermPresenter,
        snap: &GameSnapshot,
        layout: &Layout,
        viewport: Viewport,
    ) {
        let panel_x = layout.grid_x.saturating_add(layout.grid_w).saturating_add(3);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = label_style();
        let value = CellStyle::default();

        let mut y = layout.grid_y;
        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.level, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MODE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, snap.mode.as_str(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "REPLAYS", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, u32::from(snap.replay_budget), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SOUND", label);
        y = y.saturating_add(1);
        match board.last_cue() {
            Some(Cue::Tone(s)) => {
                fb.put_str(panel_x, y, "tone", value);
                fb.put_char(panel_x + 5, y, s.as_char(), value);
            }
            Some(cue) => fb.put_str(panel_x, y, cue.as_str(), value),
            None => fb.put_str(panel_x, y, "-", value),
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: &Layout, summary: &str) {
        const HINT: &str = "Press R to play again";

        let text_w = summary.chars().count().max(HINT.len()) as u16;
        let w = text_w + 4;
        let h = 5;
        let x = (layout.grid_x + layout.grid_w / 2).saturating_sub(w / 2);
        let y = (layout.grid_y + layout.grid_h / 2).saturating_sub(h / 2);

        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(20, 20, 30),
            bold: true,
            dim: false,
        };
        fb.fill_rect(x, y, w, h, ' ', style);
        draw_frame(fb, x, y, w, h, style);

        let summary_x = x + (w - summary.chars().count() as u16) / 2;
        fb.put_str(summary_x, y + 1, summary, style);
        let hint_x = x + (w - HINT.len() as u16) / 2;
        fb.put_str(hint_x, y + 3, HINT, CellStyle { bold: false, ..style });
    }
}

fn draw_frame(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn label_style() -> CellStyle {
    CellStyle {
        bold: true,
        ..CellStyle::default()
    }
}

fn block_color(symbol: Symbol) -> Rgb {
    match symbol.number() {
        1 => Rgb::new(80, 200, 100),
        2 => Rgb::new(220, 70, 70),
        3 => Rgb::new(240, 210, 70),
        4 => Rgb::new(80, 120, 230),
        5 => Rgb::new(200, 120, 220),
        6 => Rgb::new(80, 210, 210),
        7 => Rgb::new(255, 165, 0),
        8 => Rgb::new(170, 170, 170),
        _ => Rgb::new(240, 130, 170),
    }
}
