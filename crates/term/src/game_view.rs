//! GameView: maps board, completed rows and active piece into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Board row 0 is the bottom of the well, so board rows are flipped when they
//! are mapped to terminal rows.

use crate::core::{ActivePiece, Board, CompletedMask, DropGuide};
use crate::fb::{FrameBuffer, Ink};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

const SOLID: char = '█';
const DOTTED: char = '·';
const GUIDE: char = '│';

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

/// Full-screen messages shown between matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    InsertCoins,
    GameOver,
}

impl Prompt {
    pub fn lines(&self) -> &'static [&'static str] {
        match self {
            Prompt::InsertCoins => &["INSERT", "COINS"],
            Prompt::GameOver => &["GAME", "OVER"],
        }
    }
}

/// Terminal layout of the well.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

/// Top-left corner of the well's border.
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer size of the bordered well in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render a match frame into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_frame_into(
        &self,
        board: &Board,
        completed: &CompletedMask,
        active: Option<&ActivePiece>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let origin = self.prepare(viewport, fb);

        for y in 0..BOARD_HEIGHT as i8 {
            if completed.contains(y as usize) {
                for x in 0..BOARD_WIDTH as i8 {
                    self.fill_cell(fb, origin, x, y, DOTTED, Ink::On);
                }
                continue;
            }
            for x in 0..BOARD_WIDTH as i8 {
                if board.get(x, y).unwrap_or(false) {
                    self.fill_cell(fb, origin, x, y, SOLID, Ink::On);
                }
            }
        }

        let Some(active) = active else {
            return;
        };

        let guides = active.drop_guides(board);
        if let Some(guide) = guides.left {
            self.draw_guide(fb, origin, board, guide, 0);
        }
        if let Some(guide) = guides.right {
            self.draw_guide(fb, origin, board, guide, self.cell_w - 1);
        }

        for (x, y) in active.cells() {
            self.fill_cell(fb, origin, x, y, SOLID, Ink::On);
        }
    }

    /// Render one of the idle prompts inside the empty well.
    pub fn render_prompt_into(&self, prompt: Prompt, viewport: Viewport, fb: &mut FrameBuffer) {
        let origin = self.prepare(viewport, fb);
        let (frame_w, frame_h) = self.frame_size();

        let lines = prompt.lines();
        let first = origin.y + frame_h.saturating_sub(lines.len() as u16 * 2) / 2;
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = origin.x + frame_w.saturating_sub(text_w) / 2;
            fb.put_str(x, first + i as u16 * 2, text, Ink::On);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render_frame(
        &self,
        board: &Board,
        completed: &CompletedMask,
        active: Option<&ActivePiece>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_frame_into(board, completed, active, viewport, &mut fb);
        fb
    }

    pub fn render_prompt(&self, prompt: Prompt, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_prompt_into(prompt, viewport, &mut fb);
        fb
    }

    /// Terminal position of the top-left glyph of board cell `(x, y)`.
    pub fn cell_origin(&self, viewport: Viewport, x: u16, y: u16) -> (u16, u16) {
        let origin = self.origin(viewport);
        (
            origin.x + 1 + x * self.cell_w,
            origin.y + 1 + (BOARD_HEIGHT as u16 - 1 - y) * self.cell_h,
        )
    }

    fn origin(&self, viewport: Viewport) -> Origin {
        let (frame_w, frame_h) = self.frame_size();
        Origin {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
        }
    }

    fn prepare(&self, viewport: Viewport, fb: &mut FrameBuffer) -> Origin {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let origin = self.origin(viewport);
        let (frame_w, frame_h) = self.frame_size();
        draw_border(fb, origin.x, origin.y, frame_w, frame_h);
        origin
    }

    fn draw_guide(&self, fb: &mut FrameBuffer, origin: Origin, board: &Board, guide: DropGuide, dx: u16) {
        for y in guide.bottom..=guide.top {
            if board.is_occupied(guide.column, y) {
                continue;
            }
            let Some((px, py)) = self.cell_px(origin, guide.column, y) else {
                continue;
            };
            for dy in 0..self.cell_h {
                fb.put_char(px + dx, py + dy, GUIDE, Ink::Dim);
            }
        }
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, origin: Origin, x: i8, y: i8, ch: char, ink: Ink) {
        if let Some((px, py)) = self.cell_px(origin, x, y) {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, ink);
        }
    }

    fn cell_px(&self, origin: Origin, x: i8, y: i8) -> Option<(u16, u16)> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        let flipped = BOARD_HEIGHT as u16 - 1 - y as u16;
        Some((
            origin.x + 1 + x as u16 * self.cell_w,
            origin.y + 1 + flipped * self.cell_h,
        ))
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', Ink::On);
    fb.put_char(x + w - 1, y, '┐', Ink::On);
    fb.put_char(x, y + h - 1, '└', Ink::On);
    fb.put_char(x + w - 1, y + h - 1, '┘', Ink::On);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', Ink::On);
        fb.put_char(x + dx, y + h - 1, '─', Ink::On);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', Ink::On);
        fb.put_char(x + w - 1, y + dy, '│', Ink::On);
    }
}
