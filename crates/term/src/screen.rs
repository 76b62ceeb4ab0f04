//! Terminal implementation of the engine's [`Renderer`].

use anyhow::Result;

use crate::core::{ActivePiece, Board, CompletedMask};
use crate::engine::Renderer;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Prompt, Viewport};
use crate::renderer::TerminalRenderer;

/// Fallback when the terminal size cannot be queried.
const FALLBACK_SIZE: (u16, u16) = (80, 30);

/// The terminal standing in for the device's display panel.
pub struct TermScreen {
    term: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl TermScreen {
    pub fn new(view: GameView) -> Self {
        Self {
            term: TerminalRenderer::new(),
            view,
            fb: FrameBuffer::new(0, 0),
        }
    }

    /// Switch the terminal into raw alternate-screen mode.
    pub fn enter(&mut self) -> Result<()> {
        self.term.enter()?;
        self.term.invalidate();
        Ok(())
    }

    /// Restore the terminal.
    pub fn exit(&mut self) -> Result<()> {
        self.term.exit()
    }

    fn viewport() -> Viewport {
        let (w, h) = crossterm::terminal::size().unwrap_or(FALLBACK_SIZE);
        Viewport::new(w, h)
    }

    fn draw_prompt(&mut self, prompt: Prompt) -> Result<()> {
        self.view.render_prompt_into(prompt, Self::viewport(), &mut self.fb);
        self.term.draw_swap(&mut self.fb)
    }
}

impl Default for TermScreen {
    fn default() -> Self {
        Self::new(GameView::default())
    }
}

impl Renderer for TermScreen {
    fn draw_frame(
        &mut self,
        board: &Board,
        completed: &CompletedMask,
        active: Option<&ActivePiece>,
    ) -> Result<()> {
        self.view
            .render_frame_into(board, completed, active, Self::viewport(), &mut self.fb);
        self.term.draw_swap(&mut self.fb)
    }

    fn draw_insert_coins_prompt(&mut self) -> Result<()> {
        self.draw_prompt(Prompt::InsertCoins)
    }

    fn draw_game_over_prompt(&mut self) -> Result<()> {
        self.draw_prompt(Prompt::GameOver)
    }
}
