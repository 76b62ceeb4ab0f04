//! Collaborator interfaces injected into the match controller.
//!
//! The controller never touches a display, a button or the system clock
//! directly; it talks to these traits. The host binary supplies terminal and
//! keyboard implementations, tests supply scripted ones.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::core::{ActivePiece, Board, CompletedMask, SimpleRng};
use crate::types::{Button, PieceKind};

/// Source of debounced button presses.
pub trait InputSource {
    /// Block until a press arrives or `timeout` elapses.
    ///
    /// `None` as timeout waits indefinitely. Returns `None` on timeout. When
    /// several presses are pending they are consumed together and the
    /// highest-priority one (Left, then Right, then Rotate) is returned.
    fn await_event(&mut self, timeout: Option<Duration>) -> Option<Button>;

    /// Accept presses again. Anything queued before this call is discarded.
    fn enable(&mut self);

    /// Drop presses until the next [`InputSource::enable`].
    fn disable(&mut self);

    /// The producer side has shut down; no press will ever arrive again.
    fn is_closed(&self) -> bool {
        false
    }
}

/// Draws match state and the two idle prompts.
pub trait Renderer {
    fn draw_frame(
        &mut self,
        board: &Board,
        completed: &CompletedMask,
        active: Option<&ActivePiece>,
    ) -> Result<()>;

    fn draw_insert_coins_prompt(&mut self) -> Result<()>;

    fn draw_game_over_prompt(&mut self) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn draw_frame(
        &mut self,
        board: &Board,
        completed: &CompletedMask,
        active: Option<&ActivePiece>,
    ) -> Result<()> {
        (**self).draw_frame(board, completed, active)
    }

    fn draw_insert_coins_prompt(&mut self) -> Result<()> {
        (**self).draw_insert_coins_prompt()
    }

    fn draw_game_over_prompt(&mut self) -> Result<()> {
        (**self).draw_game_over_prompt()
    }
}

/// Monotonic time and blocking sleep.
pub trait Clock {
    fn now_ms(&self) -> u64;

    fn sleep(&self, duration: Duration);
}

/// Picks the kind of each spawned piece.
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl PieceSource for SimpleRng {
    fn next_kind(&mut self) -> PieceKind {
        SimpleRng::next_kind(self)
    }
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
