//! Match controller - drives a [`Match`] with real input, time and drawing.
//!
//! One controller owns its collaborators for the lifetime of the device. The
//! host calls [`Controller::run`], which cycles insert-coin, match and
//! game-over screens until the input source closes.
//!
//! Per tick the controller waits for a press bounded by the remaining fall
//! budget. A press shifts or rotates the piece and the time actually waited is
//! charged against the budget; a timeout moves the piece down and refills the
//! budget. A blocked downward step lands the piece.

use std::time::Duration;

use anyhow::Result;
use log::{debug, info, trace};

use crate::config::MatchConfig;
use crate::core::{Command, Match, TickOutcome};
use crate::ports::{Clock, InputSource, PieceSource, Renderer};

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEnd {
    /// A new piece could not spawn.
    GameOver,
    /// The input source shut down mid-match.
    InputClosed,
}

/// Statistics of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSummary {
    pub end: MatchEnd,
    pub pieces_placed: u32,
    pub rows_cleared: u32,
}

impl MatchSummary {
    fn of(game: &Match, end: MatchEnd) -> Self {
        Self {
            end,
            pieces_placed: game.pieces_placed(),
            rows_cleared: game.rows_cleared(),
        }
    }
}

/// Match controller with injected collaborators.
pub struct Controller<I, R, C, P> {
    input: I,
    renderer: R,
    clock: C,
    pieces: P,
    config: MatchConfig,
}

impl<I, R, C, P> Controller<I, R, C, P>
where
    I: InputSource,
    R: Renderer,
    C: Clock,
    P: PieceSource,
{
    pub fn new(input: I, renderer: R, clock: C, pieces: P, config: MatchConfig) -> Self {
        Self {
            input,
            renderer,
            clock,
            pieces,
            config,
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Hand the collaborators back.
    pub fn into_parts(self) -> (I, R, C, P) {
        (self.input, self.renderer, self.clock, self.pieces)
    }

    /// Cycle insert-coin → match → game-over until the input closes.
    ///
    /// Returns the number of matches that were started.
    pub fn run(&mut self) -> Result<u32> {
        let mut matches = 0u32;
        loop {
            if !self.wait_for_start()? {
                return Ok(matches);
            }

            matches += 1;
            let summary = self.play_match()?;
            info!(
                "match {} ended ({:?}): {} pieces, {} rows",
                matches, summary.end, summary.pieces_placed, summary.rows_cleared
            );

            if summary.end == MatchEnd::InputClosed || !self.show_game_over()? {
                return Ok(matches);
            }
        }
    }

    /// Show the insert-coin prompt and block until any press.
    ///
    /// Returns false if the input closed instead.
    pub fn wait_for_start(&mut self) -> Result<bool> {
        self.input.enable();
        self.renderer.draw_insert_coins_prompt()?;
        Ok(self.await_any_press())
    }

    /// Show the game-over prompt, block until any press, then mask input.
    ///
    /// Returns false if the input closed instead.
    pub fn show_game_over(&mut self) -> Result<bool> {
        self.input.enable();
        self.renderer.draw_game_over_prompt()?;
        let pressed = self.await_any_press();
        self.input.disable();
        Ok(pressed)
    }

    fn await_any_press(&mut self) -> bool {
        loop {
            if let Some(button) = self.input.await_event(None) {
                trace!("prompt dismissed with {:?}", button);
                return true;
            }
            if self.input.is_closed() {
                return false;
            }
        }
    }

    /// Play one match on a fresh board until a spawn fails.
    pub fn play_match(&mut self) -> Result<MatchSummary> {
        self.play(Match::new(self.config.fall_interval_ms))
    }

    /// Play a match starting from `game` (a fresh or prepared board).
    pub fn play(&mut self, mut game: Match) -> Result<MatchSummary> {
        self.input.enable();
        game.start();
        info!("match started");

        loop {
            let kind = self.pieces.next_kind();
            if !game.spawn(kind) {
                info!("spawn of {:?} blocked, game over", kind);
                return Ok(MatchSummary::of(&game, MatchEnd::GameOver));
            }
            debug!("spawned {:?}", kind);
            self.draw(&game)?;

            if !self.fall(&mut game)? {
                return Ok(MatchSummary::of(&game, MatchEnd::InputClosed));
            }

            self.clear_rows(&mut game)?;
        }
    }

    /// Run ticks until the active piece lands.
    ///
    /// Returns false if the input closed first.
    fn fall(&mut self, game: &mut Match) -> Result<bool> {
        loop {
            let budget = game.fall_budget_ms();
            let started = self.clock.now_ms();
            let button = self
                .input
                .await_event(Some(Duration::from_millis(budget as u64)));

            if button.is_none() && self.input.is_closed() {
                return Ok(false);
            }

            let command = Command::from(button);
            let outcome = game.apply(command);
            trace!("{:?} -> {:?}", command, outcome);

            if outcome.needs_redraw() {
                self.draw(game)?;
            }

            if command != Command::Fall {
                let waited = self.clock.now_ms().saturating_sub(started);
                game.charge_wait(u32::try_from(waited).unwrap_or(u32::MAX));
                trace!("fall budget {}ms", game.fall_budget_ms());
            }

            if outcome == TickOutcome::Landed {
                debug!("piece landed ({} placed)", game.pieces_placed());
                return Ok(true);
            }
        }
    }

    /// Landing epilogue: show completed rows, pause, compact.
    fn clear_rows(&mut self, game: &mut Match) -> Result<()> {
        let rows = game.mark_completed_rows();
        if rows.is_empty() {
            return Ok(());
        }

        debug!("rows completed: {:?}", rows.as_slice());
        self.input.disable();
        self.draw(game)?;
        self.clock.sleep(self.config.clear_pause());
        game.compact();
        self.draw(game)?;
        self.input.enable();
        Ok(())
    }

    fn draw(&mut self, game: &Match) -> Result<()> {
        self.renderer
            .draw_frame(game.board(), game.board().completed(), game.active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ActivePiece, Board, CompletedMask};
    use crate::types::{Button, PieceKind};

    struct NoInput;

    impl InputSource for NoInput {
        fn await_event(&mut self, _timeout: Option<Duration>) -> Option<Button> {
            None
        }
        fn enable(&mut self) {}
        fn disable(&mut self) {}
    }

    #[derive(Default)]
    struct CountFrames(usize);

    impl Renderer for CountFrames {
        fn draw_frame(
            &mut self,
            _board: &Board,
            _completed: &CompletedMask,
            _active: Option<&ActivePiece>,
        ) -> Result<()> {
            self.0 += 1;
            Ok(())
        }
        fn draw_insert_coins_prompt(&mut self) -> Result<()> {
            Ok(())
        }
        fn draw_game_over_prompt(&mut self) -> Result<()> {
            Ok(())
        }
    }

    struct FrozenClock;

    impl Clock for FrozenClock {
        fn now_ms(&self) -> u64 {
            0
        }
        fn sleep(&self, _duration: Duration) {}
    }

    struct Always(PieceKind);

    impl PieceSource for Always {
        fn next_kind(&mut self) -> PieceKind {
            self.0
        }
    }

    #[test]
    fn only_timeouts_stack_pieces_until_game_over() {
        let mut ctl = Controller::new(
            NoInput,
            CountFrames::default(),
            FrozenClock,
            Always(PieceKind::I),
            MatchConfig::default(),
        );
        let summary = ctl.play_match().unwrap();
        assert_eq!(summary.end, MatchEnd::GameOver);
        // Flat I pieces stack one row each until row 23 is filled.
        assert_eq!(summary.pieces_placed, 24);
        assert_eq!(summary.rows_cleared, 0);
        assert!(ctl.renderer().0 > 24);
    }

    #[test]
    fn blocked_spawn_ends_match_without_ticks() {
        let mut board = Board::new();
        board.set(4, 23, true);
        let mut ctl = Controller::new(
            NoInput,
            CountFrames::default(),
            FrozenClock,
            Always(PieceKind::T),
            MatchConfig::default(),
        );
        let summary = ctl.play(Match::with_board(board, 400)).unwrap();
        assert_eq!(summary.end, MatchEnd::GameOver);
        assert_eq!(summary.pieces_placed, 0);
        assert_eq!(ctl.renderer().0, 0);
    }
}
