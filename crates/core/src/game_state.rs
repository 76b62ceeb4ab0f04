//! Game state module - one match worth of board, falling piece and fall timer
//!
//! [`Match`] is the deterministic half of the match controller: it knows how to
//! spawn, shift, rotate, drop and land a piece, and how to clear rows, but it
//! never waits, draws or reads buttons. The engine crate drives it with real
//! input and time.
//!
//! Phase flow:
//!
//! ```text
//! AwaitingStart -> Spawning -> PieceFalling (loops on accepted/rejected input)
//!                     ^              |
//!                     |           Landed -> ClearingRows (only if rows completed)
//!                     +--------------+----------+
//! Spawning -> GameOver when the spawn position is already blocked.
//! ```

use crate::board::{Board, CompletedRows};
use crate::pieces::{shape_of, Shape};
use crate::types::{Button, PieceKind, Rotation, SPAWN_X, SPAWN_Y};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a new piece at the spawn anchor in its base rotation
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn shape(&self) -> &'static Shape {
        shape_of(self.kind, self.rotation)
    }

    pub fn anchor(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    /// Absolute board cells covered by the piece.
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape().blocks.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Vertical guides from the piece's left and right boundary blocks down to
    /// the first obstruction.
    pub fn drop_guides(&self, board: &Board) -> DropGuides {
        let shape = self.shape();
        let (lx, ly) = shape.left_boundary;
        let (rx, ry) = shape.right_boundary;
        DropGuides {
            left: DropGuide::trace(board, self.x + lx, self.y + ly),
            right: DropGuide::trace(board, self.x + rx, self.y + ry),
        }
    }
}

/// A vertical guide line in one board column, spanning rows `bottom..=top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropGuide {
    pub column: i8,
    pub top: i8,
    pub bottom: i8,
}

impl DropGuide {
    /// Trace from the cell below `(column, from_y)` downwards.
    ///
    /// Stops on the first occupied cell (included) or on row 0. Returns `None`
    /// when the boundary block already sits on row 0.
    fn trace(board: &Board, column: i8, from_y: i8) -> Option<Self> {
        let top = from_y - 1;
        if top < 0 {
            return None;
        }
        let mut bottom = top;
        while bottom > 0 && !board.is_occupied(column, bottom) {
            bottom -= 1;
        }
        Some(Self { column, top, bottom })
    }

    pub fn contains(&self, x: i8, y: i8) -> bool {
        x == self.column && y >= self.bottom && y <= self.top
    }
}

/// Left and right drop guides of the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropGuides {
    pub left: Option<DropGuide>,
    pub right: Option<DropGuide>,
}

impl DropGuides {
    pub fn contains(&self, x: i8, y: i8) -> bool {
        self.left.is_some_and(|g| g.contains(x, y))
            || self.right.is_some_and(|g| g.contains(x, y))
    }
}

/// Match lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingStart,
    Spawning,
    PieceFalling,
    Landed,
    ClearingRows,
    GameOver,
}

/// One tick's worth of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Rotate,
    /// No input arrived before the fall budget ran out.
    Fall,
}

impl From<Button> for Command {
    fn from(button: Button) -> Self {
        match button {
            Button::Left => Command::MoveLeft,
            Button::Right => Command::MoveRight,
            Button::Rotate => Command::Rotate,
        }
    }
}

impl From<Option<Button>> for Command {
    fn from(button: Option<Button>) -> Self {
        button.map(Command::from).unwrap_or(Command::Fall)
    }
}

/// Result of applying a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Horizontal shift accepted.
    Shifted,
    /// Rotation accepted.
    Rotated,
    /// Shift or rotation rejected; nothing changed.
    Blocked,
    /// Piece moved down one row.
    Fell,
    /// Piece could not move down and was merged into the board.
    Landed,
}

impl TickOutcome {
    /// Whether the visible state changed.
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, TickOutcome::Blocked)
    }
}

/// Complete state of one playthrough.
#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    active: Option<ActivePiece>,
    phase: Phase,
    fall_interval_ms: u32,
    /// Remaining time before the next forced downward step.
    fall_budget_ms: u32,
    pieces_placed: u32,
    rows_cleared: u32,
}

impl Match {
    /// Fresh match on an empty board.
    pub fn new(fall_interval_ms: u32) -> Self {
        Self::with_board(Board::new(), fall_interval_ms)
    }

    /// Match starting from a prepared board.
    pub fn with_board(board: Board, fall_interval_ms: u32) -> Self {
        Self {
            board,
            active: None,
            phase: Phase::AwaitingStart,
            fall_interval_ms,
            fall_budget_ms: fall_interval_ms,
            pieces_placed: 0,
            rows_cleared: 0,
        }
    }

    /// Leave `AwaitingStart`; the first piece may now spawn.
    pub fn start(&mut self) {
        if self.phase == Phase::AwaitingStart {
            self.phase = Phase::Spawning;
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn fall_budget_ms(&self) -> u32 {
        self.fall_budget_ms
    }

    pub fn pieces_placed(&self) -> u32 {
        self.pieces_placed
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    /// Spawn a piece of `kind` at the spawn anchor.
    ///
    /// Returns false and ends the match when the spawn position overlaps the
    /// stack. Calling it outside `Spawning` (after [`Match::start`]) is a no-op
    /// that returns false.
    pub fn spawn(&mut self, kind: PieceKind) -> bool {
        if self.phase == Phase::AwaitingStart {
            self.start();
        }
        if self.phase != Phase::Spawning {
            return false;
        }

        let piece = ActivePiece::new(kind);
        if self.board.overlaps(piece.shape(), piece.anchor(), 0, 0) {
            self.active = None;
            self.phase = Phase::GameOver;
            return false;
        }

        self.active = Some(piece);
        self.phase = Phase::PieceFalling;
        self.fall_budget_ms = self.fall_interval_ms;
        true
    }

    /// Try to shift the active piece by `(dx, dy)`.
    pub fn move_piece(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        if self.board.overlaps(active.shape(), active.anchor(), dx, dy) {
            return false;
        }

        active.x += dx;
        active.y += dy;
        true
    }

    /// Try to advance the active piece to its next rotation at the same anchor.
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let rotation = active.rotation.next();
        let shape = shape_of(active.kind, rotation);
        if self.board.overlaps(shape, active.anchor(), 0, 0) {
            return false;
        }

        active.rotation = rotation;
        true
    }

    /// Merge the active piece into the board.
    pub fn land(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.place(active.shape(), active.anchor());
        self.pieces_placed = self.pieces_placed.wrapping_add(1);
        self.phase = Phase::Landed;
    }

    /// Apply one tick of input while a piece is falling.
    pub fn apply(&mut self, command: Command) -> TickOutcome {
        if self.phase != Phase::PieceFalling {
            return TickOutcome::Blocked;
        }

        match command {
            Command::MoveLeft => shifted(self.move_piece(-1, 0)),
            Command::MoveRight => shifted(self.move_piece(1, 0)),
            Command::Rotate => {
                if self.rotate() {
                    TickOutcome::Rotated
                } else {
                    TickOutcome::Blocked
                }
            }
            Command::Fall => {
                self.fall_budget_ms = self.fall_interval_ms;
                if self.move_piece(0, -1) {
                    TickOutcome::Fell
                } else {
                    self.land();
                    TickOutcome::Landed
                }
            }
        }
    }

    /// Deduct time spent waiting on a non-fall tick from the fall budget.
    pub fn charge_wait(&mut self, elapsed_ms: u32) {
        self.fall_budget_ms = self.fall_budget_ms.saturating_sub(elapsed_ms);
    }

    /// After a landing, mark full rows.
    ///
    /// Moves to `ClearingRows` when any row completed, otherwise straight back
    /// to `Spawning`.
    pub fn mark_completed_rows(&mut self) -> CompletedRows {
        let rows = self.board.mark_completed_rows();
        if self.phase == Phase::Landed {
            self.phase = if rows.is_empty() {
                Phase::Spawning
            } else {
                Phase::ClearingRows
            };
        }
        rows
    }

    /// Remove the marked rows and get ready for the next spawn.
    pub fn compact(&mut self) {
        self.rows_cleared += self.board.completed().count() as u32;
        self.board.compact();
        if self.phase == Phase::ClearingRows {
            self.phase = Phase::Spawning;
        }
    }

    /// Guides for the active piece, if any.
    pub fn drop_guides(&self) -> Option<DropGuides> {
        self.active.map(|a| a.drop_guides(&self.board))
    }
}

fn shifted(moved: bool) -> TickOutcome {
    if moved {
        TickOutcome::Shifted
    } else {
        TickOutcome::Blocked
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new(crate::types::FALL_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match() {
        let m = Match::new(400);
        assert_eq!(m.phase(), Phase::AwaitingStart);
        assert!(m.active().is_none());
        assert_eq!(m.fall_budget_ms(), 400);
        assert_eq!(m.board().occupied_count(), 0);
    }

    #[test]
    fn test_spawn_at_top_center() {
        let mut m = Match::new(400);
        assert!(m.spawn(PieceKind::T));
        let a = m.active().unwrap();
        assert_eq!((a.x, a.y), (4, 24));
        assert_eq!(a.rotation, Rotation::North);
        assert_eq!(m.phase(), Phase::PieceFalling);
    }

    #[test]
    fn test_spawn_twice_is_rejected() {
        let mut m = Match::new(400);
        assert!(m.spawn(PieceKind::T));
        assert!(!m.spawn(PieceKind::I));
        assert_eq!(m.active().unwrap().kind, PieceKind::T);
        assert!(!m.is_game_over());
    }

    #[test]
    fn test_blocked_spawn_ends_match() {
        let mut board = Board::new();
        board.set(4, 24, true);
        let mut m = Match::with_board(board, 400);
        assert!(!m.spawn(PieceKind::O));
        assert!(m.is_game_over());
        assert!(m.active().is_none());
    }

    #[test]
    fn test_fall_resets_budget_and_shift_does_not() {
        let mut m = Match::new(400);
        m.spawn(PieceKind::T);
        m.charge_wait(150);
        assert_eq!(m.apply(Command::MoveLeft), TickOutcome::Shifted);
        assert_eq!(m.fall_budget_ms(), 250);
        assert_eq!(m.apply(Command::Fall), TickOutcome::Fell);
        assert_eq!(m.fall_budget_ms(), 400);
    }

    #[test]
    fn test_charge_wait_clamps_at_zero() {
        let mut m = Match::new(400);
        m.spawn(PieceKind::T);
        m.charge_wait(1_000);
        assert_eq!(m.fall_budget_ms(), 0);
    }

    #[test]
    fn test_landing_moves_to_landed_then_spawning() {
        let mut m = Match::new(400);
        m.spawn(PieceKind::I);
        while m.apply(Command::Fall) == TickOutcome::Fell {}
        assert_eq!(m.phase(), Phase::Landed);
        assert!(m.active().is_none());
        assert_eq!(m.pieces_placed(), 1);
        assert!(m.mark_completed_rows().is_empty());
        assert_eq!(m.phase(), Phase::Spawning);
    }

    #[test]
    fn test_apply_outside_falling_is_blocked() {
        let mut m = Match::new(400);
        assert_eq!(m.apply(Command::Fall), TickOutcome::Blocked);
        assert_eq!(m.phase(), Phase::AwaitingStart);
    }

    #[test]
    fn test_drop_guides_reach_floor_on_empty_board() {
        let mut m = Match::new(400);
        m.spawn(PieceKind::O);
        let g = m.drop_guides().unwrap();
        // O at (4, 24): boundary blocks at (4, 23) and (5, 23).
        assert_eq!(g.left, Some(DropGuide { column: 4, top: 22, bottom: 0 }));
        assert_eq!(g.right, Some(DropGuide { column: 5, top: 22, bottom: 0 }));
    }

    #[test]
    fn test_drop_guide_stops_on_obstruction() {
        let mut board = Board::new();
        board.set(4, 10, true);
        let mut m = Match::with_board(board, 400);
        m.spawn(PieceKind::O);
        let g = m.drop_guides().unwrap();
        assert_eq!(g.left.unwrap().bottom, 10);
        assert_eq!(g.right.unwrap().bottom, 0);
    }
}
