//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board, the piece catalog and the per-match state
//! machine. It has **zero dependencies** on display, buttons, clocks or I/O,
//! making it:
//!
//! - **Deterministic**: same seed and same inputs produce the same match
//! - **Testable**: every rule is reachable without hardware
//! - **Small**: fixed-size arrays only, no allocation on any game path
//!
//! # Module Structure
//!
//! - [`board`]: 10x25 grid with collision, placement and row compaction
//! - [`game_state`]: active piece, fall budget and match phases
//! - [`pieces`]: the 28 static shapes (7 kinds x 4 rotations)
//! - [`rng`]: uniform piece selection
//!
//! # Game Rules
//!
//! - **Uniform spawns**: every piece kind is equally likely, independently
//! - **Plain rotation**: next rotation at the same anchor, rejected on overlap
//! - **Gravity**: one row per fall interval; a blocked step lands the piece
//! - **Row clears**: full rows are marked, shown, then compacted in one pass
//! - **Game over**: only when a new piece cannot spawn
//!
//! # Example
//!
//! ```
//! use pocket_tetris_core::{Command, Match, TickOutcome};
//! use pocket_tetris_types::PieceKind;
//!
//! let mut game = Match::new(400);
//! assert!(game.spawn(PieceKind::O));
//!
//! assert_eq!(game.apply(Command::MoveLeft), TickOutcome::Shifted);
//! while game.apply(Command::Fall) == TickOutcome::Fell {}
//!
//! assert_eq!(game.board().occupied_count(), 4);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;

pub use pocket_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, CompletedMask, CompletedRows};
pub use game_state::{ActivePiece, Command, DropGuide, DropGuides, Match, Phase, TickOutcome};
pub use pieces::{shape_of, spawn_shape, MinoOffset, Shape, SHAPES};
pub use rng::SimpleRng;
