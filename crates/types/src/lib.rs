//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, controller, rendering, input).
//!
//! # Board Dimensions
//!
//! The playfield matches the device's portrait panel:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 25 rows (indexed 0-24, **row 0 is the bottom**)
//! - **Spawn anchor**: (4, 24), horizontal center on the top row
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FALL_INTERVAL_MS` | 400 | Time between forced downward steps |
//! | `ROW_CLEAR_PAUSE_MS` | 200 | Completed-row marker shown before compaction |
//! | `DEBOUNCE_MS` | 20 | Level must be stable this long to count |
//! | `BUTTON_SAMPLE_MS` | 10 | Button sampling period |
//!
//! # Examples
//!
//! ```
//! use pocket_tetris_types::{Button, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_index(3), PieceKind::O);
//! assert_eq!(Rotation::North.next(), Rotation::East);
//! assert_eq!(Button::ALL[0], Button::Left);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 25);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (25 rows)
pub const BOARD_HEIGHT: u8 = 25;

/// Spawn anchor column: horizontal center of the board.
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 1;

/// Spawn anchor row: the topmost row.
pub const SPAWN_Y: i8 = BOARD_HEIGHT as i8 - 1;

/// Interval between forced downward steps (400ms)
pub const FALL_INTERVAL_MS: u32 = 400;

/// Pause while completed rows are shown before they are removed (200ms)
pub const ROW_CLEAR_PAUSE_MS: u32 = 200;

/// Debounce window for a button level change (20ms)
pub const DEBOUNCE_MS: u32 = 20;

/// Button sampling period (10ms)
pub const BUTTON_SAMPLE_MS: u32 = 10;

/// Number of distinct piece kinds.
pub const PIECE_KIND_COUNT: usize = 7;

/// Number of rotation states per piece.
pub const ROTATION_COUNT: usize = 4;


/// The seven tetromino piece kinds
///
/// Declaration order is the device's table order; [`PieceKind::from_index`]
/// maps a random draw in `0..7` onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in table order.
    pub const ALL: [PieceKind; PIECE_KIND_COUNT] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Table index of this kind.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Kind for a table index.
    ///
    /// Indices wrap modulo 7 so any random draw maps to a valid kind.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % PIECE_KIND_COUNT]
    }
}

/// Rotation states
///
/// - **North**: Spawn orientation (0°)
/// - **East**: 90°
/// - **South**: 180°
/// - **West**: 270°
///
/// The only transition the game performs is [`Rotation::next`]:
/// North → East → South → West → North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Next rotation state, `(index + 1) mod 4`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pocket_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.next(), Rotation::East);
    /// assert_eq!(Rotation::West.next(), Rotation::North);
    /// ```
    pub fn next(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Rotation for an index, wrapping modulo 4.
    pub fn from_index(index: usize) -> Self {
        match index % ROTATION_COUNT {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }
}

/// The three physical buttons.
///
/// Declaration order is also the tie-break priority when several presses are
/// read in the same tick: `Left` wins over `Right`, which wins over `Rotate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Button {
    /// Move piece one cell left
    Left,
    /// Move piece one cell right
    Right,
    /// Rotate piece to its next rotation state
    Rotate,
}

impl Button {
    /// All buttons in priority order.
    pub const ALL: [Button; 3] = [Button::Left, Button::Right, Button::Rotate];
}
