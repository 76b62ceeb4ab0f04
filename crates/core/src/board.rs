//! Board module - manages the game grid
//!
//! The board is a 10x25 grid of occupied/empty cells plus a per-row
//! "completed" mark. Uses a flat array for cache locality and zero allocation.
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right) and y ranges 0..24
//! (**bottom to top**). Everything left of column 0, right of column 9 or below
//! row 0 counts as occupied (walls and floor); everything above row 24 counts
//! as empty sky.

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Row indices returned by [`Board::mark_completed_rows`], ascending.
pub type CompletedRows = ArrayVec<usize, HEIGHT>;

/// Per-row flags marking rows that are full and pending removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedMask {
    rows: [bool; HEIGHT],
}

impl CompletedMask {
    pub const fn new() -> Self {
        Self {
            rows: [false; HEIGHT],
        }
    }

    /// Is row `y` marked? Out-of-range rows are never marked.
    pub fn contains(&self, y: usize) -> bool {
        self.rows.get(y).copied().unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        !self.rows.iter().any(|&r| r)
    }

    pub fn count(&self) -> usize {
        self.rows.iter().filter(|&&r| r).count()
    }

    /// Marked row indices, bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(y, &marked)| marked.then_some(y))
    }

    fn clear(&mut self) {
        self.rows = [false; HEIGHT];
    }
}

impl Default for CompletedMask {
    fn default() -> Self {
        Self::new()
    }
}

/// The game board - 10 columns x 25 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x), row 0 first.
    cells: [bool; BOARD_SIZE],
    completed: CompletedMask,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
            completed: CompletedMask::new(),
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<bool> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, occupied: bool) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Collision view of a single cell.
    ///
    /// Side walls and the floor are occupied. Rows above the top are empty.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 {
            return true;
        }
        self.get(x, y).unwrap_or(false)
    }

    /// Does `shape` at `anchor + (dx, dy)` hit anything?
    ///
    /// The single legality check behind moves, rotations and spawns.
    pub fn overlaps(&self, shape: &Shape, anchor: (i8, i8), dx: i8, dy: i8) -> bool {
        shape
            .blocks
            .iter()
            .any(|&(bx, by)| self.is_occupied(anchor.0 + bx + dx, anchor.1 + by + dy))
    }

    /// Merge `shape` at `anchor` into the grid.
    ///
    /// All four cells must be in bounds and empty.
    pub fn place(&mut self, shape: &Shape, anchor: (i8, i8)) {
        for &(bx, by) in shape.blocks.iter() {
            let x = anchor.0 + bx;
            let y = anchor.1 + by;
            debug_assert!(
                Self::index(x, y).is_some(),
                "placing block out of bounds at ({}, {})",
                x,
                y
            );
            debug_assert!(
                !self.get(x, y).unwrap_or(false),
                "placing block onto occupied cell ({}, {})",
                x,
                y
            );
            self.set(x, y, true);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|&c| c)
    }

    /// Mark every full row as completed and return the marked rows (bottom to top).
    ///
    /// Cells are left untouched so the rows can still be drawn with the
    /// completed marker until [`Board::compact`] removes them.
    pub fn mark_completed_rows(&mut self) -> CompletedRows {
        let mut rows = CompletedRows::new();
        for y in 0..HEIGHT {
            let full = self.is_row_full(y);
            self.completed.rows[y] = full;
            if full {
                rows.push(y);
            }
        }
        rows
    }

    /// Rows currently marked as completed.
    pub fn completed(&self) -> &CompletedMask {
        &self.completed
    }

    /// Remove all marked rows, shifting the rows above them down.
    ///
    /// Single bottom-to-top pass (two pointers, no allocation). Vacated rows at
    /// the top are cleared and every mark is reset. A no-op when nothing is
    /// marked.
    pub fn compact(&mut self) {
        if self.completed.is_empty() {
            return;
        }

        let mut write_y = 0;
        for read_y in 0..HEIGHT {
            if self.completed.rows[read_y] {
                continue;
            }
            if write_y != read_y {
                let src = read_y * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
            }
            write_y += 1;
        }

        self.cells[write_y * WIDTH..].fill(false);
        self.completed.clear();
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// One row of cells, left to right. `None` above the top row.
    pub fn row(&self, y: usize) -> Option<&[bool]> {
        if y >= HEIGHT {
            return None;
        }
        let start = y * WIDTH;
        Some(&self.cells[start..start + WIDTH])
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.completed.clear();
    }

    /// Build a board from rows given **top row first**, as they appear on screen.
    ///
    /// `#` is occupied, anything else is empty. Missing rows at the top are
    /// empty; extra characters past the board width are ignored.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let bottom = rows.len().min(HEIGHT);
        for (i, line) in rows.iter().rev().take(bottom).enumerate() {
            for (x, ch) in line.chars().take(WIDTH).enumerate() {
                board.set(x as i8, i as i8, ch == '#');
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
