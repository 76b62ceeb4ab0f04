//! Pieces module - Tetromino shapes for the device's rotation table
//!
//! Every (kind, rotation) pair has a fixed [`Shape`]: four block offsets from the
//! anchor plus the two boundary anchors used for the drop guides. The table is
//! static and never mutated. There are no wall kicks; a rotation that overlaps
//! is rejected by the caller.
//!
//! Offsets use board orientation: `+x` is right, `+y` is up. Every block lies
//! within x ∈ [-1, 2], y ∈ [-3, 0] of the anchor.

use crate::types::{PieceKind, Rotation, PIECE_KIND_COUNT, ROTATION_COUNT};

/// Offset of a single mino relative to piece anchor
pub type MinoOffset = (i8, i8);

/// Immutable geometry for one piece kind in one rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// The four occupied cells, relative to the anchor.
    pub blocks: [MinoOffset; 4],
    /// Lowest block of the leftmost column; start of the left drop guide.
    pub left_boundary: MinoOffset,
    /// Lowest block of the rightmost column; start of the right drop guide.
    pub right_boundary: MinoOffset,
}

const fn shape(blocks: [MinoOffset; 4], left: MinoOffset, right: MinoOffset) -> Shape {
    Shape {
        blocks,
        left_boundary: left,
        right_boundary: right,
    }
}

/// Get the shape for a piece kind and rotation.
///
/// Total over all 28 combinations.
pub fn shape_of(kind: PieceKind, rotation: Rotation) -> &'static Shape {
    &SHAPES[kind.index()][rotation.index()]
}

/// Shape for a piece at its spawn orientation.
pub fn spawn_shape(kind: PieceKind) -> &'static Shape {
    shape_of(kind, Rotation::North)
}

/// The full table, indexed `[kind][rotation]`.
pub static SHAPES: [[Shape; ROTATION_COUNT]; PIECE_KIND_COUNT] = [
    // I
    [
        shape([(-1, -1), (0, -1), (1, -1), (2, -1)], (-1, -1), (2, -1)),
        shape([(0, 0), (0, -1), (0, -2), (0, -3)], (0, -3), (0, -3)),
        shape([(-1, -1), (0, -1), (1, -1), (2, -1)], (-1, -1), (2, -1)),
        shape([(0, 0), (0, -1), (0, -2), (0, -3)], (0, -3), (0, -3)),
    ],
    // J
    [
        shape([(-1, 0), (-1, -1), (0, -1), (1, -1)], (-1, -1), (1, -1)),
        shape([(0, 0), (0, -1), (0, -2), (-1, -2)], (-1, -2), (0, -2)),
        shape([(-1, -1), (0, -1), (1, -1), (1, -2)], (-1, -1), (1, -2)),
        shape([(0, 0), (1, 0), (0, -1), (0, -2)], (0, -2), (1, 0)),
    ],
    // L
    [
        shape([(1, 0), (1, -1), (0, -1), (-1, -1)], (-1, -1), (1, -1)),
        shape([(-1, 0), (0, 0), (0, -1), (0, -2)], (-1, 0), (0, -2)),
        shape([(-1, -1), (0, -1), (1, -1), (-1, -2)], (-1, -2), (1, -1)),
        shape([(0, 0), (0, -1), (0, -2), (1, -2)], (0, -2), (1, -2)),
    ],
    // O (all rotations identical)
    [
        shape([(0, 0), (1, 0), (0, -1), (1, -1)], (0, -1), (1, -1)),
        shape([(0, 0), (1, 0), (0, -1), (1, -1)], (0, -1), (1, -1)),
        shape([(0, 0), (1, 0), (0, -1), (1, -1)], (0, -1), (1, -1)),
        shape([(0, 0), (1, 0), (0, -1), (1, -1)], (0, -1), (1, -1)),
    ],
    // S
    [
        shape([(0, -1), (1, -1), (1, 0), (2, 0)], (0, -1), (2, 0)),
        shape([(0, 0), (0, -1), (1, -1), (1, -2)], (0, -1), (1, -2)),
        shape([(0, -1), (1, -1), (1, 0), (2, 0)], (0, -1), (2, 0)),
        shape([(0, 0), (0, -1), (1, -1), (1, -2)], (0, -1), (1, -2)),
    ],
    // T
    [
        shape([(1, 0), (0, -1), (1, -1), (2, -1)], (0, -1), (2, -1)),
        shape([(1, 0), (1, -1), (0, -1), (1, -2)], (0, -1), (1, -2)),
        shape([(0, 0), (1, 0), (2, 0), (1, -1)], (0, 0), (2, 0)),
        shape([(0, 0), (0, -1), (0, -2), (1, -1)], (0, -2), (1, -1)),
    ],
    // Z
    [
        shape([(0, 0), (1, 0), (1, -1), (2, -1)], (0, 0), (2, -1)),
        shape([(1, 0), (1, -1), (0, -1), (0, -2)], (0, -2), (1, -1)),
        shape([(0, 0), (1, 0), (1, -1), (2, -1)], (0, 0), (2, -1)),
        shape([(1, 0), (1, -1), (0, -1), (0, -2)], (0, -2), (1, -1)),
    ],
];
