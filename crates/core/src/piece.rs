//! Piece module - tetromino footprints and rotation geometry
//!
//! Every shape kind has a spawn footprint of four `(row, col)` offsets around a
//! pivot. Rows grow upwards. Rotating one step clockwise maps an offset
//! `(row, col)` to `(-col, row)`.
//!
//! Not every kind uses all four orientations:
//! - **O** never changes.
//! - **I**, **S** and **Z** alternate between two footprints (0 ≡ 2, 1 ≡ 3).
//! - **L**, **J** and **T** have four distinct footprints.
//!
//! All 7×4 footprints are computed at compile time into [`SHAPE_TABLE`], so a
//! query is a plain table lookup.

use crate::types::{Coord, ShapeKind};

/// Four cell offsets relative to a piece pivot
pub type PieceShape = [Coord; 4];

/// Spawn-orientation footprints, indexed by [`ShapeKind::index`]
const SPAWN_SHAPES: [PieceShape; ShapeKind::COUNT] = [
    // I
    [(0, -2), (0, -1), (0, 0), (0, 1)],
    // L
    [(0, -1), (0, 0), (0, 1), (1, 1)],
    // J
    [(0, -1), (0, 0), (0, 1), (1, -1)],
    // T
    [(0, -1), (0, 0), (0, 1), (1, 0)],
    // O
    [(0, 0), (0, -1), (1, 0), (1, -1)],
    // S
    [(0, -1), (0, 0), (1, 0), (1, 1)],
    // Z
    [(1, -1), (1, 0), (0, 0), (0, 1)],
];

/// Footprints for every (kind, orientation) pair
pub const SHAPE_TABLE: [[PieceShape; 4]; ShapeKind::COUNT] = build_shape_table();

/// Number of clockwise quarter turns applied to the spawn footprint to reach
/// `orientation`.
const fn quarter_turns(kind: ShapeKind, orientation: usize) -> usize {
    match kind {
        ShapeKind::O => 0,
        ShapeKind::I | ShapeKind::S | ShapeKind::Z => orientation % 2,
        ShapeKind::L | ShapeKind::J | ShapeKind::T => orientation % 4,
    }
}

const fn rotate_cw((row, col): Coord) -> Coord {
    (-col, row)
}

const fn build_shape_table() -> [[PieceShape; 4]; ShapeKind::COUNT] {
    let mut table = [[[(0, 0); 4]; 4]; ShapeKind::COUNT];
    let mut k = 0;
    while k < ShapeKind::COUNT {
        let mut orientation = 0;
        while orientation < 4 {
            let turns = quarter_turns(ShapeKind::ALL[k], orientation);
            let mut i = 0;
            while i < 4 {
                let mut cell = SPAWN_SHAPES[k][i];
                let mut t = 0;
                while t < turns {
                    cell = rotate_cw(cell);
                    t += 1;
                }
                table[k][orientation][i] = cell;
                i += 1;
            }
            orientation += 1;
        }
        k += 1;
    }
    table
}

/// Footprint of `kind` at `orientation` (taken modulo 4)
pub fn shape_cells(kind: ShapeKind, orientation: u8) -> PieceShape {
    SHAPE_TABLE[kind.index()][(orientation % 4) as usize]
}

/// A tetromino: fixed kind, mutable orientation and pivot position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: ShapeKind,
    orientation: u8,
    /// `None` until the board places the piece.
    origin: Option<Coord>,
}

impl Piece {
    /// Create an unplaced piece in spawn orientation
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            orientation: 0,
            origin: None,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Clockwise quarter turns from spawn orientation, in `0..4`
    pub fn orientation(&self) -> u8 {
        self.orientation
    }

    pub fn origin(&self) -> Option<Coord> {
        self.origin
    }

    /// Move the pivot to `(row, col)`
    pub fn set_origin(&mut self, row: i32, col: i32) {
        self.origin = Some((row, col));
    }

    fn orientation_after(&self, delta: i32) -> u8 {
        (i32::from(self.orientation) + delta).rem_euclid(4) as u8
    }

    /// Offsets relative to the pivot at `orientation + delta` (mod 4).
    pub fn local_cells(&self, delta: i32) -> PieceShape {
        shape_cells(self.kind, self.orientation_after(delta))
    }

    /// Board cells at `orientation + delta`, or `None` if the piece is unplaced.
    pub fn global_cells(&self, delta: i32) -> Option<PieceShape> {
        self.global_cells_with_offset(0, 0, delta)
    }

    /// Board cells after a hypothetical translation and rotation.
    ///
    /// Nothing is mutated; the board uses this to test a move before committing it.
    pub fn global_cells_with_offset(&self, drow: i32, dcol: i32, delta: i32) -> Option<PieceShape> {
        let (row, col) = self.origin?;
        let mut cells = self.local_cells(delta);
        for cell in &mut cells {
            *cell = (cell.0 + row + drow, cell.1 + col + dcol);
        }
        Some(cells)
    }

    /// Shift the pivot. No-op on an unplaced piece.
    pub(crate) fn translate(&mut self, drow: i32, dcol: i32) {
        if let Some((row, col)) = self.origin {
            self.origin = Some((row + drow, col + dcol));
        }
    }

    /// Apply `delta` quarter turns, wrapping in both directions.
    pub(crate) fn rotate(&mut self, delta: i32) {
        self.orientation = self.orientation_after(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut cells: PieceShape) -> PieceShape {
        cells.sort_unstable();
        cells
    }

    #[test]
    fn test_t_orientations() {
        let t = |o| sorted(shape_cells(ShapeKind::T, o));
        // Nub up, right, down, left.
        assert_eq!(t(0), sorted([(0, -1), (0, 0), (0, 1), (1, 0)]));
        assert_eq!(t(1), sorted([(1, 0), (0, 0), (-1, 0), (0, 1)]));
        assert_eq!(t(2), sorted([(0, 1), (0, 0), (0, -1), (-1, 0)]));
        assert_eq!(t(3), sorted([(-1, 0), (0, 0), (1, 0), (0, -1)]));
    }

    #[test]
    fn test_i_vertical() {
        assert_eq!(
            sorted(shape_cells(ShapeKind::I, 1)),
            sorted([(2, 0), (1, 0), (0, 0), (-1, 0)])
        );
    }

    #[test]
    fn test_orientation_wraps_both_ways() {
        let mut piece = Piece::new(ShapeKind::L);
        piece.rotate(-1);
        assert_eq!(piece.orientation(), 3);
        piece.rotate(2);
        assert_eq!(piece.orientation(), 1);
        assert_eq!(piece.local_cells(-2), shape_cells(ShapeKind::L, 3));
    }

    #[test]
    fn test_unplaced_piece_has_no_global_cells() {
        let piece = Piece::new(ShapeKind::O);
        assert_eq!(piece.origin(), None);
        assert_eq!(piece.global_cells(0), None);
        assert_eq!(piece.global_cells_with_offset(1, 1, 1), None);
    }

    #[test]
    fn test_global_cells_with_offset_does_not_mutate() {
        let mut piece = Piece::new(ShapeKind::T);
        piece.set_origin(5, 3);
        let before = piece;

        let moved = piece.global_cells_with_offset(-1, 2, 1).unwrap();
        assert_eq!(piece, before);
        assert_eq!(
            sorted(moved),
            sorted([(5, 5), (4, 5), (3, 5), (4, 6)])
        );
    }
}
