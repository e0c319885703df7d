use crate::board::CellSet;
use crate::piece::{shape_cells, PieceShape};
use crate::types::{GameStatus, ShapeKind};

/// Active piece as seen by a presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub orientation: u8,
    /// Occupied cells, top-indexed. Rows may be negative while the piece is
    /// partly above the grid.
    pub cells: CellSet,
}

/// Read-only copy of everything a renderer needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub width: usize,
    pub height: usize,
    /// Cell identities (0 = empty, 1..=7 = shape), row-major, row 0 at the top
    pub cells: Vec<u8>,
    pub active: Option<ActiveSnapshot>,
    pub ghost: CellSet,
    pub next_kind: ShapeKind,
    pub next_shape: PieceShape,
    pub score: u32,
    pub lines: u32,
    pub status: GameStatus,
    pub paused: bool,
}

impl BoardSnapshot {
    /// Identity at top-indexed `(row, col)`; 0 when out of range
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        if row >= self.height || col >= self.width {
            return 0;
        }
        self.cells[row * self.width + col]
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
            active: None,
            ghost: CellSet::new(),
            next_kind: ShapeKind::I,
            next_shape: shape_cells(ShapeKind::I, 0),
            score: 0,
            lines: 0,
            status: GameStatus::NotStarted,
            paused: false,
        }
    }
}
