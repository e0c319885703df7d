//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, headless test drivers).
//!
//! # Coordinates
//!
//! Cells are addressed as `(row, col)` pairs of `i32`:
//!
//! - Inside the engine, row 0 is the **bottom** row and rows grow upwards.
//! - Every query aimed at a presentation layer inverts the row so that row 0 is
//!   the **top** row, the usual display orientation.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 10 | Board columns |
//! | `DEFAULT_HEIGHT` | 22 | Board rows |
//! | `DEFAULT_GRAVITY_MS` | 500 | Interval between gravity steps |
//! | `TICK_MS` | 16 | Frame interval of the terminal driver (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{RotationDirection, ShapeKind};
//!
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//! assert_eq!(ShapeKind::from_id(kind.id()), Some(ShapeKind::T));
//!
//! assert_eq!(RotationDirection::Clockwise.delta(), 1);
//! ```

/// Default board width in cells
pub const DEFAULT_WIDTH: usize = 10;

/// Default board height in cells
pub const DEFAULT_HEIGHT: usize = 22;

/// Default interval between gravity steps in milliseconds
pub const DEFAULT_GRAVITY_MS: u32 = 500;

/// Fixed frame interval of the terminal driver in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// A cell position as `(row, col)`.
pub type Coord = (i32, i32);

/// The seven tetromino shape kinds
///
/// The discriminant order is the identity order: `I` is 1, `Z` is 7.
/// Identity 0 is reserved for an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    I,
    L,
    J,
    T,
    O,
    S,
    Z,
}

impl ShapeKind {
    /// Number of shape kinds
    pub const COUNT: usize = 7;

    /// All kinds in identity order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::T,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Zero-based table index
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Grid identity (1..=7) written into occupied cells
    pub const fn id(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`ShapeKind::id`]; `0` and anything above 7 map to `None`.
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_id(1), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_id(7), Some(ShapeKind::Z));
    /// assert_eq!(ShapeKind::from_id(0), None);
    /// ```
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    /// Kind at a zero-based index, wrapping modulo 7
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// Parse shape kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            "t" => Some(ShapeKind::T),
            "o" => Some(ShapeKind::O),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    /// Uppercase single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::L => "L",
            ShapeKind::J => "J",
            ShapeKind::T => "T",
            ShapeKind::O => "O",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(ShapeKind)`: Cell filled by a piece of the given kind
pub type Cell = Option<ShapeKind>;

/// Numeric form of a cell: 0 for empty, otherwise the shape identity.
pub fn cell_id(cell: Cell) -> u8 {
    cell.map_or(0, ShapeKind::id)
}

/// Direction of a single rotation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// Orientation delta applied by this direction (`+1` or `-1`)
    pub const fn delta(self) -> i32 {
        match self {
            RotationDirection::Clockwise => 1,
            RotationDirection::CounterClockwise => -1,
        }
    }
}

/// Result of a single gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The active piece moved down one row.
    Fell,
    /// The active piece locked; `lines` full rows were cleared and the next
    /// piece was spawned.
    Locked { lines: u32 },
    /// The active piece could not be locked. Terminal.
    GameOver,
}

/// Lifecycle of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    NotStarted,
    Running,
    GameOver,
}

/// Commands a player (or any other driver) can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down
    SoftDrop,
    /// Drop piece to the lowest free position (locks on the next gravity step)
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Toggle pause state (driver-level)
    Pause,
    /// Start a fresh game (driver-level)
    Restart,
}

/// Line clear scoring table, indexed by rows cleared in one call (capped at 4)
///
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 or more lines: 1200 points
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_ids_cover_one_to_seven() {
        let ids: Vec<u8> = ShapeKind::ALL.iter().map(|k| k.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_id(kind.id()), Some(kind));
            assert_eq!(ShapeKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(ShapeKind::from_id(8), None);
    }

    #[test]
    fn cell_id_maps_empty_to_zero() {
        assert_eq!(cell_id(None), 0);
        assert_eq!(cell_id(Some(ShapeKind::O)), 5);
    }

    #[test]
    fn line_scores_table() {
        assert_eq!(LINE_SCORES, [0, 40, 100, 300, 1200]);
    }
}
