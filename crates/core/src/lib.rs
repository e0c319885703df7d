//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game: piece geometry,
//! collision detection, locking, line clearing and scoring. It has **no**
//! dependencies on terminals, input devices or timers, which keeps it:
//!
//! - **Deterministic**: piece generation comes from an injected, seedable source
//! - **Testable**: every transition is a plain method call with a plain result
//! - **Portable**: any driver (terminal, GUI, headless harness) can sit on top
//!
//! # Module Structure
//!
//! - [`piece`]: tetromino footprints and rotation table
//! - [`board`]: grid, active/next piece, movement, locking, line clears
//! - [`rng`]: seedable piece sources (uniform LCG, 7-bag)
//! - [`scoring`]: classic line-clear table
//! - [`snapshot`]: read-only view for renderers
//! - [`session`]: gravity timer, pause, restart and game-over gating
//! - [`config`]: environment-driven session settings
//!
//! # Rules
//!
//! - Pieces spawn at the top row, centre column, partly above the grid.
//! - Moves and rotations are attempts: blocked ones return `false` and change
//!   nothing. There are no wall kicks.
//! - Gravity moves the piece down one row per step; a piece that cannot fall
//!   locks immediately.
//! - A lock that overlaps an occupied cell (or pokes above the grid) ends the
//!   game.
//! - Clearing 1/2/3/4+ rows at once scores 40/100/300/1200.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Board, TickOutcome};
//!
//! let mut board = Board::with_seed(10, 20, 12345);
//! board.start();
//!
//! board.move_left();
//! board.rotate_right();
//! assert_eq!(board.advance_tick(), TickOutcome::Fell);
//! assert_eq!(board.score(), 0);
//! ```

pub mod board;
pub mod config;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, CellSet, MIN_WIDTH};
pub use config::SessionConfig;
pub use piece::{shape_cells, Piece, PieceShape, SHAPE_TABLE};
pub use rng::{PieceSource, Randomizer, RandomizerKind, SevenBag, SimpleRng};
pub use scoring::line_clear_score;
pub use session::Session;
pub use snapshot::{ActiveSnapshot, BoardSnapshot};
pub use types::{Cell, Coord, GameAction, GameStatus, RotationDirection, ShapeKind, TickOutcome};
