//! Board module - grid, active piece and game-state transitions
//!
//! The board owns the grid, the falling piece, the pre-generated next piece and
//! the score. Every command follows the same pattern: ask the piece for the
//! cells it *would* occupy, check them with [`Board::is_blocked`], then either
//! commit the change or leave everything untouched.
//!
//! # Coordinates
//!
//! Storage is a flat row-major `Vec` with row 0 at the **bottom**. The
//! engine-facing accessors ([`Board::get`], [`Board::set`], [`Board::is_blocked`])
//! use those coordinates. Queries for presentation layers ([`Board::cell_at`],
//! [`Board::active_piece_cells`], [`Board::ghost_cells`]) flip the row so that
//! row 0 is the **top**.
//!
//! Collision bounds are asymmetric: columns outside `[0, width)` and rows below
//! 0 always block, but rows at or above `height` never do. Pieces spawn with
//! part of their footprint above the visible grid.

use arrayvec::ArrayVec;

use crate::piece::{Piece, PieceShape};
use crate::rng::{PieceSource, SimpleRng};
use crate::scoring::line_clear_score;
use crate::snapshot::{ActiveSnapshot, BoardSnapshot};
use crate::types::{
    cell_id, Cell, Coord, GameAction, GameStatus, RotationDirection, ShapeKind, TickOutcome,
};

/// Up to four cells, stack-allocated
pub type CellSet = ArrayVec<Coord, 4>;

/// Narrowest board that keeps a horizontal I piece inside the side walls at
/// the spawn column
pub const MIN_WIDTH: usize = 4;

/// The game board
#[derive(Debug, Clone)]
pub struct Board<S = SimpleRng> {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major, row 0 at the bottom
    cells: Vec<Cell>,
    active: Option<Piece>,
    next: Piece,
    score: u32,
    lines: u32,
    status: GameStatus,
    source: S,
}

impl Board<SimpleRng> {
    /// Empty board drawing uniformly random pieces from a seeded [`SimpleRng`]
    pub fn with_seed(width: usize, height: usize, seed: u32) -> Self {
        Self::new(width, height, SimpleRng::new(seed))
    }
}

impl<S: PieceSource> Board<S> {
    /// Create an empty board. The next piece is generated immediately.
    ///
    /// # Panics
    ///
    /// Panics if `width` is below [`MIN_WIDTH`] or `height` is zero.
    pub fn new(width: usize, height: usize, mut source: S) -> Self {
        assert!(
            width >= MIN_WIDTH && height > 0,
            "board must be at least {MIN_WIDTH} wide and 1 high, got {width}x{height}"
        );
        let next = Piece::new(source.next_kind());
        Self {
            width,
            height,
            cells: vec![None; width * height],
            active: None,
            next,
            score: 0,
            lines: 0,
            status: GameStatus::NotStarted,
            source,
        }
    }

    /// Create a board whose bottom `height / 2` rows hold random filler.
    ///
    /// Each filler cell is occupied with probability 1/2 by a random kind. The
    /// filler uses its own generator seeded with `fill_seed`, so the piece
    /// sequence from `source` is unaffected.
    pub fn with_random_fill(width: usize, height: usize, source: S, fill_seed: u32) -> Self {
        let mut board = Self::new(width, height, source);
        let mut rng = SimpleRng::new(fill_seed);
        for cell in &mut board.cells[..(height / 2) * width] {
            if rng.next_bool() {
                *cell = Some(rng.next_kind());
            }
        }
        board
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared so far
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn active_piece(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn next_piece_kind(&self) -> ShapeKind {
        self.next.kind()
    }

    /// Footprint of the next piece, relative to its pivot (for previews)
    pub fn next_piece_shape(&self) -> PieceShape {
        self.next.local_cells(0)
    }

    /// Calculate flat index from engine coordinates
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    /// Get cell at engine coordinates (row 0 at the bottom).
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at engine coordinates (row 0 at the bottom).
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Occupant of the cell at `(row, col)`, with row 0 at the **top**.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height` or `col >= width`.
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) is outside the {}x{} board",
            self.width,
            self.height
        );
        self.cells[(self.height - 1 - row) * self.width + col]
    }

    /// Engine coordinates to top-indexed display coordinates
    fn to_display(&self, (row, col): Coord) -> Coord {
        (self.height as i32 - 1 - row, col)
    }

    fn to_display_set(&self, cells: &[Coord]) -> CellSet {
        cells.iter().map(|&cell| self.to_display(cell)).collect()
    }

    /// Cells of the active piece, top-indexed. Empty without an active piece.
    pub fn active_piece_cells(&self) -> CellSet {
        match self.active.and_then(|p| p.global_cells(0)) {
            Some(cells) => self.to_display_set(&cells),
            None => CellSet::new(),
        }
    }

    /// True if any cell is outside the side walls, below the floor, or on an
    /// occupied grid cell. Cells above the top row never block.
    pub fn is_blocked(&self, cells: &[Coord]) -> bool {
        cells.iter().any(|&(row, col)| {
            if col < 0 || col as usize >= self.width || row < 0 {
                return true;
            }
            matches!(self.get(row, col), Some(Some(_)))
        })
    }

    /// Check if a row (engine coordinates) is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.height {
            return false;
        }
        let start = row * self.width;
        self.cells[start..start + self.width]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Translate the active piece by `(drow, dcol)` if the target is free.
    pub fn try_move(&mut self, drow: i32, dcol: i32) -> bool {
        let Some(cells) = self
            .active
            .and_then(|p| p.global_cells_with_offset(drow, dcol, 0))
        else {
            return false;
        };
        if self.is_blocked(&cells) {
            return false;
        }
        if let Some(active) = self.active.as_mut() {
            active.translate(drow, dcol);
        }
        true
    }

    /// Rotate the active piece one step in place if the target is free.
    pub fn try_rotate(&mut self, direction: RotationDirection) -> bool {
        let delta = direction.delta();
        let Some(cells) = self
            .active
            .and_then(|p| p.global_cells_with_offset(0, 0, delta))
        else {
            return false;
        };
        if self.is_blocked(&cells) {
            return false;
        }
        if let Some(active) = self.active.as_mut() {
            active.rotate(delta);
        }
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(0, -1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// One row down
    pub fn soft_drop(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    /// Clockwise
    pub fn rotate_right(&mut self) -> bool {
        self.try_rotate(RotationDirection::Clockwise)
    }

    /// Counter-clockwise
    pub fn rotate_left(&mut self) -> bool {
        self.try_rotate(RotationDirection::CounterClockwise)
    }

    /// Drop the active piece as far as it goes. Returns rows travelled.
    ///
    /// The piece is not locked here; the next [`Board::advance_tick`] locks it.
    pub fn hard_drop(&mut self) -> u32 {
        let mut rows = 0;
        while self.try_move(-1, 0) {
            rows += 1;
        }
        rows
    }

    /// How many rows the active piece can still fall
    pub fn drop_distance(&self) -> Option<u32> {
        let piece = self.active?;
        let mut distance = 0;
        loop {
            let cells = piece.global_cells_with_offset(-(distance as i32) - 1, 0, 0)?;
            if self.is_blocked(&cells) {
                return Some(distance);
            }
            distance += 1;
        }
    }

    /// Landing position of the active piece, top-indexed. Empty without an
    /// active piece.
    pub fn ghost_cells(&self) -> CellSet {
        let landing = self.drop_distance().and_then(|distance| {
            self.active
                .and_then(|p| p.global_cells_with_offset(-(distance as i32), 0, 0))
        });
        match landing {
            Some(cells) => self.to_display_set(&cells),
            None => CellSet::new(),
        }
    }

    /// Write the active piece into the grid.
    ///
    /// Cells are written in footprint order. The first cell that is already
    /// occupied, or that has no grid cell because it sits above the top row,
    /// stops the lock and returns `false`: a top-out. Cells written before it
    /// stay written and the piece stays active. Without an active piece there
    /// is nothing to lock and the result is `false` as well.
    pub fn lock_active_piece(&mut self) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        let Some(cells) = piece.global_cells(0) else {
            return false;
        };

        for (row, col) in cells {
            match self.index(row, col) {
                Some(idx) if self.cells[idx].is_none() => self.cells[idx] = Some(piece.kind()),
                _ => return false,
            }
        }

        self.active = None;
        true
    }

    /// Remove every full row and return their indices (engine coordinates,
    /// bottom to top).
    ///
    /// Rows above a removed row shift down, keeping their order, and empty rows
    /// fill the top. Score grows once per call by the line-clear table.
    pub fn clear_full_rows(&mut self) -> Vec<usize> {
        let width = self.width;
        let mut cleared = Vec::new();
        let mut write_row = 0;

        for read_row in 0..self.height {
            if self.is_row_full(read_row) {
                cleared.push(read_row);
            } else {
                if write_row != read_row {
                    let src_start = read_row * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_row * width);
                }
                write_row += 1;
            }
        }

        self.cells[write_row * width..].fill(None);

        self.score = self.score.saturating_add(line_clear_score(cleared.len()));
        self.lines = self.lines.saturating_add(cleared.len() as u32);
        cleared
    }

    /// Promote the next piece to active at the spawn point (top row, centre
    /// column) and generate a fresh next piece.
    pub fn spawn_next_piece(&mut self) {
        let fresh = Piece::new(self.source.next_kind());
        let mut piece = std::mem::replace(&mut self.next, fresh);
        piece.set_origin(self.height as i32 - 1, (self.width / 2) as i32);
        self.active = Some(piece);
    }

    /// Start the game and spawn the first piece. No-op once started.
    pub fn start(&mut self) {
        if self.status != GameStatus::NotStarted {
            return;
        }
        self.status = GameStatus::Running;
        self.spawn_next_piece();
    }

    /// One gravity step.
    ///
    /// Moves the active piece down a row if possible. Otherwise locks it,
    /// clears full rows and spawns the next piece; if the lock fails the game is
    /// over and the piece stays where it is. Calls after game over keep
    /// reporting [`TickOutcome::GameOver`]; gating them is the driver's job.
    ///
    /// Before [`Board::start`] there is no piece to move: the board is left
    /// untouched, the status stays [`GameStatus::NotStarted`] and the result is
    /// [`TickOutcome::GameOver`].
    pub fn advance_tick(&mut self) -> TickOutcome {
        if self.status == GameStatus::NotStarted {
            return TickOutcome::GameOver;
        }

        if self.try_move(-1, 0) {
            return TickOutcome::Fell;
        }

        if self.lock_active_piece() {
            let lines = self.clear_full_rows().len() as u32;
            self.spawn_next_piece();
            TickOutcome::Locked { lines }
        } else {
            if self.status == GameStatus::Running {
                self.status = GameStatus::GameOver;
            }
            TickOutcome::GameOver
        }
    }

    /// Apply a movement or rotation action.
    ///
    /// `Pause` and `Restart` belong to the driver and always return `false`.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop() > 0,
            GameAction::RotateCw => self.rotate_right(),
            GameAction::RotateCcw => self.rotate_left(),
            GameAction::Pause | GameAction::Restart => false,
        }
    }

    /// Write the presentation view of this board into `out`, reusing its
    /// allocation.
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.width = self.width;
        out.height = self.height;
        out.cells.clear();
        for row in (0..self.height).rev() {
            let start = row * self.width;
            out.cells
                .extend(self.cells[start..start + self.width].iter().map(|&c| cell_id(c)));
        }

        out.active = self.active.map(|piece| ActiveSnapshot {
            kind: piece.kind(),
            orientation: piece.orientation(),
            cells: self.active_piece_cells(),
        });
        out.ghost = self.ghost_cells();
        out.next_kind = self.next_piece_kind();
        out.next_shape = self.next_piece_shape();
        out.score = self.score;
        out.lines = self.lines;
        out.status = self.status;
        out.paused = false;
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(kind: ShapeKind) -> impl FnMut() -> ShapeKind {
        move || kind
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(4, 3, fixed(ShapeKind::O));
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 3), Some(3));
        assert_eq!(board.index(1, 0), Some(4));
        assert_eq!(board.index(2, 3), Some(11));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(0, 4), None);
        assert_eq!(board.index(3, 0), None);
    }

    #[test]
    fn test_cell_at_inverts_rows() {
        let mut board = Board::new(4, 3, fixed(ShapeKind::O));
        board.set(0, 1, Some(ShapeKind::T));

        assert_eq!(board.cell_at(2, 1), Some(ShapeKind::T));
        assert_eq!(board.cell_at(0, 1), None);
        assert_eq!(board.cells[1], Some(ShapeKind::T));
    }

    #[test]
    #[should_panic]
    fn test_cell_at_out_of_range_panics() {
        let board = Board::new(4, 3, fixed(ShapeKind::O));
        let _ = board.cell_at(3, 0);
    }

    #[test]
    #[should_panic]
    fn test_zero_width_panics() {
        let _ = Board::new(0, 3, fixed(ShapeKind::O));
    }

    #[test]
    #[should_panic(expected = "at least 4 wide")]
    fn test_narrow_board_panics() {
        let _ = Board::new(3, 6, fixed(ShapeKind::I));
    }

    #[test]
    fn test_minimum_width_keeps_spawn_inside_walls() {
        for kind in ShapeKind::ALL {
            let mut board = Board::new(MIN_WIDTH, 6, fixed(kind));
            board.start();
            let cells = board.active_piece_cells();
            assert!(
                cells.iter().all(|&(_, col)| (0..MIN_WIDTH as i32).contains(&col)),
                "{:?} spawned at {:?}",
                kind,
                cells
            );
        }
    }

    #[test]
    fn test_tick_before_start_changes_nothing() {
        let mut board = Board::new(4, 6, fixed(ShapeKind::O));
        let before = board.snapshot();

        assert_eq!(board.advance_tick(), TickOutcome::GameOver);
        assert_eq!(board.status(), GameStatus::NotStarted);
        assert_eq!(board.snapshot(), before);

        board.start();
        assert_eq!(board.advance_tick(), TickOutcome::Fell);
    }

    #[test]
    fn test_snapshot_previews_next_piece() {
        let mut kinds = [ShapeKind::T, ShapeKind::S, ShapeKind::Z].into_iter();
        let mut board = Board::new(10, 20, move || kinds.next().unwrap_or(ShapeKind::O));
        assert_eq!(board.next_piece_kind(), ShapeKind::T);

        board.start();
        let snap = board.snapshot();
        assert_eq!(snap.active.map(|a| a.kind), Some(ShapeKind::T));
        assert_eq!(snap.next_kind, ShapeKind::S);
        assert_eq!(snap.next_kind, board.next_piece_kind());
        assert_eq!(snap.next_shape, crate::piece::shape_cells(ShapeKind::S, 0));
    }

    #[test]
    fn test_random_fill_only_touches_bottom_half() {
        let board = Board::with_random_fill(10, 8, fixed(ShapeKind::I), 42);
        let bottom = &board.cells[..4 * 10];
        let top = &board.cells[4 * 10..];

        assert!(bottom.iter().any(|c| c.is_some()));
        assert!(bottom.iter().any(|c| c.is_none()));
        assert!(top.iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_spawn_position_is_top_centre() {
        let mut board = Board::new(10, 20, fixed(ShapeKind::T));
        board.start();
        assert_eq!(board.active_piece().and_then(|p| p.origin()), Some((19, 5)));
        assert_eq!(board.active_piece().map(|p| p.orientation()), Some(0));
    }

    #[test]
    fn test_failed_lock_keeps_earlier_writes() {
        let mut board = Board::new(4, 4, fixed(ShapeKind::I));
        board.start();
        // Horizontal I lands on row 0, cols 0..=3; block the third cell.
        board.hard_drop();
        assert_eq!(board.active_piece().and_then(|p| p.origin()), Some((0, 2)));
        board.set(0, 2, Some(ShapeKind::Z));

        assert!(!board.lock_active_piece());
        assert_eq!(board.get(0, 0), Some(Some(ShapeKind::I)));
        assert_eq!(board.get(0, 1), Some(Some(ShapeKind::I)));
        assert_eq!(board.get(0, 3), Some(None));
        assert!(board.active_piece().is_some());
    }

    #[test]
    fn test_lock_above_top_fails() {
        let mut board = Board::new(4, 6, fixed(ShapeKind::O));
        board.start();
        // O at spawn occupies rows 5 and 6; row 6 has no grid cell.
        assert!(!board.lock_active_piece());
    }

    #[test]
    fn test_lock_without_active_piece() {
        let mut board = Board::new(4, 6, fixed(ShapeKind::O));
        assert!(!board.lock_active_piece());
    }
}
