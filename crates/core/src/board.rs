//! Board module - manages the game grid
//!
//! The board is a 7x6 grid where each cell is empty or holds one player's piece.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..5 (top to bottom), col ranges 0..6 (left to right).
//! Pieces settle at the bottom row (5) first.
//!
//! Invariant: within any column, occupied cells form a contiguous block that
//! starts at the bottom row. `place` refuses any write that would break it.

use arrayvec::ArrayVec;

use crate::types::{
    cell_to_u8, Cell, GameError, Player, BOARD_HEIGHT, BOARD_SIZE, BOARD_WIDTH,
};

/// The game board - 7 columns x 6 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: u8, col: u8) -> Option<usize> {
        if row >= BOARD_HEIGHT || col >= BOARD_WIDTH {
            return None;
        }
        Some((row as usize) * (BOARD_WIDTH as usize) + (col as usize))
    }

    #[inline]
    fn check_column(col: u8) -> Result<(), GameError> {
        if col >= BOARD_WIDTH {
            return Err(GameError::InvalidColumn { column: col });
        }
        Ok(())
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: u8, col: u8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, row: u8, col: u8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Bottom-most empty row in `col`, scanning upward from the bottom.
    ///
    /// Returns `Ok(None)` when the column is full.
    pub fn landing_row(&self, col: u8) -> Result<Option<u8>, GameError> {
        Self::check_column(col)?;
        Ok((0..BOARD_HEIGHT)
            .rev()
            .find(|&row| !self.is_occupied(row, col)))
    }

    /// Put `player`'s piece at (row, col).
    ///
    /// The cell must be in bounds, empty, and the current landing row of its
    /// column. Returns false without touching the board otherwise.
    pub fn place(&mut self, row: u8, col: u8, player: Player) -> bool {
        let Some(idx) = Self::index(row, col) else {
            return false;
        };
        if self.cells[idx].is_some() {
            return false;
        }
        if row + 1 < BOARD_HEIGHT && !self.is_occupied(row + 1, col) {
            return false;
        }
        self.cells[idx] = Some(player);
        true
    }

    /// Check if the top cell of a column is taken.
    /// Out-of-range columns count as full.
    pub fn is_column_full(&self, col: u8) -> bool {
        col >= BOARD_WIDTH || self.is_occupied(0, col)
    }

    /// Number of pieces stacked in a column
    pub fn column_height(&self, col: u8) -> u8 {
        (0..BOARD_HEIGHT)
            .rev()
            .take_while(|&row| self.is_occupied(row, col))
            .count() as u8
    }

    /// Columns that can still accept a piece, ascending
    pub fn legal_columns(&self) -> ArrayVec<u8, { BOARD_WIDTH as usize }> {
        (0..BOARD_WIDTH)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// True iff every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Number of occupied cells
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Write cells as 0 (empty), 1 or 2 into a row-major grid
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (row, out_row) in out.iter_mut().enumerate() {
            let start = row * width;
            for (dst, cell) in out_row.iter_mut().zip(&self.cells[start..start + width]) {
                *dst = cell_to_u8(*cell);
            }
        }
    }

    /// Build a board from a row-major grid of 0/1/2 values.
    ///
    /// Returns `None` for unknown values or floating pieces (an occupied cell
    /// above an empty one).
    pub fn from_grid(grid: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) -> Option<Self> {
        let mut board = Self::new();
        for (row, values) in grid.iter().enumerate() {
            for (col, &v) in values.iter().enumerate() {
                let cell = match v {
                    0 => None,
                    id => Some(Player::from_id(id)?),
                };
                board.cells[row * BOARD_WIDTH as usize + col] = cell;
            }
        }
        board.is_settled().then_some(board)
    }

    /// Check the column contiguity invariant
    pub fn is_settled(&self) -> bool {
        (0..BOARD_WIDTH).all(|col| {
            let height = self.column_height(col);
            (0..BOARD_HEIGHT - height).all(|row| !self.is_occupied(row, col))
        })
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
