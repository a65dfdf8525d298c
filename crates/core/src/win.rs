//! Win detection - four-in-a-row scanning
//!
//! A candidate line is four consecutive cells starting at some (row, col) and
//! extending in one of four directions: right, down, down-right, down-left.
//! A line wins when all four cells are on the board and hold the same player.
//!
//! [`has_win`] is the exhaustive scan over every start cell and direction.
//! [`has_win_through`] only examines lines containing one cell; after a single
//! drop it gives the same answer at a fraction of the cost.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Player, BOARD_HEIGHT, BOARD_WIDTH, CONNECT_LEN};

/// Four (row, col) cells
pub type Line = [(u8, u8); CONNECT_LEN as usize];

/// Scan directions as (d_row, d_col): horizontal, vertical, diagonal down-right,
/// diagonal down-left
pub const DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Maximum number of in-bounds lines through one cell (4 directions x 4 offsets)
pub const MAX_LINES_THROUGH: usize = DIRECTIONS.len() * CONNECT_LEN as usize;

/// Build the line starting at (row, col) in direction (dr, dc).
/// Returns None if any cell falls off the grid.
fn line_from(row: i8, col: i8, dr: i8, dc: i8) -> Option<Line> {
    let mut line = [(0u8, 0u8); CONNECT_LEN as usize];
    for (k, slot) in line.iter_mut().enumerate() {
        let r = row + dr * k as i8;
        let c = col + dc * k as i8;
        if r < 0 || r >= BOARD_HEIGHT as i8 || c < 0 || c >= BOARD_WIDTH as i8 {
            return None;
        }
        *slot = (r as u8, c as u8);
    }
    Some(line)
}

/// True if all four cells of `line` hold `player`.
#[inline]
pub fn is_winning_line(board: &Board, line: &Line, player: Player) -> bool {
    line.iter()
        .all(|&(row, col)| board.get(row, col) == Some(Some(player)))
}

/// First winning line for `player`, scanning start cells top-left to
/// bottom-right and directions in [`DIRECTIONS`] order.
pub fn winning_line(board: &Board, player: Player) -> Option<Line> {
    for row in 0..BOARD_HEIGHT as i8 {
        for col in 0..BOARD_WIDTH as i8 {
            for &(dr, dc) in DIRECTIONS.iter() {
                if let Some(line) = line_from(row, col, dr, dc) {
                    if is_winning_line(board, &line, player) {
                        return Some(line);
                    }
                }
            }
        }
    }
    None
}

/// Does `player` have four in a row anywhere on the board?
pub fn has_win(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// Every in-bounds line that contains (row, col).
pub fn lines_through(row: u8, col: u8) -> ArrayVec<Line, MAX_LINES_THROUGH> {
    let mut out = ArrayVec::new();
    if row >= BOARD_HEIGHT || col >= BOARD_WIDTH {
        return out;
    }
    for &(dr, dc) in DIRECTIONS.iter() {
        for back in 0..CONNECT_LEN as i8 {
            let start_r = row as i8 - dr * back;
            let start_c = col as i8 - dc * back;
            if let Some(line) = line_from(start_r, start_c, dr, dc) {
                out.push(line);
            }
        }
    }
    out
}

/// First winning line for `player` that passes through (row, col).
pub fn winning_line_through(board: &Board, row: u8, col: u8, player: Player) -> Option<Line> {
    lines_through(row, col)
        .into_iter()
        .find(|line| is_winning_line(board, line, player))
}

/// Does a line through (row, col) win for `player`?
pub fn has_win_through(board: &Board, row: u8, col: u8, player: Player) -> bool {
    winning_line_through(board, row, col, player).is_some()
}
