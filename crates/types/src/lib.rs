//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data, usable from core logic, terminal rendering and
//! event journaling alike.
//!
//! # Board Dimensions
//!
//! Standard Connect Four grid:
//!
//! - **Width**: 7 columns (indexed 0-6, left to right)
//! - **Height**: 6 rows (indexed 0-5, top to bottom)
//! - Pieces settle at row 5 first and stack upward
//!
//! # Examples
//!
//! ```
//! use connect_four_types::{GameStatus, Player, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Players alternate
//! assert_eq!(Player::One.other(), Player::Two);
//! assert_eq!(Player::Two.id(), 2);
//!
//! // Terminal announcements
//! assert_eq!(
//!     GameStatus::Won(Player::One).announcement().as_deref(),
//!     Some("Player 1 won!")
//! );
//!
//! assert_eq!(BOARD_WIDTH, 7);
//! assert_eq!(BOARD_HEIGHT, 6);
//! ```

use std::fmt;

use thiserror::Error;

/// Board width in cells (7 columns)
pub const BOARD_WIDTH: u8 = 7;

/// Board height in cells (6 rows)
pub const BOARD_HEIGHT: u8 = 6;

/// Number of connected pieces needed to win
pub const CONNECT_LEN: u8 = 4;

/// Total number of cells on the board
pub const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Input poll interval of the terminal front end (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// One of the two players.
///
/// Player one always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Numeric identifier (1 or 2)
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Inverse of [`Player::id`]
    ///
    /// ```
    /// use connect_four_types::Player;
    ///
    /// assert_eq!(Player::from_id(1), Some(Player::One));
    /// assert_eq!(Player::from_id(0), None);
    /// assert_eq!(Player::from_id(3), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// The opponent
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.id())
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Player)`: Cell holding that player's piece
pub type Cell = Option<Player>;

/// Encode a cell as 0 (empty), 1 or 2.
#[inline]
pub fn cell_to_u8(cell: Cell) -> u8 {
    cell.map_or(0, Player::id)
}

/// Lifecycle of a single game.
///
/// `Won` and `Tie` are terminal: no further moves are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tie,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(p) => Some(*p),
            _ => None,
        }
    }

    /// End-of-game message, `None` while the game is running.
    ///
    /// ```
    /// use connect_four_types::{GameStatus, Player};
    ///
    /// assert_eq!(GameStatus::Won(Player::Two).announcement().as_deref(), Some("Player 2 won!"));
    /// assert_eq!(GameStatus::Tie.announcement().as_deref(), Some("Tie!"));
    /// assert_eq!(GameStatus::InProgress.announcement(), None);
    /// ```
    pub fn announcement(&self) -> Option<String> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(p) => Some(format!("{} won!", p)),
            GameStatus::Tie => Some(String::from("Tie!")),
        }
    }

    /// Lowercase tag for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::InProgress => "in_progress",
            GameStatus::Won(_) => "won",
            GameStatus::Tie => "tie",
        }
    }
}

/// Actions that can be applied to a game.
///
/// Produced by the input layer and consumed by the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Drop a piece into the given zero-based column
    SelectColumn(u8),
    /// Discard the current game and start a fresh one
    Restart,
}

/// Renderer-facing event emitted by the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreEvent {
    /// A piece landed at (row, column)
    PiecePlaced { row: u8, column: u8, player: Player },
    /// The game reached a terminal status
    GameEnded { status: GameStatus },
}

/// Why a column selection changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    ColumnFull,
    GameOver,
}

/// A piece that was dropped successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: u8,
    pub column: u8,
    pub player: Player,
    /// Status right after this move
    pub status: GameStatus,
}

/// Outcome of a column selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Placed(Placement),
    Ignored(IgnoreReason),
}

impl MoveResult {
    pub fn placement(&self) -> Option<Placement> {
        match self {
            MoveResult::Placed(p) => Some(*p),
            MoveResult::Ignored(_) => None,
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, MoveResult::Ignored(_))
    }
}

/// Caller errors rejected by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Column index outside `0..BOARD_WIDTH`
    #[error("invalid column {column} (expected 0..{})", BOARD_WIDTH)]
    InvalidColumn { column: u8 },
}
