//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the Connect Four rules: the board model, win
//! detection, and the turn/board state machine. It has **zero dependencies**
//! on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: The same column sequence always produces the same game
//! - **Testable**: Every rule is covered without a rendering surface
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: No allocation on the move path
//!
//! # Module Structure
//!
//! - [`board`]: 7x6 grid with landing-row lookup and gravity-checked placement
//! - [`win`]: four-in-a-row detection (full scan and through-one-cell)
//! - [`game_state`]: active player, move application, win/tie transitions
//! - [`snapshot`]: plain-data copy of a game for renderers
//!
//! # Example
//!
//! ```
//! use connect_four_core::GameState;
//! use connect_four_types::{GameStatus, Player};
//!
//! let mut game = GameState::new();
//!
//! // Player one stacks column 3 while player two plays column 0
//! for col in [3, 0, 3, 0, 3, 0, 3] {
//!     game.select_column(col).unwrap();
//! }
//!
//! assert_eq!(game.status(), GameStatus::Won(Player::One));
//! assert_eq!(game.status().announcement().as_deref(), Some("Player 1 won!"));
//! ```

pub mod board;
pub mod game_state;
pub mod snapshot;
pub mod win;

pub use connect_four_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use snapshot::{GameSnapshot, U8Grid};
pub use win::{has_win, has_win_through, lines_through, winning_line, winning_line_through, Line};
