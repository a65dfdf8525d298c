//! Column cursor: resolves key actions into game actions.
//!
//! The cursor plays the part of the clickable row above the board: it marks
//! the column the next drop goes into.

use crate::map::KeyAction;
use crate::types::{GameAction, BOARD_WIDTH};

/// Column under the cursor. Always in `0..BOARD_WIDTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnCursor {
    column: u8,
}

impl ColumnCursor {
    /// Start over the centre column
    pub fn new() -> Self {
        Self {
            column: BOARD_WIDTH / 2,
        }
    }

    pub fn column(&self) -> u8 {
        self.column
    }

    /// Move to `col`, clamped onto the board
    pub fn set(&mut self, col: u8) {
        self.column = col.min(BOARD_WIDTH - 1);
    }

    /// Move one column left, wrapping at the edge
    pub fn move_left(&mut self) {
        self.column = if self.column == 0 {
            BOARD_WIDTH - 1
        } else {
            self.column - 1
        };
    }

    /// Move one column right, wrapping at the edge
    pub fn move_right(&mut self) {
        self.column = (self.column + 1) % BOARD_WIDTH;
    }

    /// Apply a key action. Returns the game action it triggers, if any.
    pub fn apply(&mut self, action: KeyAction) -> Option<GameAction> {
        match action {
            KeyAction::CursorLeft => {
                self.move_left();
                None
            }
            KeyAction::CursorRight => {
                self.move_right();
                None
            }
            KeyAction::DropAtCursor => Some(GameAction::SelectColumn(self.column)),
            KeyAction::DropAt(col) => {
                self.set(col);
                Some(GameAction::SelectColumn(self.column))
            }
            KeyAction::Restart => Some(GameAction::Restart),
        }
    }
}

impl Default for ColumnCursor {
    fn default() -> Self {
        Self::new()
    }
}
