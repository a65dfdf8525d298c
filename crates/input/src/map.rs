//! Key mapping from terminal events to board intents.

use crate::types::BOARD_WIDTH;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks for, before the cursor resolves it to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    CursorLeft,
    CursorRight,
    /// Drop into the column under the cursor
    DropAtCursor,
    /// Move the cursor to a zero-based column and drop there
    DropAt(u8),
    Restart,
}

/// Map keyboard input to key actions.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyAction> {
    match key.code {
        // Cursor
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(KeyAction::CursorLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(KeyAction::CursorRight),

        // Drop
        KeyCode::Enter
        | KeyCode::Down
        | KeyCode::Char(' ')
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(KeyAction::DropAtCursor),

        // Column shortcuts are one-based, like the labels above the board
        KeyCode::Char(c @ '1'..='9') => {
            let col = c as u8 - b'1';
            (col < BOARD_WIDTH).then_some(KeyAction::DropAt(col))
        }

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
