//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`KeyAction`]s and resolves them against a
//! [`ColumnCursor`] into [`crate::types::GameAction`]s.

pub mod cursor;
pub mod map;

pub use connect_four_types as types;

pub use cursor::ColumnCursor;
pub use map::{handle_key_event, should_quit, KeyAction};
