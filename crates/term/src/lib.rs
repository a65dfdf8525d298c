//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout frameworks and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Only observe game state; all moves go through `core::GameState`
//! - Allow precise control over aspect ratio (e.g. 4 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use connect_four_core as core;
pub use connect_four_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{player_color, AnchorY, GameView, Viewport};
pub use render_throttle::{frame_fingerprint, RenderThrottle};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
