//! Redraw policy for a mostly static screen.
//!
//! Connect Four only changes on input, so frames are drawn when their
//! fingerprint changes and otherwise at most once per interval (to repaint
//! after anything else scribbled on the terminal).

use crate::core::GameSnapshot;
use crate::game_view::Viewport;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// Renders the first frame, any frame whose fingerprint differs from the
    /// last rendered one, and otherwise once per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let due = !self.has_rendered
            || fingerprint != self.last_fingerprint
            || now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;
        if due {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        due
    }
}

/// Everything that influences what the view draws, folded into one value.
pub fn frame_fingerprint(snap: &GameSnapshot, cursor: u8, viewport: Viewport) -> u64 {
    const PRIME: u64 = 0x100000001b3;

    let status = match snap.status.winner() {
        Some(p) => p.id() as u64,
        None if snap.status.is_terminal() => 3,
        None => 0,
    };
    let parts = [
        status,
        snap.current_player.id() as u64,
        snap.move_count as u64,
        snap.game_id as u64,
        cursor as u64,
        viewport.width as u64,
        viewport.height as u64,
    ];
    parts
        .iter()
        .fold(snap.board_hash, |h, &v| (h ^ v).wrapping_mul(PRIME))
}
