//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: one header row with the column labels and the drop
//! cursor, then the bordered grid. A side panel to the right shows whose turn
//! it is and the key bindings when the viewport is wide enough.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, Player, BOARD_HEIGHT, BOARD_WIDTH};

const BOARD_BG: Rgb = Rgb::new(20, 40, 110);
const WIN_BG: Rgb = Rgb::new(230, 230, 230);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Glyph used for pieces.
pub const PIECE_CHAR: char = '█';
/// Glyph used for empty slots.
pub const EMPTY_CHAR: char = '·';
/// Glyph drawn above the cursor column.
pub const CURSOR_CHAR: char = '▼';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Piece color for a player.
pub fn player_color(player: Player) -> Rgb {
    match player {
        Player::One => Rgb::new(220, 60, 60),
        Player::Two => Rgb::new(240, 210, 60),
    }
}

/// Terminal-space origin of the board frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    /// Left edge of the frame border
    x: u16,
    /// Row of the column labels; the frame border starts one row below
    header_y: u16,
    frame_w: u16,
    frame_h: u16,
}

/// A lightweight terminal renderer for the Connect Four board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 keeps pieces roughly round on typical terminal glyph ratios.
        Self::new(4, 2)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let frame_h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let total_h = frame_h + 1;
        let header_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };
        Layout {
            x: viewport.width.saturating_sub(frame_w) / 2,
            header_y,
            frame_w,
            frame_h,
        }
    }

    /// Terminal position of the top-left character of board cell (row, col).
    pub fn cell_origin(&self, viewport: Viewport, row: u8, col: u8) -> (u16, u16) {
        let l = self.layout(viewport);
        (
            l.x + 1 + (col as u16) * self.cell_w,
            l.header_y + 2 + (row as u16) * self.cell_h,
        )
    }

    /// Render the game into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: u8,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let l = self.layout(viewport);
        let frame_y = l.header_y + 1;

        self.draw_header(fb, snap, cursor, l);

        let bg = CellStyle::new(Rgb::new(90, 100, 140), BOARD_BG);
        fb.fill_rect(l.x + 1, frame_y + 1, l.frame_w - 2, l.frame_h - 2, ' ', bg);
        self.draw_border(fb, l.x, frame_y, l.frame_w, l.frame_h);

        for row in 0..BOARD_HEIGHT {
            for col in 0..BOARD_WIDTH {
                let (px, py) = self.cell_origin(viewport, row, col);
                match Player::from_id(snap.board[row as usize][col as usize]) {
                    Some(player) => {
                        let highlight = snap.is_winning_cell(row, col);
                        let last = snap.last_move == Some((row, col));
                        self.draw_piece(fb, px, py, player, highlight, last);
                    }
                    None => self.draw_empty(fb, px, py),
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, l);

        if let Some(msg) = snap.status.announcement() {
            self.draw_overlay_text(fb, l, &msg);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, cursor: u8, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, cursor: u8, l: Layout) {
        let label = CellStyle::new(Rgb::new(150, 150, 150), PANEL_BG).dim();
        for col in 0..BOARD_WIDTH {
            let x = l.x + 1 + (col as u16) * self.cell_w + self.cell_w / 2;
            if col == cursor && snap.playable() {
                let style = CellStyle::new(player_color(snap.current_player), PANEL_BG).bold();
                fb.put_char(x, l.header_y, CURSOR_CHAR, style);
            } else {
                fb.put_char(x, l.header_y, (b'1' + col) as char, label);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, px: u16, py: u16) {
        let style = CellStyle::new(Rgb::new(90, 110, 170), BOARD_BG).dim();
        fb.put_char(
            px + (self.piece_w() - 1) / 2,
            py + (self.cell_h - 1) / 2,
            EMPTY_CHAR,
            style,
        );
    }

    fn draw_piece(
        &self,
        fb: &mut FrameBuffer,
        px: u16,
        py: u16,
        player: Player,
        highlight: bool,
        last: bool,
    ) {
        let mut style = CellStyle::new(player_color(player), BOARD_BG);
        if highlight {
            style.bg = WIN_BG;
        }
        if last || highlight {
            style = style.bold();
        }
        fb.fill_rect(px, py, self.piece_w(), self.cell_h, PIECE_CHAR, style);
    }

    /// Leave a one-column gap between pieces when cells are wide enough.
    fn piece_w(&self) -> u16 {
        if self.cell_w > 2 {
            self.cell_w - 1
        } else {
            self.cell_w
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        l: Layout,
    ) {
        let panel_x = l.x.saturating_add(l.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 14 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let help = value.dim();

        let mut y = l.header_y;
        fb.put_str(panel_x, y, "CONNECT FOUR", label);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TURN", label);
        y = y.saturating_add(1);
        match snap.status {
            GameStatus::InProgress => {
                let style = CellStyle::new(player_color(snap.current_player), PANEL_BG).bold();
                fb.put_char(panel_x, y, PIECE_CHAR, style);
                fb.put_str(panel_x + 2, y, "Player ", value);
                fb.put_u32(panel_x + 9, y, snap.current_player.id() as u32, value);
            }
            _ => fb.put_str(panel_x, y, "-", value),
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.move_count, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "GAME", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.game_id.saturating_add(1), value);
        y = y.saturating_add(2);

        for line in ["<- -> move", "enter  drop", "1-7  column", "r  restart", "q  quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, l: Layout, text: &str) {
        let mid_y = l.header_y + 1 + l.frame_h / 2;
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let hint_style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        self.put_centered(fb, l, mid_y, &format!(" {} ", text), style);
        self.put_centered(fb, l, mid_y + 1, " r: new game ", hint_style);
    }

    fn put_centered(&self, fb: &mut FrameBuffer, l: Layout, y: u16, text: &str, style: CellStyle) {
        let text_w = text.chars().count() as u16;
        let x = l.x.saturating_add(l.frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}
