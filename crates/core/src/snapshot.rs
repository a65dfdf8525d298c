use crate::types::{GameStatus, Player, BOARD_HEIGHT, BOARD_WIDTH};
use crate::win::Line;

/// Row-major grid of 0 (empty), 1 and 2
pub type U8Grid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Plain-data copy of a game, consumed by renderers and the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: U8Grid,
    /// FNV-1a 64 of `board`, row-major
    pub board_hash: u64,
    pub current_player: Player,
    pub status: GameStatus,
    pub game_id: u32,
    pub move_count: u32,
    pub last_move: Option<(u8, u8)>,
    pub winning_line: Option<Line>,
}

impl GameSnapshot {
    /// Stable 64-bit FNV-1a over the grid bytes.
    ///
    /// `DefaultHasher` output is not guaranteed stable across Rust versions.
    pub fn hash_board(board: &U8Grid) -> u64 {
        const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
        const PRIME: u64 = 0x100000001b3;

        let mut h = OFFSET_BASIS;
        for &b in board.iter().flatten() {
            h ^= b as u64;
            h = h.wrapping_mul(PRIME);
        }
        h
    }

    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.board_hash = Self::hash_board(&self.board);
        self.current_player = Player::One;
        self.status = GameStatus::InProgress;
        self.game_id = 0;
        self.move_count = 0;
        self.last_move = None;
        self.winning_line = None;
    }

    pub fn playable(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Whether (row, col) is part of the winning line
    pub fn is_winning_cell(&self, row: u8, col: u8) -> bool {
        self.winning_line
            .map_or(false, |line| line.contains(&(row, col)))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            board_hash: 0,
            current_player: Player::One,
            status: GameStatus::InProgress,
            game_id: 0,
            move_count: 0,
            last_move: None,
            winning_line: None,
        };
        s.clear();
        s
    }
}
