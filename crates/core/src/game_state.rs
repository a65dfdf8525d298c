//! Game state module - the turn/board state machine
//!
//! Owns the board and the active player. Each column selection is processed
//! to completion: landing-row lookup, placement, win check, tie check, turn
//! toggle. `Won` and `Tie` are terminal and later selections are ignored.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::snapshot::GameSnapshot;
use crate::types::*;
use crate::win::{winning_line_through, Line};

/// Upper bound on undrained events: every placement of one game plus its end
pub const MAX_PENDING_EVENTS: usize = BOARD_SIZE + 1;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Player,
    status: GameStatus,
    /// Monotonic game id (increments on restart).
    game_id: u32,
    /// Pieces placed in this game.
    move_count: u32,
    last_move: Option<(u8, u8)>,
    winning_line: Option<Line>,
    /// Events since the last `take_events`, oldest first.
    events: ArrayVec<CoreEvent, MAX_PENDING_EVENTS>,
}

impl GameState {
    /// Create a new game: empty board, player one to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::One,
            status: GameStatus::InProgress,
            game_id: 0,
            move_count: 0,
            last_move: None,
            winning_line: None,
            events: ArrayVec::new(),
        }
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn last_move(&self) -> Option<(u8, u8)> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell contents at (row, col), None if out of bounds
    pub fn get(&self, row: u8, col: u8) -> Option<Cell> {
        self.board.get(row, col)
    }

    /// Where a piece dropped into `col` would land
    pub fn landing_row(&self, col: u8) -> Result<Option<u8>, GameError> {
        self.board.landing_row(col)
    }

    /// Drop the active player's piece into `col`.
    ///
    /// Out-of-range columns are an error. A full column or a finished game
    /// leaves everything untouched and reports why.
    pub fn select_column(&mut self, col: u8) -> Result<MoveResult, GameError> {
        let landing = self.board.landing_row(col)?;

        if self.status.is_terminal() {
            return Ok(MoveResult::Ignored(IgnoreReason::GameOver));
        }
        let Some(row) = landing else {
            return Ok(MoveResult::Ignored(IgnoreReason::ColumnFull));
        };

        let player = self.current;
        let placed = self.board.place(row, col, player);
        debug_assert!(placed, "landing row must accept a piece");

        self.move_count += 1;
        self.last_move = Some((row, col));
        self.events.push(CoreEvent::PiecePlaced {
            row,
            column: col,
            player,
        });

        if let Some(line) = winning_line_through(&self.board, row, col, player) {
            self.winning_line = Some(line);
            self.status = GameStatus::Won(player);
        } else if self.board.is_full() {
            self.status = GameStatus::Tie;
        } else {
            self.current = player.other();
        }

        if self.status.is_terminal() {
            self.events.push(CoreEvent::GameEnded {
                status: self.status,
            });
        }

        Ok(MoveResult::Placed(Placement {
            row,
            column: col,
            player,
            status: self.status,
        }))
    }

    /// Take and clear every event since the previous call.
    ///
    /// Ignored selections add nothing, so a drain after one only returns
    /// what was still pending.
    pub fn take_events(&mut self) -> ArrayVec<CoreEvent, MAX_PENDING_EVENTS> {
        std::mem::take(&mut self.events)
    }

    /// Start over with an empty board. Keeps counting game ids.
    ///
    /// Undrained events of the old game are discarded.
    pub fn restart(&mut self) {
        let next_game = self.game_id.wrapping_add(1);
        *self = Self::new();
        self.game_id = next_game;
    }

    /// Apply a game action
    ///
    /// Returns whether the game changed.
    pub fn apply_action(&mut self, action: GameAction) -> Result<bool, GameError> {
        match action {
            GameAction::SelectColumn(col) => Ok(!self.select_column(col)?.is_ignored()),
            GameAction::Restart => {
                self.restart();
                Ok(true)
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.board_hash = GameSnapshot::hash_board(&out.board);
        out.current_player = self.current;
        out.status = self.status;
        out.game_id = self.game_id;
        out.move_count = self.move_count;
        out.last_move = self.last_move;
        out.winning_line = self.winning_line;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut GameState, cols: &[u8]) {
        for &col in cols {
            let result = state.select_column(col).unwrap();
            assert!(!result.is_ignored(), "column {} was ignored", col);
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new();

        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.game_id(), 0);
        assert!(state.last_move().is_none());
        assert!(state.winning_line().is_none());
        assert_eq!(state.board(), &Board::new());
    }

    #[test]
    fn test_select_column_places_and_toggles() {
        let mut state = GameState::new();

        let result = state.select_column(3).unwrap();
        assert_eq!(
            result,
            MoveResult::Placed(Placement {
                row: 5,
                column: 3,
                player: Player::One,
                status: GameStatus::InProgress,
            })
        );
        assert_eq!(state.get(5, 3), Some(Some(Player::One)));
        assert_eq!(state.current_player(), Player::Two);
        assert_eq!(state.landing_row(3), Ok(Some(4)));
        assert_eq!(state.last_move(), Some((5, 3)));

        state.select_column(3).unwrap();
        assert_eq!(state.get(4, 3), Some(Some(Player::Two)));
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.move_count(), 2);
    }

    #[test]
    fn test_invalid_column_is_error() {
        let mut state = GameState::new();
        assert_eq!(
            state.select_column(7),
            Err(GameError::InvalidColumn { column: 7 })
        );
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.current_player(), Player::One);
    }

    #[test]
    fn test_full_column_is_ignored() {
        let mut state = GameState::new();
        play(&mut state, &[0, 0, 0, 0, 0, 0]);
        state.take_events();
        let before = state.board().clone();
        let player = state.current_player();

        assert_eq!(
            state.select_column(0),
            Ok(MoveResult::Ignored(IgnoreReason::ColumnFull))
        );
        assert_eq!(state.board(), &before);
        assert_eq!(state.current_player(), player);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_win_ends_game_and_blocks_moves() {
        let mut state = GameState::new();
        // Player one stacks column 3; player two answers in columns 0 and 1
        play(&mut state, &[3, 0, 3, 0, 3, 1]);
        state.take_events();
        let last = state.select_column(3).unwrap();

        assert_eq!(last.placement().unwrap().status, GameStatus::Won(Player::One));
        assert_eq!(state.status(), GameStatus::Won(Player::One));
        // Winner stays the active player
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(
            state.winning_line(),
            Some([(2, 3), (3, 3), (4, 3), (5, 3)])
        );

        let events = state.take_events();
        assert_eq!(
            events.as_slice(),
            &[
                CoreEvent::PiecePlaced {
                    row: 2,
                    column: 3,
                    player: Player::One
                },
                CoreEvent::GameEnded {
                    status: GameStatus::Won(Player::One)
                },
            ]
        );

        assert_eq!(
            state.select_column(4),
            Ok(MoveResult::Ignored(IgnoreReason::GameOver))
        );
        assert_eq!(state.move_count(), 7);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_take_events_drains() {
        let mut state = GameState::new();
        state.select_column(2).unwrap();
        assert_eq!(state.take_events().len(), 1);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_undrained_events_accumulate_in_order() {
        let mut state = GameState::new();
        state.select_column(0).unwrap();
        state.select_column(1).unwrap();

        assert_eq!(
            state.take_events().as_slice(),
            &[
                CoreEvent::PiecePlaced {
                    row: 5,
                    column: 0,
                    player: Player::One
                },
                CoreEvent::PiecePlaced {
                    row: 5,
                    column: 1,
                    player: Player::Two
                },
            ]
        );
    }

    #[test]
    fn test_ignored_move_does_not_replay_drained_events() {
        let mut state = GameState::new();
        play(&mut state, &[1, 1, 1, 1, 1, 1]);
        assert_eq!(state.take_events().len(), 6);

        assert_eq!(
            state.select_column(1),
            Ok(MoveResult::Ignored(IgnoreReason::ColumnFull))
        );
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_whole_game_fits_event_queue() {
        // Fill columns left to right without draining until the game ends
        let mut state = GameState::new();
        let mut moves = 0;
        for col in 0..BOARD_WIDTH {
            while state.landing_row(col) != Ok(None) && !state.is_terminal() {
                state.select_column(col).unwrap();
                moves += 1;
            }
        }
        let events = state.take_events();
        assert_eq!(events.len(), moves + usize::from(state.is_terminal()));
        assert!(events.len() <= MAX_PENDING_EVENTS);
    }

    #[test]
    fn test_restart_increments_game_id() {
        let mut state = GameState::new();
        play(&mut state, &[1, 2, 3]);
        assert_eq!(state.apply_action(GameAction::Restart), Ok(true));

        assert_eq!(state.game_id(), 1);
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.board().piece_count(), 0);
    }

    #[test]
    fn test_apply_action_reports_change() {
        let mut state = GameState::new();
        assert_eq!(state.apply_action(GameAction::SelectColumn(6)), Ok(true));
        play(&mut state, &[6, 6, 6, 6, 6]);
        assert_eq!(state.apply_action(GameAction::SelectColumn(6)), Ok(false));
        assert!(state.apply_action(GameAction::SelectColumn(9)).is_err());
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new();
        play(&mut state, &[4, 4]);
        let snap = state.snapshot();

        assert_eq!(snap.board[5][4], 1);
        assert_eq!(snap.board[4][4], 2);
        assert_eq!(snap.current_player, Player::One);
        assert_eq!(snap.move_count, 2);
        assert_eq!(snap.last_move, Some((4, 4)));
        assert_eq!(snap.board_hash, GameSnapshot::hash_board(&snap.board));
        assert!(snap.playable());
    }
}
