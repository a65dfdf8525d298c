//! Win detection tests

use connect_four::core::{has_win, has_win_through, lines_through, winning_line, Board};
use connect_four::types::Player;

/// Build a board from text rows (top row first): `.` empty, `1`/`2` pieces.
fn board(rows: [&str; 6]) -> Board {
    let mut grid = [[0u8; 7]; 6];
    for (r, line) in rows.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            grid[r][c] = match ch {
                '1' => 1,
                '2' => 2,
                _ => 0,
            };
        }
    }
    Board::from_grid(grid).expect("pieces must be settled")
}

#[test]
fn horizontal_bottom_row_wins() {
    let b = board([
        ".......",
        ".......",
        ".......",
        ".......",
        ".......",
        "1111...",
    ]);
    assert!(has_win(&b, Player::One));
    assert!(!has_win(&b, Player::Two));
}

#[test]
fn horizontal_with_opponent_piece_does_not_win() {
    let b = board([
        ".......",
        ".......",
        ".......",
        ".......",
        ".......",
        "1121...",
    ]);
    assert!(!has_win(&b, Player::One));
    assert!(!has_win(&b, Player::Two));
}

#[test]
fn vertical_wins() {
    let b = board([
        ".......",
        ".......",
        "......2",
        "......2",
        "1.....2",
        "1.1...2",
    ]);
    assert!(has_win(&b, Player::Two));
    assert_eq!(
        winning_line(&b, Player::Two),
        Some([(2, 6), (3, 6), (4, 6), (5, 6)])
    );
}

#[test]
fn diagonal_down_right_wins() {
    let b = board([
        ".......",
        ".......",
        "1......",
        "21.....",
        "221....",
        "2121...",
    ]);
    assert!(has_win(&b, Player::One));
    assert!(!has_win(&b, Player::Two));
}

#[test]
fn diagonal_down_left_wins() {
    let b = board([
        ".......",
        ".......",
        "......2",
        ".....21",
        "....211",
        "...2112",
    ]);
    assert!(has_win(&b, Player::Two));
    assert!(!has_win(&b, Player::One));
}

#[test]
fn lines_do_not_wrap_across_edges() {
    // Three on the right edge of row 5 and one on the left of row 4 would be
    // four consecutive cells if the grid wrapped row-major.
    let b = board([
        ".......",
        ".......",
        ".......",
        ".......",
        "1......",
        "2..2111",
    ]);
    assert!(!has_win(&b, Player::One));

    // Three stacked at the top edge cannot continue off the board.
    let b = board([
        "1......",
        "1......",
        "1......",
        "2......",
        "2......",
        "1......",
    ]);
    assert!(!has_win(&b, Player::One));
}

#[test]
fn three_in_a_row_is_not_enough() {
    let b = board([
        ".......",
        ".......",
        ".......",
        ".......",
        ".......",
        ".111.22",
    ]);
    assert!(!has_win(&b, Player::One));
}

#[test]
fn incremental_check_matches_full_scan() {
    let b = board([
        ".......",
        ".......",
        "...1...",
        "..122..",
        ".1221..",
        "1212212",
    ]);
    assert!(has_win(&b, Player::One));
    // Every cell of the winning diagonal sees the win; an unrelated cell does not
    for (r, c) in [(5, 0), (4, 1), (3, 2), (2, 3)] {
        assert!(has_win_through(&b, r, c, Player::One));
    }
    assert!(!has_win_through(&b, 5, 6, Player::One));

    for row in 0..6 {
        for col in 0..7 {
            for line in lines_through(row, col) {
                assert!(line.contains(&(row, col)));
            }
        }
    }
}
