use connect_four::core::GameState;
use connect_four::term::{player_color, AnchorY, GameView, Viewport};
use connect_four::types::Player;

fn screen_text(fb: &connect_four::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new().snapshot();
    let view = GameView::new(2, 1).with_anchor_y(AnchorY::Top);

    // With cell_w=2 and cell_h=1 the frame is 7*2+2 by 6*1+2 => 16x8,
    // starting one row below the column labels.
    let fb = view.render(&snap, 3, Viewport::new(16, 9));

    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(15, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 8).unwrap().ch, '└');
    assert_eq!(fb.get(15, 8).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_pieces_in_player_colors() {
    let mut game = GameState::new();
    game.select_column(0).unwrap();
    game.select_column(1).unwrap();
    let snap = game.snapshot();

    let view = GameView::new(2, 1).with_anchor_y(AnchorY::Top);
    let vp = Viewport::new(16, 9);
    let fb = view.render(&snap, 3, vp);

    let (x0, y0) = view.cell_origin(vp, 5, 0);
    let p1 = fb.get(x0, y0).unwrap();
    assert_eq!(p1.ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(p1.style.fg, player_color(Player::One));

    let (x1, y1) = view.cell_origin(vp, 5, 1);
    assert_eq!(fb.get(x1, y1).unwrap().style.fg, player_color(Player::Two));

    let (xe, ye) = view.cell_origin(vp, 0, 0);
    assert_eq!(fb.get(xe, ye).unwrap().ch, '·');
}

#[test]
fn term_view_marks_cursor_column() {
    let snap = GameState::new().snapshot();
    let view = GameView::new(2, 1).with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, 4, Viewport::new(16, 9));

    let header = fb.row_text(0);
    assert!(header.contains('▼'));
    assert!(header.contains('1'));
    assert!(!header.contains('5'), "cursor replaces its column label");
    // Column 4 label sits at 1 + 4*2 + 1
    assert_eq!(fb.get(10, 0).unwrap().ch, '▼');
    assert_eq!(
        fb.get(10, 0).unwrap().style.fg,
        player_color(Player::One)
    );
}

#[test]
fn term_view_announces_winner() {
    let mut game = GameState::new();
    for col in [3, 0, 3, 0, 3, 1, 3] {
        game.select_column(col).unwrap();
    }
    let snap = game.snapshot();

    let view = GameView::default();
    let fb = view.render(&snap, 3, Viewport::new(80, 24));
    let text = screen_text(&fb);
    assert!(text.contains("Player 1 won!"));
    assert!(!text.contains('▼'), "no drop cursor once the game is over");
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let snap = GameState::new().snapshot();
    let view = GameView::default();

    let wide = screen_text(&view.render(&snap, 3, Viewport::new(80, 24)));
    assert!(wide.contains("TURN"));
    assert!(wide.contains("Player 1"));

    // Frame alone is 30 columns wide; no room for a panel
    let narrow = screen_text(&view.render(&snap, 3, Viewport::new(30, 24)));
    assert!(!narrow.contains("TURN"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameState::new().snapshot();
    let view = GameView::new(2, 1);

    // Labels + frame are 9 rows tall.
    let fb = view.render(&snap, 3, Viewport::new(16, 19));

    // header_y = (19 - 9) / 2 = 5 => frame corner at (0, 6).
    assert_eq!(fb.get(0, 6).unwrap().ch, '┌');
}
