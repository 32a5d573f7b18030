use tui_2048::core::{GameState, Grid};
use tui_2048::term::{AnchorY, GameView, Viewport};
use tui_2048::types::Direction;

fn row_text(fb: &tui_2048::term::FrameBuffer, y: u16) -> String {
    (0..fb.width()).map(|x| fb.get(x, y).unwrap().ch).collect()
}

fn screen_text(fb: &tui_2048::term::FrameBuffer) -> String {
    (0..fb.height()).map(|y| row_text(fb, y)).collect::<Vec<_>>().join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 4 tiles * 7 columns + border = 30; 4 tiles * 3 rows + border = 14.
    let fb = view.render(&snap, Viewport::new(30, 14));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(29, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 13).unwrap().ch, '└');
    assert_eq!(fb.get(29, 13).unwrap().ch, '┘');
}

#[test]
fn term_view_centres_tile_value() {
    let grid = Grid::from_rows([[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let snap = GameState::from_grid(1, grid).unwrap().snapshot();

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(30, 16));

    // Board starts at y=1 (banner row above). First tile spans x=1..8, y=2..5;
    // the value sits on the middle row, centred in 7 columns.
    assert_eq!(&row_text(&fb, 3)[..], "│ 2048     ·      ·      ·   │");
}

#[test]
fn term_view_shows_win_banner_while_playing() {
    let grid = Grid::from_rows([[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let snap = GameState::from_grid(1, grid).unwrap().snapshot();
    assert!(snap.won && !snap.game_over);

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(30, 16));
    assert!(row_text(&fb, 0).contains("2048! keep going"));
}

#[test]
fn term_view_overlays_game_over() {
    let grid = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    let snap = GameState::from_grid(1, grid).unwrap().snapshot();
    assert!(snap.game_over);

    let fb = GameView::default().render(&snap, Viewport::new(30, 14));
    let text = screen_text(&fb);
    assert!(text.contains("GAME OVER"));
    assert!(!text.contains("YOU WIN!"));
}

#[test]
fn term_view_overlays_win_when_finished_with_2048() {
    let grid = Grid::from_rows([[2048, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    let snap = GameState::from_grid(1, grid).unwrap().snapshot();
    assert!(snap.finished_with_win());

    let fb = GameView::default().render(&snap, Viewport::new(30, 14));
    assert!(screen_text(&fb).contains("YOU WIN!"));
}

#[test]
fn term_view_side_panel_shows_score_and_gain() {
    let grid = Grid::from_rows([[8, 8, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let mut state = GameState::from_grid(1, grid).unwrap();
    assert!(state.move_tiles(Direction::Left).is_moved());

    let snap = state.snapshot();
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(60, 20));
    let text = screen_text(&fb);

    assert!(text.contains("SCORE"));
    assert!(text.contains("16 +16"));
    assert!(text.contains("BEST TILE"));
    assert!(text.contains("MOVES"));
}

#[test]
fn term_view_small_viewport_does_not_panic() {
    let mut state = GameState::new(5);
    state.start();
    let snap = state.snapshot();
    let view = GameView::default();
    for (w, h) in [(0, 0), (1, 1), (10, 5), (29, 13)] {
        let fb = view.render(&snap, Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}
