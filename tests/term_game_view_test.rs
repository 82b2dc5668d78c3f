use tui_snake::core::{GameSnapshot, Session};
use tui_snake::term::{GameView, Rgb, Viewport, BLOCK_CHAR, EMPTY_CHAR};
use tui_snake::types::CellKind;

fn screen_text(fb: &tui_snake::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = Session::with_seed(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board = 20*2 by 20*1 => 40x20, plus border => 42x22
    let fb = view.render(&snap, Viewport::new(42, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(41, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(41, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_snake_and_food_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.started = true;
    // Snake at row 2 col 3, food at row 10 col 0.
    snap.cells[43] = CellKind::Snake;
    snap.cells[200] = CellKind::Food;

    let fb = GameView::default().render(&snap, Viewport::new(42, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (sx, sy) = (1 + 3 * 2, 1 + 2);
    for dx in 0..2 {
        let cell = fb.get(sx + dx, sy).unwrap();
        assert_eq!(cell.ch, BLOCK_CHAR);
        assert_eq!(cell.style.fg, Rgb::WHITE);
    }

    let food = fb.get(1, 1 + 10).unwrap();
    assert_eq!(food.ch, BLOCK_CHAR);
    assert_eq!(food.style.fg, Rgb::RED);

    assert_eq!(fb.get(1, 1).unwrap().ch, EMPTY_CHAR);
}

#[test]
fn term_view_prompts_before_start() {
    let snap = Session::with_seed(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(42, 22));
    assert!(screen_text(&fb).contains("PRESS ENTER"));
}

#[test]
fn term_view_flags_collision_and_game_over() {
    let mut snap = GameSnapshot::default();
    snap.started = true;
    snap.collided = true;
    let view = GameView::default();

    let fb = view.render(&snap, Viewport::new(42, 22));
    assert!(screen_text(&fb).contains("COLLISION"));

    snap.halted = true;
    let fb = view.render(&snap, Viewport::new(42, 22));
    let text = screen_text(&fb);
    assert!(text.contains("GAME OVER"));
    assert!(!text.contains("COLLISION"));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut session = Session::with_seed(1);
    session.start();
    session.tick();
    let snap = session.snapshot();

    let view = GameView::default();
    let narrow = screen_text(&view.render(&snap, Viewport::new(42, 22)));
    assert!(!narrow.contains("LENGTH"));

    let wide = screen_text(&view.render(&snap, Viewport::new(70, 22)));
    assert!(wide.contains("LENGTH"));
    assert!(wide.contains("HEADING"));
    assert!(wide.contains("down"));
}

#[test]
fn term_view_centers_board_on_large_viewports() {
    let snap = Session::with_seed(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(42, 30));

    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_skips_cells_that_left_the_board() {
    let mut session = Session::with_seed(1);
    session.start();
    session.steer(tui_snake::types::Direction::Left);
    session.tick(); // head moves from 0 to -1, off the board

    let snap = session.snapshot();
    assert_eq!(snap.head, Some(-1));
    assert!(snap.cells.iter().all(|c| *c != CellKind::Snake));

    // Rendering must still succeed.
    let fb = GameView::default().render(&snap, Viewport::new(42, 22));
    assert_eq!(fb.width(), 42);
}
