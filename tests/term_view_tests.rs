use pocket_tetris::core::{ActivePiece, Board, Match};
use pocket_tetris::term::{encode_diff_into, encode_full_into, GameView, Ink, Prompt, Viewport};
use pocket_tetris::types::{PieceKind, Rotation};

fn vp() -> Viewport {
    Viewport::new(22, 27)
}

#[test]
fn term_view_renders_border_corners() {
    let view = GameView::default();
    let board = Board::new();
    let fb = view.render_frame(&board, board.completed(), None, vp());

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 26).unwrap().ch, '└');
    assert_eq!(fb.get(21, 26).unwrap().ch, '┘');
}

#[test]
fn term_view_centres_the_well_in_a_larger_viewport() {
    let view = GameView::default();
    let board = Board::new();
    let fb = view.render_frame(&board, board.completed(), None, Viewport::new(42, 31));

    assert_eq!(view.frame_size(), (22, 27));
    assert_eq!(fb.get(10, 2).unwrap().ch, '┌');
    assert_eq!(fb.get(31, 28).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let view = GameView::default();
    let mut board = Board::new();
    board.set(0, 0, true);
    let fb = view.render_frame(&board, board.completed(), None, vp());

    let a = fb.get(1, 25).unwrap();
    let b = fb.get(2, 25).unwrap();
    assert_eq!((a.ch, a.ink), ('█', Ink::On));
    assert_eq!((b.ch, b.ink), ('█', Ink::On));
    assert_eq!(fb.get(3, 25).unwrap().ch, ' ');
}

#[test]
fn term_view_guides_stop_on_the_stack() {
    let view = GameView::default();
    let mut board = Board::new();
    // Stack under the left half of a spawned O.
    board.set(4, 5, true);
    let piece = ActivePiece::new(PieceKind::O);
    let fb = view.render_frame(&board, board.completed(), Some(&piece), vp());

    let guide_rows: Vec<u16> = (0..27)
        .filter(|&y| {
            let c = fb.get(9, y).unwrap();
            c.ch == '│' && c.ink == Ink::Dim
        })
        .collect();
    // Board rows 22..=6 map to terminal rows 3..=19; row 5 is the solid block.
    assert_eq!(guide_rows, (3..=19).collect::<Vec<_>>());
    assert_eq!(fb.get(9, 20).unwrap().ch, '█');
}

#[test]
fn term_view_has_no_guides_for_a_piece_on_the_floor() {
    let view = GameView::default();
    let board = Board::new();
    let mut game = Match::with_board(board, 400);
    game.spawn(PieceKind::I);
    while game.move_piece(0, -1) {}
    let piece = *game.active().unwrap();
    assert_eq!(piece.rotation, Rotation::North);

    let fb = view.render_frame(game.board(), game.board().completed(), Some(&piece), vp());
    assert!(fb.cells().iter().all(|c| c.ink != Ink::Dim));
}

#[test]
fn term_view_renders_both_prompts() {
    let view = GameView::default();
    let coins = view.render_prompt(Prompt::InsertCoins, vp());
    let over = view.render_prompt(Prompt::GameOver, vp());

    let text = |fb: &pocket_tetris::term::FrameBuffer| -> String {
        (0..fb.height()).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n")
    };
    assert!(text(&coins).contains("INSERT"));
    assert!(text(&coins).contains("COINS"));
    assert!(text(&over).contains("GAME"));
    assert!(text(&over).contains("OVER"));
    assert!(!text(&over).contains("INSERT"));
}

#[test]
fn diff_of_one_new_cell_is_smaller_than_a_full_redraw() {
    let view = GameView::default();
    let mut board = Board::new();
    let before = view.render_frame(&board, board.completed(), None, vp());
    board.set(3, 0, true);
    let after = view.render_frame(&board, board.completed(), None, vp());

    let mut full = Vec::new();
    encode_full_into(&after, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    assert!(!diff.is_empty());
    assert!(diff.len() < full.len() / 4);
}

#[test]
fn diff_after_one_shift_never_exceeds_a_full_redraw() {
    let view = GameView::default();
    let mut game = Match::new(400);
    game.spawn(PieceKind::T);
    let before = view.render_frame(game.board(), game.board().completed(), game.active(), vp());
    game.move_piece(-1, 0);
    let after = view.render_frame(game.board(), game.board().completed(), game.active(), vp());

    let mut full = Vec::new();
    encode_full_into(&after, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    assert!(!diff.is_empty());
    assert!(diff.len() < full.len());
}
