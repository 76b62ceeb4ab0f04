use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pocket_tetris::core::{spawn_shape, Board, Command, Match, SimpleRng};
use pocket_tetris::term::{GameView, Viewport};
use pocket_tetris::types::PieceKind;

fn bench_overlaps(c: &mut Criterion) {
    let board = Board::from_rows(&["#.#.#.#.#.", "##########", ".#.#.#.#.#"]);
    let shape = spawn_shape(PieceKind::T);

    c.bench_function("overlaps", |b| {
        b.iter(|| board.overlaps(black_box(shape), black_box((4, 3)), 0, -1))
    });
}

fn bench_clear_rows(c: &mut Criterion) {
    c.bench_function("mark_and_compact_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 0..6 {
                for x in 0..10 {
                    board.set(x, y, y % 3 != 2 || x == 0);
                }
            }
            board.mark_completed_rows();
            board.compact();
            black_box(board.occupied_count())
        })
    });
}

fn bench_drop_piece(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("spawn_and_drop", |b| {
        b.iter(|| {
            let mut game = Match::new(400);
            game.spawn(rng.next_kind());
            while game.apply(Command::Fall) != pocket_tetris::core::TickOutcome::Landed {}
            black_box(game.pieces_placed())
        })
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let view = GameView::default();
    let mut game = Match::new(400);
    game.spawn(PieceKind::L);
    let vp = Viewport::new(80, 30);
    let mut fb = pocket_tetris::term::FrameBuffer::new(80, 30);

    c.bench_function("render_frame_into", |b| {
        b.iter(|| {
            view.render_frame_into(
                game.board(),
                game.board().completed(),
                game.active(),
                black_box(vp),
                &mut fb,
            )
        })
    });
}

criterion_group!(
    benches,
    bench_overlaps,
    bench_clear_rows,
    bench_drop_piece,
    bench_render_frame
);
criterion_main!(benches);
