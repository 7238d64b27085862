use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_rust::board::Board;
use tictactoe_rust::config::Config;
use tictactoe_rust::search::choose_computer_move;
use tictactoe_rust::session::GameSession;

fn bench_single_move_empty_board() {
    let board = Board::new();
    black_box(choose_computer_move(black_box(&board)));
}

fn bench_single_move_after_opening() {
    let board = Board::parse("X.. ... ...").unwrap();
    black_box(choose_computer_move(black_box(&board)));
}

fn bench_full_game() {
    let mut session = GameSession::new(&Config::seeded(0));
    session.play_computer().unwrap();
    while session.is_active() {
        let cell = session.board().empty_cells().next().unwrap();
        session.play_player(cell).unwrap();
        if session.is_active() {
            session.play_computer().unwrap();
        }
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.sample_size(20);

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("single_move_after_opening", |b| {
        b.iter(bench_single_move_after_opening)
    });

    group.bench_function("full_game", |b| b.iter(bench_full_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
