use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rookery::{Board, Game, Position, Team};

const BOARDS: [(&str, &str); 4] = [
    (
        "initial",
        "\
|r|n|b|q|k|b|n|r|
|p|p|p|p|p|p|p|p|
| | | | | | | | |
| | | | | | | | |
| | | | | | | | |
| | | | | | | | |
|P|P|P|P|P|P|P|P|
|R|N|B|Q|K|B|N|R|
",
    ),
    (
        "middlegame",
        "\
|r| | |q| |r|k| |
| |p| |n| |p|p|p|
|p| | |b| |n| | |
| | | |p| | |B| |
| | | |P| | | | |
| | |N| | |N| | |
|P|P| | |B|P|P|P|
|R| | |Q| |R|K| |
",
    ),
    (
        "queen_endgame",
        "\
| | | | | | |K| |
| | | | | | | | |
| | | | | | | | |
| |k| | | |q| | |
| | | |Q| | | | |
| | | | | | | | |
| | | | | | | | |
| | | | | | | | |
",
    ),
    (
        "promotion_race",
        "\
| | | | | | | | |
|P|P|P|P|P|P|P|P|
| | | | | | | | |
| | |k| |K| | | |
| | | | | | | | |
| | | | | | | | |
|p|p|p|p|p|p|p|p|
| | | | | | | | |
",
    ),
];

fn boards() -> impl Iterator<Item = (&'static str, Board)> {
    BOARDS
        .iter()
        .map(|&(name, text)| (name, text.parse().unwrap()))
}

fn bench_piece_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("piece_moves");
    for (name, board) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| {
                for pos in Position::iter() {
                    black_box(rookery::movegen::piece_moves(&board, pos).len());
                }
            })
        });
    }
}

fn bench_valid_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("valid_moves");
    for (name, board) in boards() {
        let game = Game::from_board(board);
        group.bench_function(name, |b| {
            b.iter(|| {
                for pos in Position::iter() {
                    black_box(game.valid_moves(pos).len());
                }
            })
        });
    }
}

fn bench_is_attacked(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_attacked");
    for (name, board) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| {
                for team in [Team::White, Team::Black] {
                    for pos in Position::iter() {
                        black_box(rookery::movegen::is_attacked(&board, pos, team));
                    }
                }
            })
        });
    }
}

fn bench_terminal_checks(c: &mut Criterion) {
    let mut group = c.benchmark_group("terminal_checks");
    for (name, board) in boards() {
        let game = Game::from_board(board);
        group.bench_function(name, |b| {
            b.iter(|| {
                for team in [Team::White, Team::Black] {
                    black_box(game.is_in_checkmate(team));
                    black_box(game.is_in_stalemate(team));
                }
            })
        });
    }
}

criterion_group!(
    movegen,
    bench_piece_moves,
    bench_valid_moves,
    bench_is_attacked,
    bench_terminal_checks,
);

criterion_main!(movegen);
