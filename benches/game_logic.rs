use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{shift, slide, GameState, Grid};
use tui_2048::types::Direction;

fn busy_grid() -> Grid {
    Grid::from_rows([[2, 2, 4, 8], [0, 4, 4, 0], [16, 0, 16, 2], [2, 2, 2, 2]])
}

fn bench_slide(c: &mut Criterion) {
    c.bench_function("slide_line", |b| {
        b.iter(|| slide(black_box([2, 2, 4, 4])))
    });
}

fn bench_shift(c: &mut Criterion) {
    let grid = busy_grid();
    c.bench_function("shift_all_directions", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                black_box(shift(black_box(&grid), dir));
            }
        })
    });
}

fn bench_terminal_check(c: &mut Criterion) {
    let grid = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    c.bench_function("has_available_moves_full", |b| {
        b.iter(|| black_box(&grid).has_available_moves())
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("play_to_game_over", |b| {
        b.iter(|| {
            let mut state = GameState::new(black_box(12345));
            state.start();
            while !state.game_over() {
                for dir in [Direction::Down, Direction::Left, Direction::Right, Direction::Up] {
                    if state.move_tiles(dir).is_moved() {
                        break;
                    }
                }
            }
            state.score()
        })
    });
}

criterion_group!(
    benches,
    bench_slide,
    bench_shift,
    bench_terminal_check,
    bench_full_game
);
criterion_main!(benches);
