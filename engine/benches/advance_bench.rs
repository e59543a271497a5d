use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use engine::GameRng;
use engine::game::{Dimension, Direction, GameState, Point, Snake};

fn build_long_snake(length: u32, board: Dimension) -> Snake {
    let mut snake = Snake::new(Point::new(0, 0));
    snake.size = length;
    // Boustrophedon sweep: the trail never intersects itself while it is
    // shorter than the board area.
    for y in 0..board.height {
        let horizontal = if y % 2 == 0 {
            Direction::Right
        } else {
            Direction::Left
        };
        for _ in 0..board.width - 1 {
            snake.apply_move(horizontal, board);
        }
        snake.apply_move(Direction::Down, board);
    }
    snake
}

fn sweep_board(game: &mut GameState, rng: &mut GameRng) {
    for y in 0..game.board.height {
        let horizontal = if y % 2 == 0 {
            Direction::Right
        } else {
            Direction::Left
        };
        for _ in 0..game.board.width - 1 {
            game.advance(horizontal, rng);
        }
        game.advance(Direction::Down, rng);
    }
}

fn advance_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    group.sample_size(20);

    let board = Dimension::new(50, 50);
    let snake = build_long_snake(2000, board);
    let probe = Point::new(1, 0);

    group.bench_function("occupies_long_snake_miss", |b| {
        b.iter(|| black_box(snake.occupies(black_box(probe), board)))
    });

    group.bench_function("body_cells_long_snake", |b| {
        b.iter(|| black_box(snake.body_cells(board)))
    });

    group.bench_function("board_sweep_900_ticks", |b| {
        b.iter(|| {
            let mut rng = GameRng::new(42);
            let mut game = GameState::new(Dimension::new(30, 30), &mut rng);
            sweep_board(&mut game, &mut rng);
            black_box(game.snake.size)
        })
    });

    group.finish();
}

criterion_group!(benches, advance_bench);
criterion_main!(benches);
