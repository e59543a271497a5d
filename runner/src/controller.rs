use engine::GameRng;
use engine::game::{Dimension, Direction, GameState, Point};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControllerKind {
    Random,
    Greedy,
}

pub fn pick_direction(kind: ControllerKind, state: &GameState, rng: &mut GameRng) -> Direction {
    match kind {
        ControllerKind::Random => random_safe_move(state, rng),
        ControllerKind::Greedy => greedy_food_chase(state, rng),
    }
}

fn greedy_food_chase(state: &GameState, rng: &mut GameRng) -> Direction {
    let head = state.snake.head_position;
    let mut best: Option<(Direction, usize)> = None;

    for direction in candidate_directions(state) {
        let next = state.board.step(head, direction);
        if !is_safe(state, next) {
            continue;
        }
        let distance = toroidal_manhattan(next, state.food_position, state.board);
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((direction, distance));
        }
    }

    match best {
        Some((direction, _)) => direction,
        None => random_safe_move(state, rng),
    }
}

fn random_safe_move(state: &GameState, rng: &mut GameRng) -> Direction {
    let head = state.snake.head_position;
    let safe: Vec<Direction> = candidate_directions(state)
        .into_iter()
        .filter(|&direction| is_safe(state, state.board.step(head, direction)))
        .collect();

    if safe.is_empty() {
        // Boxed in: keep the heading and let the engine call the collision.
        state.snake.last_direction()
    } else {
        safe[rng.random_range(0..safe.len())]
    }
}

fn candidate_directions(state: &GameState) -> Vec<Direction> {
    let current = state.snake.last_direction();
    Direction::ALL
        .into_iter()
        .filter(|direction| !direction.is_opposite(&current))
        .collect()
}

fn is_safe(state: &GameState, cell: Point) -> bool {
    !state.snake.occupies(cell, state.board)
}

fn toroidal_manhattan(a: Point, b: Point, board: Dimension) -> usize {
    let dx = a.x.abs_diff(b.x);
    let dy = a.y.abs_diff(b.y);
    dx.min(board.width - dx) + dy.min(board.height - dy)
}

#[cfg(test)]
mod tests {
    use engine::game::Snake;

    use super::*;

    // Head ends at (2,1) with body cells at (3,1), (3,2), (2,2), (1,2)
    // and (0,2), heading Left.
    fn hooked_state() -> GameState {
        let board = Dimension::new(5, 5);
        let mut snake = Snake::new(Point::new(0, 2));
        snake.size = 5;
        for direction in [
            Direction::Right,
            Direction::Right,
            Direction::Right,
            Direction::Up,
            Direction::Left,
        ] {
            snake.apply_move(direction, board);
        }

        GameState {
            snake,
            food_position: Point::new(0, 1),
            board,
            game_end_reason: None,
        }
    }

    #[test]
    fn test_toroidal_manhattan_wraps() {
        let board = Dimension::new(10, 10);
        assert_eq!(
            toroidal_manhattan(Point::new(0, 0), Point::new(9, 9), board),
            2
        );
        assert_eq!(
            toroidal_manhattan(Point::new(2, 3), Point::new(4, 3), board),
            2
        );
    }

    #[test]
    fn test_candidates_exclude_reversal() {
        let state = hooked_state();
        let candidates = candidate_directions(&state);

        assert!(!candidates.contains(&Direction::Right));
        assert_eq!(candidates.len(), 3);
    }

    #[test]
    fn test_random_move_avoids_body_cells() {
        let state = hooked_state();
        let mut rng = GameRng::new(42);

        // Down from (2,1) runs into the body cell at (2,2).
        for _ in 0..50 {
            let direction = random_safe_move(&state, &mut rng);
            assert_ne!(direction, Direction::Down);
            assert_ne!(direction, Direction::Right);
        }
    }

    #[test]
    fn test_greedy_moves_towards_food() {
        let state = hooked_state();
        let mut rng = GameRng::new(42);

        // Left lands next to the food at (0,1); Down is unsafe, Up is
        // farther away.
        assert_eq!(greedy_food_chase(&state, &mut rng), Direction::Left);
    }
}
