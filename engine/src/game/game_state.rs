use crate::GameRng;
use crate::log;

use super::snake::Snake;
use super::types::{Dimension, Direction, EndReason, Point, TickOutcome};

const FOOD_SAMPLE_ATTEMPTS: usize = 100;

#[derive(Clone, Debug)]
pub struct GameState {
    pub snake: Snake,
    pub food_position: Point,
    pub board: Dimension,
    pub game_end_reason: Option<EndReason>,
}

impl GameState {
    pub fn new(board: Dimension, rng: &mut GameRng) -> Self {
        let head = random_cell(board, rng);
        let mut food = random_cell(board, rng);
        while food == head {
            food = random_cell(board, rng);
        }
        log!(
            "New game on {}x{}: head at ({}, {}), food at ({}, {})",
            board.width,
            board.height,
            head.x,
            head.y,
            food.x,
            food.y
        );

        Self {
            snake: Snake::new(head),
            food_position: food,
            board,
            game_end_reason: None,
        }
    }

    pub fn has_ended(&self) -> bool {
        self.game_end_reason.is_some()
    }

    pub fn advance(&mut self, direction: Direction, rng: &mut GameRng) -> TickOutcome {
        if self.has_ended() {
            return TickOutcome::AlreadyOver;
        }

        self.snake.apply_move(direction, self.board);

        if self.snake.occupies(self.snake.head_position, self.board) {
            self.game_end_reason = Some(EndReason::SelfCollision);
            log!(
                "Snake ran into itself at ({}, {})",
                self.snake.head_position.x,
                self.snake.head_position.y
            );
            return TickOutcome::Collided;
        }

        if self.snake.head_position == self.food_position {
            self.snake.size += 1;
            log!(
                "Ate food at ({}, {}). Size: {}",
                self.food_position.x,
                self.food_position.y,
                self.snake.size
            );
            self.place_food(rng);
            return TickOutcome::Ate;
        }

        TickOutcome::Moved
    }

    // Head first, then body cells from the head backwards.
    pub fn occupied_cells(&self) -> Vec<Point> {
        let mut cells = vec![self.snake.head_position];
        cells.extend(self.snake.body_cells(self.board));
        cells
    }

    fn place_food(&mut self, rng: &mut GameRng) {
        // Head and trail cells are pairwise distinct while the game is
        // active (a repeat inside the size window would already have been a
        // self-collision), so the occupied count is total_steps() + 1.
        let occupied = self.snake.path().total_steps() as usize + 1;
        if occupied >= self.board.area() {
            self.game_end_reason = Some(EndReason::BoardFull);
            log!("No free cell left for food, the board is full");
            return;
        }

        for _ in 0..FOOD_SAMPLE_ATTEMPTS {
            let candidate = random_cell(self.board, rng);
            if candidate != self.snake.head_position
                && !self.snake.occupies(candidate, self.board)
            {
                self.food_position = candidate;
                log!("Food placed at ({}, {})", candidate.x, candidate.y);
                return;
            }
        }

        // Dense board: draw from the enumerated free cells instead.
        let free = self.free_cells();
        let index = rng.random_range(0..free.len());
        self.food_position = free[index];
        log!(
            "Food placed at ({}, {})",
            self.food_position.x,
            self.food_position.y
        );
    }

    fn free_cells(&self) -> Vec<Point> {
        let body = self.snake.body_cells(self.board);
        let mut free = Vec::new();
        for y in 0..self.board.height {
            for x in 0..self.board.width {
                let cell = Point::new(x, y);
                if cell != self.snake.head_position && !body.contains(&cell) {
                    free.push(cell);
                }
            }
        }
        free
    }
}

fn random_cell(board: Dimension, rng: &mut GameRng) -> Point {
    Point::new(
        rng.random_range(0..board.width),
        rng.random_range(0..board.height),
    )
}
