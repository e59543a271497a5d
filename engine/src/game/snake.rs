use super::path::MovePath;
use super::types::{Dimension, Direction, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    pub head_position: Point,
    pub size: u32,
    path: MovePath,
}

impl Snake {
    pub fn new(head_position: Point) -> Self {
        Self {
            head_position,
            size: 1,
            path: MovePath::new(Direction::Up, 1),
        }
    }

    pub fn apply_move(&mut self, direction: Direction, board: Dimension) {
        self.head_position = board.step(self.head_position, direction);
        self.path.append_step(direction);
        self.path.resize_to(self.size);
    }

    // Walks the move history newest segment first, one cell per recorded
    // step, in the direction opposite to the move. Every visited cell is a
    // body cell; the head cell itself is never visited.
    pub fn occupies(&self, position: Point, board: Dimension) -> bool {
        let mut cursor = self.head_position;
        for segment in self.path.iter_recent_first() {
            let backward = segment.direction.opposite();
            for _ in 0..segment.amount {
                cursor = board.step(cursor, backward);
                if cursor == position {
                    return true;
                }
            }
        }
        false
    }

    pub fn body_cells(&self, board: Dimension) -> Vec<Point> {
        let mut cells = Vec::with_capacity(self.path.total_steps() as usize);
        let mut cursor = self.head_position;
        for segment in self.path.iter_recent_first() {
            let backward = segment.direction.opposite();
            for _ in 0..segment.amount {
                cursor = board.step(cursor, backward);
                cells.push(cursor);
            }
        }
        cells
    }

    pub fn last_direction(&self) -> Direction {
        self.path.last_direction()
    }

    pub fn path(&self) -> &MovePath {
        &self.path
    }
}
