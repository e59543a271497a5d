mod game_state;
mod path;
mod snake;
mod types;

pub use game_state::GameState;
pub use path::{MovePath, Segment};
pub use snake::Snake;
pub use types::{Dimension, Direction, EndReason, Point, TickOutcome};
