pub mod config;
pub mod game;
pub mod logger;

mod game_rng;

pub use game_rng::GameRng;
