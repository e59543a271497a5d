mod config;
mod controller;

use std::time::Duration;

use clap::Parser;
use engine::config::{ConfigManager, Validate};
use engine::game::{Dimension, GameState, TickOutcome};
use engine::{GameRng, log, logger};
use tokio::time::interval;

use config::RunnerConfig;
use controller::pick_direction;

#[derive(Parser)]
#[command(name = "torus_snake_runner")]
struct Args {
    #[arg(long, default_value = "runner.yaml")]
    config: String,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    ticks: Option<u64>,

    #[arg(long)]
    init_config: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let manager = ConfigManager::from_yaml_file(&args.config);

    if args.init_config {
        manager.save(&RunnerConfig::default())?;
        log!("Default configuration written to {}", args.config);
        return Ok(());
    }

    let mut config: RunnerConfig = manager.load()?;
    if let Some(ticks) = args.ticks {
        config.max_ticks = Some(ticks);
    }
    config.validate().map_err(|e| format!("Invalid run setup: {}", e))?;

    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_random(),
    };
    log!("Running with seed {}", rng.seed());

    let board = Dimension::new(config.board_width, config.board_height);
    let mut game = GameState::new(board, &mut rng);

    let mut timer = interval(Duration::from_millis(config.tick_interval_ms));
    let mut tick: u64 = 0;

    loop {
        tokio::select! {
            _ = timer.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                log!("Interrupted after {} ticks", tick);
                break;
            }
        }

        let direction = pick_direction(config.controller, &game, &mut rng);
        let outcome = game.advance(direction, &mut rng);
        tick += 1;
        log!(
            "Tick {}: {:?} {:?}, head at ({}, {})",
            tick,
            direction,
            outcome,
            game.snake.head_position.x,
            game.snake.head_position.y
        );

        if outcome == TickOutcome::Collided || game.has_ended() {
            break;
        }
        if let Some(max_ticks) = config.max_ticks
            && tick >= max_ticks
        {
            log!("Reached the tick limit of {}", max_ticks);
            break;
        }
    }

    match game.game_end_reason {
        Some(reason) => log!(
            "Game over after {} ticks: {:?}. Final size: {}",
            tick,
            reason,
            game.snake.size
        ),
        None => log!(
            "Stopped after {} ticks. Final size: {}",
            tick,
            game.snake.size
        ),
    }

    Ok(())
}
