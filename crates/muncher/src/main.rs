//! Muncher: a maze-arcade demo driven by the collision registry
//!
//! The game loop here is deliberately thin. All gameplay rules live in
//! collision handlers (`interactions`); the board only detects overlaps and
//! hands them to the registry.

mod board;
mod config;
mod entities;
mod interactions;

use board::Board;
use config::{Config, GameConfig};
use interactions::{default_interactions, InteractionRules};

/// Default configuration file, loaded when present.
const CONFIG_PATH: &str = "muncher.toml";

fn main() {
    env_logger::init();

    let config = match GameConfig::load_from_file(CONFIG_PATH) {
        Ok(config) => {
            log::info!("Loaded configuration from {CONFIG_PATH}");
            config
        }
        Err(err) => {
            log::info!("Using default configuration ({err})");
            GameConfig::default()
        }
    };

    let rules = InteractionRules {
        ghost_points: config.gameplay.ghost_points,
        energize_ticks: config.gameplay.energize_ticks,
    };
    let registry = default_interactions(rules);
    log::info!(
        "Collision registry ready ({} type pairs)",
        registry.pair_count()
    );

    let mut rng = rand::thread_rng();
    let mut board = Board::new(&config.gameplay, &mut rng);
    log::info!(
        "Board {}x{}: {} pellets, {} ghosts",
        config.gameplay.board_width,
        config.gameplay.board_height,
        board.pellets_remaining(),
        board.ghosts_remaining()
    );

    let mut ticks = 0;
    while !board.is_over() && ticks < config.gameplay.max_ticks {
        board.tick(&registry, &mut rng);
        ticks += 1;
    }

    let player = board.player();
    if !player.is_alive() {
        log::info!("Game over after {ticks} ticks: the ghosts won");
    } else if board.pellets_remaining() == 0 {
        log::info!("Board cleared in {ticks} ticks");
    } else {
        log::info!("Stopped after {ticks} ticks");
    }
    log::info!(
        "Final score: {} ({} lives, {} ghosts left)",
        player.score(),
        player.lives(),
        board.ghosts_remaining()
    );
}
