//! Countries - console geography quiz
//!
//! Main entry point: configuration, logging, and the menu loop.

use countries::constants::CONFIG_FILE;
use countries::{
    Console, FileCountrySource, GameConfig, GameController, InputError, JsonLeaderboardStore,
    logging,
};
use std::path::Path;
use tracing::{error, info, warn};

fn main() {
    let (config, config_error) = GameConfig::load();
    logging::init(&config);
    match config_error {
        Some(e) => warn!("{}, using defaults", e),
        None if Path::new(CONFIG_FILE).exists() => {
            info!("Loaded configuration from {}", CONFIG_FILE)
        }
        None => info!("No {} found, using defaults", CONFIG_FILE),
    }
    info!(
        "Starting with data dir {}, scoreboard {}",
        config.data_dir.display(),
        config.leaderboard_path.display()
    );

    let source = FileCountrySource::new(&config.data_dir);
    let store = JsonLeaderboardStore::new(&config.leaderboard_path);

    let result = GameController::new(Console::stdio(), source, store, config.scoring)
        .and_then(|mut game| game.run());

    match result {
        Ok(()) | Err(InputError::Closed) => info!("Bye"),
        Err(e) => {
            // Console itself failed; nothing left to prompt on
            error!("{}", e);
            eprintln!("{}", e);
        }
    }
}
