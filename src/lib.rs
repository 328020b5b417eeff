//! Countries - a console quiz: name as many countries as you can, against the clock
//!
//! This crate provides the country pool, the timed guessing round, scoring
//! and the persisted top 10, plus the console controller that ties them together.

// Core modules
pub mod config;
pub mod console;
pub mod constants;
pub mod error;
pub mod logging;
pub mod menu;

// Game logic modules
pub mod countries;
pub mod game;
pub mod leaderboard;
pub mod scoring;
pub mod session;

// Test support
pub mod testing;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use console::Console;
pub use countries::{Continent, CountrySet, CountrySource, FileCountrySource, GuessResult};
pub use error::{ConfigError, InputError, SessionError, SourceError, StoreError};
pub use game::GameController;
pub use leaderboard::{JsonLeaderboardStore, Leaderboard, LeaderboardStore, Score};
pub use menu::{ContinentOption, Language, MainMenuOption, MenuOption};
pub use scoring::ScoreRules;
pub use session::{GuessOutcome, GuessSession, RoundResult, SessionPhase};
