//! Tunable constants for the countries quiz
//!
//! File locations, input sentinels and scoring defaults live here.

// =============================================================================
// APPLICATION
// =============================================================================

pub const APP_NAME: &str = "CountriesGuesser v2.0";

// =============================================================================
// GUESSING INPUT
// =============================================================================

/// Input that ends the round early (compared after uppercasing)
pub const GIVE_UP: &str = "Q";
/// Input that prints the countries guessed so far
pub const PRINT_GUESSED: &str = "P";

// =============================================================================
// SCORING
// =============================================================================

pub const DEFAULT_POINTS_PER_COUNTRY: u64 = 1000; // K: points per correct guess
pub const DEFAULT_MILLIS_PER_POINT: u64 = 100; // D: one point lost per this many ms

// =============================================================================
// LEADERBOARD
// =============================================================================

pub const LEADERBOARD_CAPACITY: usize = 10;
/// Format tag written into the leaderboard file
pub const LEADERBOARD_FORMAT: &str = "countries-leaderboard";
pub const LEADERBOARD_VERSION: u32 = 1;
/// Name used when a player leaves the name prompt blank
pub const ANONYMOUS_NAME: &str = "Anonymous";

// =============================================================================
// FILE LOCATIONS
// =============================================================================

pub const CONFIG_FILE: &str = "config/countries.toml";
pub const DEFAULT_DATA_DIR: &str = "data/countries";
pub const DEFAULT_LEADERBOARD_FILE: &str = "data/scoreboard.json";
pub const DEFAULT_LOG_FILE: &str = "logs/countries.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";
