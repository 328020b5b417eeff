//! Error types for every recoverable failure in the game
//!
//! None of these is fatal: the controller maps each variant to a message
//! and a recovery path (re-prompt, skip, empty board, retry/discard).

use std::path::PathBuf;
use thiserror::Error;

/// Console input failures
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Inserted value is incorrect")]
    Parse,
    #[error("No option with id {0}")]
    NoSuchOption(i64),
    #[error("Input closed")]
    Closed,
    #[error("Console error: {0}")]
    Io(#[from] std::io::Error),
}

/// Country list loading failures
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Couldn't open file {}", path.display())]
    NotFound { path: PathBuf },
    #[error("Couldn't read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Leaderboard persistence failures
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("File {} not found.", path.display())]
    NotFound { path: PathBuf },
    #[error("File {} is not a valid scoreboard: {reason}.", path.display())]
    Corrupt { path: PathBuf, reason: String },
    #[error("Saving scoreboard to {} failed: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Guess session precondition violations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Add countries from at least one continent.")]
    EmptyPool,
    #[error("Round already started")]
    AlreadyStarted,
}

/// Configuration file failures
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
