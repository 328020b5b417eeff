//! Logging setup shared by the game binary
//!
//! Log lines go to a file so they never mix with the interactive console.
//! If the file cannot be opened, only warnings and errors are written to
//! stderr.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::GameConfig;
use crate::constants::DEFAULT_LOG_LEVEL;

/// Build the filter from a directive, falling back to the default level
pub fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init(config: &GameConfig) {
    match open_log_file(&config.log_file) {
        Ok(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter_for(&config.log_level))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
        Err(e) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter_for("warn"))
                .with_writer(std::io::stderr)
                .try_init();
            tracing::warn!("Could not open log file {}: {}", config.log_file.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_falls_back_on_bad_directive() {
        assert_eq!(filter_for("debug").to_string(), "debug");
        assert_eq!(filter_for("countries=loud").to_string(), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_open_log_file_creates_directory() {
        let dir = std::env::temp_dir().join(format!("countries_logs_{}", std::process::id()));
        let path = dir.join("nested").join("countries.log");
        assert!(open_log_file(&path).is_ok());
        assert!(path.exists());
        fs::remove_dir_all(&dir).ok();
    }
}
