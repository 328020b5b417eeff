//! Game configuration
//!
//! Loads file locations, logging level and scoring constants from
//! config/countries.toml. Every field is optional; anything missing falls
//! back to the built-in defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::error::ConfigError;
use crate::scoring::ScoreRules;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Directory holding the per-continent country lists
    pub data_dir: PathBuf,
    /// Where the leaderboard is persisted
    pub leaderboard_path: PathBuf,
    /// Log output file (kept off the interactive console)
    pub log_file: PathBuf,
    /// tracing filter directive, e.g. "info" or "countries=debug"
    pub log_level: String,
    pub scoring: ScoreRules,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            leaderboard_path: PathBuf::from(DEFAULT_LEADERBOARD_FILE),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            scoring: ScoreRules::default(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load from the default config file. See [`GameConfig::load_from`].
    pub fn load() -> (Self, Option<ConfigError>) {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load from `path`, falling back to defaults. A missing file is not an
    /// error; an unreadable or unparsable one is handed back so it can be
    /// logged once logging is up.
    pub fn load_from(path: &Path) -> (Self, Option<ConfigError>) {
        if !path.exists() {
            return (Self::default(), None);
        }

        match Self::from_file(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = GameConfig::parse("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = GameConfig::parse(
            r#"
            data_dir = "lists"
            log_level = "debug"

            [scoring]
            millis_per_point = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("lists"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.leaderboard_path, PathBuf::from(DEFAULT_LEADERBOARD_FILE));
        assert_eq!(config.scoring.millis_per_point, 250);
        assert_eq!(config.scoring.points_per_country, DEFAULT_POINTS_PER_COUNTRY);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(GameConfig::parse("data_dir = [").is_err());
        assert!(GameConfig::parse("[scoring]\nmillis_per_point = \"fast\"").is_err());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let path = std::env::temp_dir().join("countries_missing_config_for_test.toml");
        assert!(matches!(
            GameConfig::from_file(&path),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_load_from_missing_file_is_silent_default() {
        let path = std::env::temp_dir().join("countries_missing_config_for_test.toml");
        let (config, error) = GameConfig::load_from(&path);
        assert_eq!(config, GameConfig::default());
        assert!(error.is_none());
    }

    #[test]
    fn test_load_from_bad_file_returns_defaults_and_error() {
        let dir = std::env::temp_dir().join(format!("countries_config_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("countries.toml");
        fs::write(&path, "data_dir = [").unwrap();

        let (config, error) = GameConfig::load_from(&path);
        assert_eq!(config, GameConfig::default());
        assert!(matches!(error, Some(ConfigError::Parse { .. })));
        assert!(error.unwrap().to_string().contains("countries.toml"));

        fs::write(&path, "log_level = \"debug\"").unwrap();
        let (config, error) = GameConfig::load_from(&path);
        assert_eq!(config.log_level, "debug");
        assert!(error.is_none());

        fs::remove_dir_all(&dir).ok();
    }
}
