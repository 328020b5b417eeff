//! Leaderboard persistence
//!
//! The board is saved as a JSON envelope carrying a format tag and version,
//! so a foreign or damaged file is reported as corrupt instead of being
//! misread.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

use super::{Leaderboard, Score};
use crate::constants::{LEADERBOARD_FORMAT, LEADERBOARD_VERSION};
use crate::error::StoreError;

/// Where the leaderboard lives between runs
pub trait LeaderboardStore {
    fn load(&self) -> Result<Leaderboard, StoreError>;

    fn save(&self, leaderboard: &Leaderboard) -> Result<(), StoreError>;
}

/// On-disk layout
#[derive(Debug, Serialize, Deserialize)]
struct LeaderboardFile {
    format: String,
    version: u32,
    entries: Vec<Score>,
}

/// JSON file store at a fixed path
#[derive(Debug, Clone)]
pub struct JsonLeaderboardStore {
    path: PathBuf,
}

impl JsonLeaderboardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn corrupt(&self, reason: impl Into<String>) -> StoreError {
        StoreError::Corrupt {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }

    /// Decode file contents into a leaderboard
    pub fn decode(&self, content: &str) -> Result<Leaderboard, StoreError> {
        let file: LeaderboardFile =
            serde_json::from_str(content).map_err(|e| self.corrupt(e.to_string()))?;

        if file.format != LEADERBOARD_FORMAT {
            return Err(self.corrupt(format!("unexpected format tag {:?}", file.format)));
        }
        if file.version != LEADERBOARD_VERSION {
            return Err(self.corrupt(format!("unsupported version {}", file.version)));
        }

        Leaderboard::from_entries(file.entries)
            .ok_or_else(|| self.corrupt("entries are not a valid top 10"))
    }

    /// Encode a leaderboard as file contents
    pub fn encode(leaderboard: &Leaderboard) -> serde_json::Result<String> {
        let file = LeaderboardFile {
            format: LEADERBOARD_FORMAT.to_string(),
            version: LEADERBOARD_VERSION,
            entries: leaderboard.as_ordered_list().to_vec(),
        };
        serde_json::to_string_pretty(&file)
    }
}

impl LeaderboardStore for JsonLeaderboardStore {
    fn load(&self) -> Result<Leaderboard, StoreError> {
        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::NotFound {
                path: self.path.clone(),
            },
            _ => self.corrupt(e.to_string()),
        })?;

        let leaderboard = self.decode(&content)?;
        info!(
            "Loaded {} scoreboard entries from {}",
            leaderboard.len(),
            self.path.display()
        );
        Ok(leaderboard)
    }

    fn save(&self, leaderboard: &Leaderboard) -> Result<(), StoreError> {
        let write_error = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        let json = Self::encode(leaderboard)
            .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))
            .map_err(write_error)?;
        fs::write(&self.path, json).map_err(write_error)?;

        info!(
            "Saved {} scoreboard entries to {}",
            leaderboard.len(),
            self.path.display()
        );
        Ok(())
    }
}
