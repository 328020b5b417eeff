//! Scoring module - converts a finished round into points
//!
//! score = guessed * K - elapsed_ms / D, never below zero.
//! More countries always score more; more time always scores less or equal.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Scoring constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreRules {
    /// Points awarded per correctly guessed country (K)
    pub points_per_country: u64,
    /// One point is deducted per this many elapsed milliseconds (D).
    /// Zero disables the time penalty.
    pub millis_per_point: u64,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            points_per_country: DEFAULT_POINTS_PER_COUNTRY,
            millis_per_point: DEFAULT_MILLIS_PER_POINT,
        }
    }
}

impl ScoreRules {
    /// Score for a round. Zero when nothing was guessed.
    pub fn score(&self, elapsed_ms: u64, guessed: usize) -> u64 {
        let earned = (guessed as u64).saturating_mul(self.points_per_country);
        let penalty = elapsed_ms.checked_div(self.millis_per_point).unwrap_or(0);
        earned.saturating_sub(penalty)
    }
}
