//! Leaderboard module - top 10 named scores
//!
//! Entries are kept sorted by descending score. A new score gets in while
//! the board has free slots, or when it strictly beats the 10th entry.
//! Equal scores keep achievement order: the earlier one ranks higher.

mod store;

pub use store::{JsonLeaderboardStore, LeaderboardStore};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::LEADERBOARD_CAPACITY;
use crate::session::RoundResult;

/// One finished round's score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    score: u64,
    elapsed_ms: u64,
    #[serde(default)]
    name: Option<String>,
    guessed: usize,
    total: usize,
    achieved_at: DateTime<Utc>,
}

impl Score {
    pub fn new(score: u64, elapsed_ms: u64, guessed: usize, total: usize) -> Self {
        Self {
            score,
            elapsed_ms,
            name: None,
            guessed,
            total,
            achieved_at: Utc::now(),
        }
    }

    /// Score for a finished round
    pub fn from_round(result: &RoundResult, score: u64) -> Self {
        Self::new(score, result.elapsed_ms, result.guessed, result.total)
    }

    /// Same score, signed with the player's name
    pub fn named(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    pub fn with_achieved_at(self, achieved_at: DateTime<Utc>) -> Self {
        Self { achieved_at, ..self }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn guessed(&self) -> usize {
        self.guessed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn achieved_at(&self) -> DateTime<Utc> {
        self.achieved_at
    }
}

/// Top scores, best first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<Score>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored entries. Returns None if they break the board's
    /// invariants (too many, or not sorted best first).
    pub fn from_entries(entries: Vec<Score>) -> Option<Self> {
        let sorted = entries.windows(2).all(|w| w[0].score >= w[1].score);
        (entries.len() <= LEADERBOARD_CAPACITY && sorted).then_some(Self { entries })
    }

    /// Whether a score would make the board
    pub fn qualifies(&self, score: &Score) -> bool {
        if self.entries.len() < LEADERBOARD_CAPACITY {
            return true;
        }
        self.entries
            .last()
            .is_some_and(|lowest| score.score > lowest.score)
    }

    /// Insert a score if it qualifies. Returns its 1-based rank, or None
    /// if it was rejected and the board is unchanged.
    pub fn insert(&mut self, score: Score) -> Option<usize> {
        if !self.qualifies(&score) {
            return None;
        }
        if self.entries.len() >= LEADERBOARD_CAPACITY {
            self.entries.pop();
        }

        // After every equal-or-better entry keeps earlier achievements first
        let position = self.entries.partition_point(|e| e.score >= score.score);
        self.entries.insert(position, score);
        Some(position + 1)
    }

    /// Entries, best first
    pub fn as_ordered_list(&self) -> &[Score] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Numbered lines for display
    pub fn format_table(&self) -> String {
        let mut output = String::new();
        for (i, entry) in self.entries.iter().enumerate() {
            output.push_str(&format!(
                "{:>2}. {:<16} {:>7} pts  {:>3}/{:<3} in {:>8.3} s  ({})\n",
                i + 1,
                entry.name().unwrap_or("-"),
                entry.score,
                entry.guessed,
                entry.total,
                entry.elapsed_ms as f64 / 1000.0,
                entry.achieved_at.format("%Y-%m-%d"),
            ));
        }
        output
    }
}
