//! Leaderboard store held in memory, with injectable save failures

use std::cell::{Cell, RefCell};
use std::path::PathBuf;

use crate::error::StoreError;
use crate::leaderboard::{Leaderboard, LeaderboardStore};

/// In-memory store; `failing_saves` makes the next N saves fail
#[derive(Debug, Default)]
pub struct MemoryLeaderboardStore {
    saved: RefCell<Option<Leaderboard>>,
    failing_saves: Cell<usize>,
    save_attempts: Cell<usize>,
}

impl MemoryLeaderboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_leaderboard(leaderboard: Leaderboard) -> Self {
        Self {
            saved: RefCell::new(Some(leaderboard)),
            ..Self::default()
        }
    }

    pub fn with_failing_saves(self, count: usize) -> Self {
        self.failing_saves.set(count);
        self
    }

    pub fn saved(&self) -> Option<Leaderboard> {
        self.saved.borrow().clone()
    }

    pub fn save_attempts(&self) -> usize {
        self.save_attempts.get()
    }
}

impl LeaderboardStore for MemoryLeaderboardStore {
    fn load(&self) -> Result<Leaderboard, StoreError> {
        self.saved.borrow().clone().ok_or(StoreError::NotFound {
            path: PathBuf::from("<memory>"),
        })
    }

    fn save(&self, leaderboard: &Leaderboard) -> Result<(), StoreError> {
        self.save_attempts.set(self.save_attempts.get() + 1);

        let failing = self.failing_saves.get();
        if failing > 0 {
            self.failing_saves.set(failing - 1);
            return Err(StoreError::Write {
                path: PathBuf::from("<memory>"),
                source: std::io::Error::other("simulated write failure"),
            });
        }

        *self.saved.borrow_mut() = Some(leaderboard.clone());
        Ok(())
    }
}
