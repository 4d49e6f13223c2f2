//! In-memory score store.

use std::cell::RefCell;

use super::{Result, ScoreEntry, ScoreStore, Scores};

/// Keeps the leaderboard in process memory, with the same ranking rules as
/// the file store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    scores: RefCell<Scores>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Scores {
        self.scores.borrow().clone()
    }

    fn add(&self, entry: ScoreEntry) -> Result<Scores> {
        let mut scores = self.scores.borrow_mut();
        if scores.insert(entry) {
            scores.rank();
        }
        Ok(scores.clone())
    }
}
