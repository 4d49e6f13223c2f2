//! Score ledger: a ranked, deduplicated and bounded leaderboard.

mod error;
mod file;
mod memory;
mod scores;

pub use error::{Result, StoreError};
pub use file::JsonScoreStore;
pub use memory::MemoryScoreStore;
pub use scores::{format_duration, ScoreEntry, Scores, MAX_ENTRIES, NO_SCORES};

/// Backing store for the leaderboard.
pub trait ScoreStore {
    /// Ranked view of the persisted scores. Never fails: a missing or
    /// unreadable store reads as empty.
    fn load(&self) -> Scores;

    /// Merge `entry` into the leaderboard and return the ranked result.
    ///
    /// Adding an entry that is already present is a no-op.
    fn add(&self, entry: ScoreEntry) -> Result<Scores>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for &S {
    fn load(&self) -> Scores {
        (**self).load()
    }

    fn add(&self, entry: ScoreEntry) -> Result<Scores> {
        (**self).add(entry)
    }
}
