pub mod config;
pub mod core;
pub mod games;
pub mod store;

// Re-export for convenience
pub use crate::games::rand_num::{Difficulty, GameRunner, Session};
pub use crate::store::{ScoreEntry, ScoreStore, Scores};
