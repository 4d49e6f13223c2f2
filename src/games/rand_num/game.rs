use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Smallest secret number a round can draw.
pub const MIN_TARGET: u32 = 1;
/// Largest secret number a round can draw.
pub const MAX_TARGET: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Level must be \"Easy\", \"Medium\" or \"Hard\", got {0:?}.")]
    InvalidDifficultyConfiguration(String),

    #[error("Max attempts must be 10 (Easy), 5 (Medium) or 3 (Hard), got {max_attempts} for {difficulty}.")]
    AttemptsMismatch { difficulty: Difficulty, max_attempts: u32 },

    #[error("Target must be between 1 and 100, got {0}.")]
    TargetOutOfRange(u32),

    #[error("Random number already found.")]
    AlreadySolved,

    #[error("No attempts left: all {max_attempts} turns have been played.")]
    TooManyTurns { max_attempts: u32 },

    #[error("No turn has been played yet.")]
    NoTurnsYet,
}

/// Difficulty tier, pinned to a fixed attempt budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn max_attempts(self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 5,
            Difficulty::Hard => 3,
        }
    }

    /// Leaderboard rank, lower sorts first.
    pub fn rank(self) -> u8 {
        match self {
            Difficulty::Hard => 1,
            Difficulty::Medium => 2,
            Difficulty::Easy => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| SessionError::InvalidDifficultyConfiguration(s.to_string()))
    }
}

/// Where the guess landed relative to the secret number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Guess is above the target, the player must go lower.
    TooHigh,
    /// Guess is below the target, the player must go higher.
    TooLow,
    Found,
}

/// Proximity hint shown after a miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// Distance of 1, 2 or 3.
    VeryClose(u32),
    /// Distance of 4 or 5 (stored as 1 or 2).
    Close(u32),
    Far,
    VeryFar,
}

impl Hint {
    pub fn from_distance(distance: u32) -> Self {
        match distance {
            1..=3 => Hint::VeryClose(distance),
            4 | 5 => Hint::Close(distance - 3),
            6..=9 => Hint::Far,
            _ => Hint::VeryFar,
        }
    }
}

/// One classified guess. Only built by scoring a guess against a target,
/// so outcome and distance always agree with the guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    guess: u32,
    outcome: Outcome,
    distance: u32,
}

impl Turn {
    fn score(guess: u32, target: u32) -> Self {
        let outcome = match guess.cmp(&target) {
            std::cmp::Ordering::Greater => Outcome::TooHigh,
            std::cmp::Ordering::Less => Outcome::TooLow,
            std::cmp::Ordering::Equal => Outcome::Found,
        };
        Self {
            guess,
            outcome,
            distance: guess.abs_diff(target),
        }
    }

    pub fn guess(&self) -> u32 {
        self.guess
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Proximity hint, `None` when the guess hit the target.
    pub fn hint(&self) -> Option<Hint> {
        match self.outcome {
            Outcome::Found => None,
            _ => Some(Hint::from_distance(self.distance)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Open,
    Solved,
    Exhausted,
}

/// State of a single guessing round.
#[derive(Debug, Clone)]
pub struct Session {
    difficulty: Difficulty,
    max_attempts: u32,
    target: u32,
    turns: Vec<Turn>,
}

impl Session {
    /// Start a round, rejecting a difficulty/attempts pairing that disagrees
    /// with the fixed table or a target outside 1..=100.
    pub fn new(difficulty: Difficulty, max_attempts: u32, target: u32) -> Result<Self, SessionError> {
        if difficulty.max_attempts() != max_attempts {
            return Err(SessionError::AttemptsMismatch { difficulty, max_attempts });
        }
        if !(MIN_TARGET..=MAX_TARGET).contains(&target) {
            return Err(SessionError::TargetOutOfRange(target));
        }
        Ok(Self {
            difficulty,
            max_attempts,
            target,
            turns: Vec::with_capacity(max_attempts as usize),
        })
    }

    /// Same as [`Session::new`] but takes the level name as untrusted text.
    pub fn from_level_name(level: &str, max_attempts: u32, target: u32) -> Result<Self, SessionError> {
        Self::new(level.parse()?, max_attempts, target)
    }

    /// Start a round with the attempt budget taken from the difficulty.
    pub fn for_difficulty(difficulty: Difficulty, target: u32) -> Result<Self, SessionError> {
        Self::new(difficulty, difficulty.max_attempts(), target)
    }

    /// Score `guess` against the target and append the turn.
    ///
    /// Range checking of `guess` belongs to the caller. Nothing is appended
    /// when this returns an error.
    pub fn record_guess(&mut self, guess: u32) -> Result<(), SessionError> {
        if self.solved() {
            return Err(SessionError::AlreadySolved);
        }
        if self.exhausted() {
            return Err(SessionError::TooManyTurns { max_attempts: self.max_attempts });
        }

        let turn = Turn::score(guess, self.target);
        debug!(
            guess,
            outcome = ?turn.outcome,
            distance = turn.distance,
            attempt = self.turns.len() + 1,
            "turn recorded"
        );
        self.turns.push(turn);
        Ok(())
    }

    pub fn last_turn(&self) -> Result<&Turn, SessionError> {
        self.turns.last().ok_or(SessionError::NoTurnsYet)
    }

    pub fn attempts_used(&self) -> u32 {
        self.turns.len() as u32
    }

    /// True once every attempt has been spent.
    pub fn exhausted(&self) -> bool {
        self.attempts_used() == self.max_attempts
    }

    pub fn solved(&self) -> bool {
        self.turns.last().is_some_and(|t| t.outcome == Outcome::Found)
    }

    pub fn state(&self) -> SessionState {
        if self.solved() {
            SessionState::Solved
        } else if self.exhausted() {
            SessionState::Exhausted
        } else {
            SessionState::Open
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }
}

/// Draw a fresh secret number in 1..=100.
pub fn random_target<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(MIN_TARGET..=MAX_TARGET)
}
