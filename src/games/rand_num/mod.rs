pub mod game;
pub mod parser;
pub mod runner;

pub use game::{random_target, Difficulty, Hint, Outcome, Session, SessionError, SessionState, Turn};
pub use parser::ParseError;
pub use runner::{GameRunner, RunSummary};

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Messages;
use crate::core::input::LineInput;
use crate::core::terminal::Console;
use crate::core::timer::SystemClock;
use crate::store::JsonScoreStore;

/// Where the game reads its templates and keeps its scores.
#[derive(Debug, Clone)]
pub struct GameOptions {
    /// Message templates file. `None` uses the bundled messages.
    pub config: Option<PathBuf>,
    pub scores: PathBuf,
    pub color: bool,
}

/// Game runner for Number Guessing Game, on stdin and stdout
pub fn run_game(options: GameOptions) -> Result<RunSummary> {
    let messages = match &options.config {
        Some(path) => Messages::load(path)?,
        None => Messages::bundled()?,
    };
    info!(scores = %options.scores.display(), "starting game");

    let stdout = io::stdout();
    let console = if options.color && stdout.is_terminal() {
        Console::styled(stdout.lock())
    } else {
        Console::plain(stdout.lock())
    };

    let mut runner = GameRunner::new(
        LineInput::new(io::stdin().lock()),
        console,
        messages,
        JsonScoreStore::new(&options.scores),
        SystemClock,
        rand::rng(),
    );
    let summary = runner.play().context("game aborted")?;
    info!(rounds = summary.rounds, wins = summary.wins, "game over");
    Ok(summary)
}
