use std::path::PathBuf;

use clap::Parser;
use directories::ProjectDirs;

use numguess::games::rand_num::GameOptions;

#[derive(Parser)]
#[command(name = "numguess")]
#[command(about = "🔢 Guess the secret number between 1 and 100")]
#[command(version)]
pub struct Cli {
    /// Message templates file (TOML). Defaults to the bundled messages.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Leaderboard file. Defaults to scores.json in the user data directory.
    #[arg(short, long)]
    pub scores: Option<PathBuf>,

    /// Never color the output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn into_options(self) -> GameOptions {
        GameOptions {
            config: self.config,
            scores: self.scores.unwrap_or_else(default_scores_path),
            color: !self.no_color,
        }
    }
}

/// `<data dir>/scores.json`, or `./scores.json` when no home directory is known.
fn default_scores_path() -> PathBuf {
    ProjectDirs::from("", "", "numguess")
        .map(|dirs| dirs.data_dir().join("scores.json"))
        .unwrap_or_else(|| PathBuf::from("scores.json"))
}
