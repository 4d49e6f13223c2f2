use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::games::rand_num::Difficulty;

/// Leaderboard capacity.
pub const MAX_ENTRIES: usize = 10;

/// Rendered in place of an empty leaderboard table.
pub const NO_SCORES: &str = "No scores yet. Please guess the number to start scoring.";

/// One finished round. Two entries are the same entry when every field matches.
///
/// `time` holds whole seconds, the same precision the ledger file keeps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player: String,
    pub level: Difficulty,
    pub attempts: u32,
    #[serde(with = "whole_seconds")]
    pub time: Duration,
}

impl ScoreEntry {
    pub fn new(player: impl Into<String>, level: Difficulty, attempts: u32, time: Duration) -> Self {
        Self {
            player: player.into(),
            level,
            attempts,
            time: Duration::from_secs(time.as_secs()),
        }
    }

    fn ranking_key(&self) -> (u8, u32, Duration) {
        (self.level.rank(), self.attempts, self.time)
    }
}

/// Ordered leaderboard entries, best first once ranked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scores(Vec<ScoreEntry>);

impl Scores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, entry: &ScoreEntry) -> bool {
        self.0.contains(entry)
    }

    /// Append `entry` unless an equal one is already present.
    /// Returns whether it was added.
    pub fn insert(&mut self, entry: ScoreEntry) -> bool {
        if self.contains(&entry) {
            return false;
        }
        self.0.push(entry);
        true
    }

    /// Sort by level rank, then attempts, then time, and keep the best
    /// [`MAX_ENTRIES`]. The sort is stable so ties keep insertion order.
    pub fn rank(&mut self) {
        self.0.sort_by_key(ScoreEntry::ranking_key);
        self.0.truncate(MAX_ENTRIES);
    }

    pub fn ranked(mut self) -> Self {
        self.rank();
        self
    }
}

impl From<Vec<ScoreEntry>> for Scores {
    fn from(entries: Vec<ScoreEntry>) -> Self {
        Self(entries)
    }
}

/// ASCII table, or [`NO_SCORES`] when there is nothing to show.
impl fmt::Display for Scores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str(NO_SCORES);
        }

        let header = ["PLAYER", "LEVEL", "ATTEMPTS", "TIME"];
        let rows: Vec<[String; 4]> = self
            .0
            .iter()
            .map(|s| {
                [
                    s.player.clone(),
                    s.level.to_string(),
                    s.attempts.to_string(),
                    format_duration(s.time),
                ]
            })
            .collect();

        let mut widths = header.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let border: String = widths
            .iter()
            .map(|w| format!("+{}", "-".repeat(w + 2)))
            .collect::<String>()
            + "+";

        writeln!(f, "{border}")?;
        write_row(f, &header, &widths)?;
        writeln!(f, "{border}")?;
        for row in &rows {
            write_row(f, row, &widths)?;
        }
        writeln!(f, "{border}")
    }
}

fn write_row<S: AsRef<str>>(f: &mut fmt::Formatter<'_>, cells: &[S], widths: &[usize; 4]) -> fmt::Result {
    for (index, (cell, width)) in cells.iter().zip(widths).enumerate() {
        let (cell, width) = (cell.as_ref(), *width);
        // Attempts column is numeric and right-aligned.
        if index == 2 {
            write!(f, "| {cell:>width$} ")?;
        } else {
            write!(f, "| {cell:<width$} ")?;
        }
    }
    writeln!(f, "|")
}

/// Compact `1h2m3s` style, with `0s` for zero.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let (hours, minutes, seconds) = (total / 3600, total / 60 % 60, total % 60);
    match (hours, minutes) {
        (0, 0) => format!("{seconds}s"),
        (0, _) => format!("{minutes}m{seconds}s"),
        _ => format!("{hours}h{minutes}m{seconds}s"),
    }
}

mod whole_seconds {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
