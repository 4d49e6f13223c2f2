//! JSON file backed score store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{Result, ScoreEntry, ScoreStore, Scores, StoreError};

/// Leaderboard persisted as a pretty-printed JSON array.
///
/// The file always holds the ranked view, so what `add` returns and what is
/// on disk stay identical. Writes go through a temp file and a rename, which
/// keeps the previous leaderboard readable if the process dies mid-write.
/// Access is assumed to be exclusive: there is no locking.
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Option<Scores> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "could not read scores, starting empty");
                return None;
            }
        };

        match serde_json::from_str(&text) {
            Ok(scores) => Some(scores),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "scores file is corrupt, starting empty");
                None
            }
        }
    }

    fn write(&self, scores: &Scores) -> Result<()> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let bytes = serde_json::to_vec_pretty(scores)?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, bytes).map_err(io_err)?;
        fs::rename(&temp_path, &self.path).map_err(io_err)?;

        debug!(path = %self.path.display(), entries = scores.len(), "saved scores");
        Ok(())
    }
}

impl ScoreStore for JsonScoreStore {
    fn load(&self) -> Scores {
        let scores = self.read().unwrap_or_default().ranked();
        debug!(path = %self.path.display(), entries = scores.len(), "loaded scores");
        scores
    }

    fn add(&self, entry: ScoreEntry) -> Result<Scores> {
        let mut scores = self.load();
        if !scores.insert(entry) {
            debug!("score already recorded, leaving leaderboard unchanged");
            return Ok(scores);
        }

        scores.rank();
        self.write(&scores)?;
        Ok(scores)
    }
}
