//! Player-facing message templates, loaded once at startup.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::games::rand_num::Hint;

const BUNDLED: &str = include_str!("../configs/messages.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Text with `{name}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Template(String);

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Replace each `{key}` with its value. Unknown placeholders are left as is.
    pub fn fill<V: Display>(&self, values: &[(&str, V)]) -> String {
        values.iter().fold(self.0.clone(), |text, (key, value)| {
            text.replace(&format!("{{{key}}}"), &value.to_string())
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One line per proximity tier.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hints {
    pub very_close_1: String,
    pub very_close_2: String,
    pub very_close_3: String,
    pub close_1: String,
    pub close_2: String,
    pub far: String,
    pub very_far: String,
}

impl Hints {
    pub fn text(&self, hint: Hint) -> &str {
        match hint {
            Hint::VeryClose(1) => &self.very_close_1,
            Hint::VeryClose(2) => &self.very_close_2,
            Hint::VeryClose(_) => &self.very_close_3,
            Hint::Close(1) => &self.close_1,
            Hint::Close(_) => &self.close_2,
            Hint::Far => &self.far,
            Hint::VeryFar => &self.very_far,
        }
    }
}

/// Every message the game prints. All fields are required.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Messages {
    pub greeting: String,
    pub spacer: String,
    pub player_prompt: String,
    pub difficulty_prompt: String,
    /// `{level}`
    pub level_chosen: Template,
    pub guess_prompt: String,
    /// `{guess}`
    pub too_low: Template,
    /// `{guess}`
    pub too_high: Template,
    /// `{attempts}`, `{time}`
    pub found: Template,
    pub exhausted: String,
    pub leaderboard_title: String,
    pub play_again_prompt: String,
    pub farewell: String,
    pub hints: Hints,
}

impl Messages {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// The messages shipped with the binary.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::parse(BUNDLED)
    }
}
