//! Line-based player input

use std::io::BufRead;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("You must enter something!")]
    Empty,

    #[error("input closed")]
    Closed,

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Source of raw answers for each prompt the game asks.
///
/// Every method yields one line of text, never validated.
pub trait InputSource {
    fn next_player_input(&mut self) -> Result<String, InputError>;
    fn next_difficulty_input(&mut self) -> Result<String, InputError>;
    fn next_guess_input(&mut self) -> Result<String, InputError>;
    fn next_play_again_input(&mut self) -> Result<String, InputError>;
}

/// Reads one line per prompt from any buffered reader.
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn next_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            return Err(InputError::Empty);
        }
        Ok(line.to_string())
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn next_player_input(&mut self) -> Result<String, InputError> {
        self.next_line()
    }

    fn next_difficulty_input(&mut self) -> Result<String, InputError> {
        self.next_line()
    }

    fn next_guess_input(&mut self) -> Result<String, InputError> {
        self.next_line()
    }

    fn next_play_again_input(&mut self) -> Result<String, InputError> {
        self.next_line()
    }
}
