//! Turns raw input lines into validated game values

use thiserror::Error;

use super::game::{Difficulty, MAX_TARGET, MIN_TARGET};

/// Longest accepted player name, in characters.
pub const MAX_PLAYER_NAME: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("It must be non-empty, and 20 characters at most.")]
    InvalidPlayerName,

    #[error("It must be an integer.")]
    NotAnInteger,

    #[error("It must be an integer between {min} and {max}.")]
    OutOfRange { min: u32, max: u32 },
}

pub fn parse_player(input: &str) -> Result<String, ParseError> {
    let name = input.trim();
    if name.is_empty() || name.chars().count() > MAX_PLAYER_NAME {
        return Err(ParseError::InvalidPlayerName);
    }
    Ok(name.to_string())
}

pub fn parse_guess(input: &str) -> Result<u32, ParseError> {
    parse_in_range(input, MIN_TARGET, MAX_TARGET)
}

/// `1` plays again, `2` quits.
pub fn parse_play_again(input: &str) -> Result<bool, ParseError> {
    Ok(parse_in_range(input, 1, 2)? == 1)
}

/// `1`, `2` and `3` select Easy, Medium and Hard.
pub fn parse_difficulty(input: &str) -> Result<Difficulty, ParseError> {
    let index = parse_in_range(input, 1, Difficulty::ALL.len() as u32)?;
    Ok(Difficulty::ALL[index as usize - 1])
}

fn parse_in_range(input: &str, min: u32, max: u32) -> Result<u32, ParseError> {
    // Parse as signed so "-3" reports a range error rather than a type error.
    let value: i64 = input.trim().parse().map_err(|_| ParseError::NotAnInteger)?;
    if value < i64::from(min) || value > i64::from(max) {
        return Err(ParseError::OutOfRange { min, max });
    }
    Ok(value as u32)
}
