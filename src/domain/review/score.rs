//! Score value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidScore;

/// Lowest score on the satisfaction scale
pub const MIN_SCORE: u8 = 1;

/// Highest score on the satisfaction scale
pub const MAX_SCORE: u8 = 10;

/// Value object representing a satisfaction score.
/// Immutable and validated on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    /// Create a score, rejecting values outside 1–10
    pub fn new(value: u8) -> Result<Self, InvalidScore> {
        if (MIN_SCORE..=MAX_SCORE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidScore {
                input: value.to_string(),
            })
        }
    }

    /// Get the numeric value
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Every valid score, lowest first
    pub fn all() -> impl Iterator<Item = Score> {
        (MIN_SCORE..=MAX_SCORE).map(Score)
    }
}

impl FromStr for Score {
    type Err = InvalidScore;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: u8 = trimmed.parse().map_err(|_| InvalidScore {
            input: s.to_string(),
        })?;
        Self::new(value).map_err(|_| InvalidScore {
            input: s.to_string(),
        })
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
