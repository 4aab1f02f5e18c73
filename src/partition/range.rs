use crate::error::PipelineError;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The ordered key space ranges are drawn from.
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

pub const RANGE_SEPARATOR: char = '-';

/// Inclusive range of first letters, written `start-end` on the wire.
///
/// Endpoints are kept exactly as received so the external form round-trips
/// unchanged; comparisons are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Range {
    start: String,
    end: String,
}

impl Range {
    /// Accepts only values that split into exactly two non-empty endpoints.
    pub fn parse(value: &str) -> Result<Self, PipelineError> {
        let mut parts = value.split(RANGE_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(start), Some(end), None) if !start.is_empty() && !end.is_empty() => Ok(Self {
                start: start.to_string(),
                end: end.to_string(),
            }),
            _ => Err(PipelineError::InvalidRangeFormat {
                value: value.to_string(),
            }),
        }
    }

    pub fn from_bounds(start: char, end: char) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// True when the token's first character falls inside the range.
    /// Empty tokens belong to no range.
    pub fn contains(&self, token: &str) -> bool {
        let Some(first) = token.chars().next() else {
            return false;
        };
        let head: String = first.to_lowercase().collect();
        self.start.to_lowercase() <= head && head <= self.end.to_lowercase()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.start, RANGE_SEPARATOR, self.end)
    }
}

impl FromStr for Range {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Range::parse(s)
    }
}

impl TryFrom<String> for Range {
    type Error = PipelineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Range::parse(&value)
    }
}

impl From<Range> for String {
    fn from(range: Range) -> Self {
        range.to_string()
    }
}
