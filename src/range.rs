use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{MonthDay, ParseError, RANGE_SEPARATOR, prelude::*};

/// An inclusive span of calendar days, independent of year.
///
/// A span whose start falls after its end wraps through the new year, so
/// `12-22/01-19` covers late December and most of January.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct SignRange {
    start: MonthDay,
    end:   MonthDay,
}

/// Error type for sign range parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Error parsing one of the endpoints.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl SignRange {
    /// Creates a range from its inclusive endpoints. Any pair is valid,
    /// since a start after the end means the span wraps the year.
    pub const fn new(start: MonthDay, end: MonthDay) -> Self {
        Self { start, end }
    }

    /// Builds a range from literals in const tables.
    pub(crate) const fn literal(start: (u8, u8), end: (u8, u8)) -> Self {
        Self::new(
            MonthDay::literal(start.0, start.1),
            MonthDay::literal(end.0, end.1),
        )
    }

    pub const fn start(&self) -> MonthDay {
        self.start
    }

    pub const fn end(&self) -> MonthDay {
        self.end
    }

    /// Whether the span runs past December 31st into January.
    pub fn wraps_year(&self) -> bool {
        self.start > self.end
    }

    /// Checks whether the range contains a given day, both endpoints included.
    pub fn contains(&self, day: MonthDay) -> bool {
        if self.wraps_year() {
            day >= self.start || day <= self.end
        } else {
            self.start <= day && day <= self.end
        }
    }

    /// Number of calendar days covered, counting February 29th.
    pub fn len(&self) -> usize {
        MonthDay::all().filter(|day| self.contains(*day)).count()
    }

    /// Always false: a range holds at least its start day.
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl FromStr for SignRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;
                let start = start_str.trim().parse::<MonthDay>()?;
                let end = end_str.trim().parse::<MonthDay>()?;
                Ok(Self::new(start, end))
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for SignRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SignRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
