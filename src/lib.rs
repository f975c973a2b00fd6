mod consts;
pub mod content;
pub mod planner;
mod prelude;
mod range;
mod sign;
mod types;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod logger;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use content::{ContentRecord, InsightCategory, Insights};
pub use planner::{Event, Field, FormInput, Planner, Report, State, SubmitError, UnknownField};
pub use range::{RangeError, SignRange};
pub use sign::{Sign, UnknownSign, classify, classify_str};
pub use types::{Day, Month, MonthDay, Year};

use crate::prelude::*;
use std::str::FromStr;

/// A fully specified calendar date of birth.
///
/// Only the calendar fields are kept. A time-of-day suffix on the input is
/// discarded without any timezone conversion, so the day never shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct BirthDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Invalid day {day} for month {month:02}")]
    InvalidMonthDay { month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl BirthDate {
    /// Creates a date from numeric components, validating each one.
    ///
    /// # Errors
    /// Returns the `ParseError` for the first component out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// The year-less part of the date, which is all the classifier reads.
    pub fn month_day(&self) -> MonthDay {
        MonthDay::from(*self)
    }

    /// Sun sign for this date.
    pub fn sign(&self) -> Sign {
        classify(self)
    }
}

impl From<BirthDate> for MonthDay {
    fn from(date: BirthDate) -> Self {
        Self::from_parts(date.month, date.day)
    }
}

impl FromStr for BirthDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // Drop any time-of-day suffix (`1990-07-04T10:30:00Z`); only the calendar day counts
        let date_part = trimmed
            .split_once(TIME_DESIGNATORS)
            .map_or(trimmed, |(date, _)| date)
            .trim();

        let has_hyphen = date_part.contains(DATE_SEPARATOR);
        let has_slash = date_part.contains(MONTH_FIRST_SEPARATOR);

        if has_hyphen && has_slash {
            return Err(ParseError::InvalidFormat(format!(
                "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR})"
            )));
        }

        if has_hyphen {
            // ISO format: YYYY-MM-DD
            let parts: Vec<&str> = date_part.split(DATE_SEPARATOR).map(str::trim).collect();
            match parts.as_slice() {
                [year, month, day] => Self::from_fields(year, month, day),
                _ => Err(ParseError::InvalidFormat(format!(
                    "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} {DATE_SEPARATOR} separators",
                    parts.len() - 1
                ))),
            }
        } else if has_slash {
            // Month-first format: MM/DD/YYYY
            let parts: Vec<&str> = date_part
                .split(MONTH_FIRST_SEPARATOR)
                .map(str::trim)
                .collect();
            match parts.as_slice() {
                [month, day, year] => Self::from_fields(year, month, day),
                _ => Err(ParseError::InvalidFormat(format!(
                    "Expected MM{MONTH_FIRST_SEPARATOR}DD{MONTH_FIRST_SEPARATOR}YYYY, found {} {MONTH_FIRST_SEPARATOR} separators",
                    parts.len() - 1
                ))),
            }
        } else {
            Err(ParseError::InvalidFormat(date_part.to_owned()))
        }
    }
}

impl BirthDate {
    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        types::parse_digits(s)
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        types::parse_digits(s)
    }

    fn from_fields(year: &str, month: &str, day: &str) -> Result<Self, ParseError> {
        // Parse components - InvalidFormat if not numeric
        let year = Self::parse_u16(year)?;
        let month = Self::parse_u8(month)?;
        let day = Self::parse_u8(day)?;

        Self::new(year, month, day)
    }
}

impl serde::Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for BirthDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        let date = "1990-07-04".parse::<BirthDate>().unwrap();
        assert_eq!(date, BirthDate::new(1990, 7, 4).unwrap());
        assert_eq!(date.year(), 1990);
        assert_eq!(date.month(), 7);
        assert_eq!(date.day(), 4);
    }

    #[test]
    fn test_parse_month_first_date() {
        let date = "07/04/1990".parse::<BirthDate>().unwrap();
        assert_eq!(date, BirthDate::new(1990, 7, 4).unwrap());
    }

    #[test]
    fn test_parse_with_whitespace() {
        let date = " 1990 - 07 - 04 ".parse::<BirthDate>().unwrap();
        assert_eq!(date.to_string(), "1990-07-04");
    }

    #[test]
    fn test_time_suffix_does_not_shift_day() {
        struct TestCase {
            input:       &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "1990-07-04T00:00",
                description: "midnight",
            },
            TestCase {
                input:       "1990-07-04T23:59:59Z",
                description: "last second UTC",
            },
            TestCase {
                input:       "1990-07-04T23:30-08:00",
                description: "negative offset that would roll over in UTC",
            },
        ];

        for case in &cases {
            let date = case.input.parse::<BirthDate>().unwrap();
            assert_eq!(date.to_string(), "1990-07-04", "{}", case.description);
        }
    }

    #[test]
    fn test_lowercase_time_designator() {
        let date = "1990-07-04t10:00".parse::<BirthDate>().unwrap();
        assert_eq!(date.to_string(), "1990-07-04");
    }

    #[test]
    fn test_signed_fields_rejected() {
        for input in ["+1990-+7-+4", "1990-07-+4", "+07/04/1990"] {
            assert!(
                matches!(input.parse::<BirthDate>(), Err(ParseError::InvalidFormat(_))),
                "{input}"
            );
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!("".parse::<BirthDate>(), Err(ParseError::EmptyInput)));
        assert!(matches!("   ".parse::<BirthDate>(), Err(ParseError::EmptyInput)));
    }

    #[test]
    fn test_partial_dates_rejected() {
        assert!(matches!("1990".parse::<BirthDate>(), Err(ParseError::InvalidFormat(_))));
        assert!(matches!("1990-07".parse::<BirthDate>(), Err(ParseError::InvalidFormat(_))));
        assert!(matches!("07/1990".parse::<BirthDate>(), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(
            "1990-07-04-01".parse::<BirthDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_mixed_delimiters_rejected() {
        let result = "1990-07/04".parse::<BirthDate>();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Mixed delimiters"));
    }

    #[test]
    fn test_invalid_components() {
        assert!(matches!(
            "1990-13-01".parse::<BirthDate>(),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            "0000-01-01".parse::<BirthDate>(),
            Err(ParseError::InvalidYear(0))
        ));
        assert!(matches!(
            "1990-04-31".parse::<BirthDate>(),
            Err(ParseError::InvalidDay {
                month: 4,
                day: 31,
                year: 1990
            })
        ));
        assert!(matches!(
            "1990-07-XX".parse::<BirthDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_leap_day() {
        assert!("2024-02-29".parse::<BirthDate>().is_ok());
        assert!("2000-02-29".parse::<BirthDate>().is_ok());
        assert!(matches!(
            "1900-02-29".parse::<BirthDate>(),
            Err(ParseError::InvalidDay { .. })
        ));
        assert_eq!("2024-02-29".parse::<BirthDate>().unwrap().sign(), Sign::Pisces);
    }

    #[test]
    fn test_month_day_drops_year() {
        let a = BirthDate::new(1950, 12, 25).unwrap();
        let b = BirthDate::new(2020, 12, 25).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.month_day(), b.month_day());
        assert_eq!(a.month_day().to_string(), "12-25");
    }

    #[test]
    fn test_serde_string_format() {
        let date = BirthDate::new(1990, 7, 4).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""1990-07-04""#);
        let parsed: BirthDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
        assert!(serde_json::from_str::<BirthDate>(r#""2023-02-29""#).is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ParseError::EmptyInput.to_string(), "Empty date string");
        assert_eq!(
            ParseError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            ParseError::InvalidDay {
                month: 4,
                day: 31,
                year: 1990
            }
            .to_string(),
            "Invalid day 31 for month 1990-04"
        );
    }
}
