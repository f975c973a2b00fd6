use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU16;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

/// A day-of-month value. Only ever constructed after checking it against
/// the month (and year, where one is known) it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the month is out of range, or
    /// `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ParseError> {
        Month::new(month)?;
        let invalid = ParseError::InvalidDay {
            month,
            day: value,
            year,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > days_in_month(year, month) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

/// A calendar day with no year attached, e.g. `07-04`.
///
/// February 29th is accepted since some year always has it. Ordering is by
/// month first, then day, which is the order days fall within a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}-{:02}", "month.get()", "day.get()")]
pub struct MonthDay {
    month: Month,
    day:   Day,
}

impl MonthDay {
    /// Creates a new `MonthDay`, validating the day against the longest
    /// version of the month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` or `ParseError::InvalidMonthDay`.
    pub fn new(month: u8, day: u8) -> Result<Self, ParseError> {
        let month_typed = Month::new(month)?;
        let day_nz = NonZeroU8::new(day)
            .filter(|_| day <= max_days_in_month(month))
            .ok_or(ParseError::InvalidMonthDay { month, day })?;
        Ok(Self {
            month: month_typed,
            day:   Day(day_nz),
        })
    }

    /// Builds a `MonthDay` from literals in const tables. Out-of-range
    /// values fail const evaluation.
    pub(crate) const fn literal(month: u8, day: u8) -> Self {
        assert!(month >= JANUARY && month <= MAX_MONTH, "month out of range");
        assert!(day >= MIN_DAY && day <= max_days_in_month(month), "day out of range");
        match (NonZeroU8::new(month), NonZeroU8::new(day)) {
            (Some(m), Some(d)) => Self {
                month: Month(m),
                day:   Day(d),
            },
            _ => panic!("month and day must be non-zero"),
        }
    }

    /// Pairs an already validated month and day.
    pub(crate) const fn from_parts(month: Month, day: Day) -> Self {
        Self { month, day }
    }

    pub const fn month(self) -> Month {
        self.month
    }

    pub const fn day(self) -> Day {
        self.day
    }

    /// Every month/day pair from January 1st to December 31st, leap day included.
    pub fn all() -> impl Iterator<Item = Self> {
        (JANUARY..=MAX_MONTH).flat_map(|month| {
            (MIN_DAY..=max_days_in_month(month)).filter_map(move |day| Self::new(month, day).ok())
        })
    }
}

impl FromStr for MonthDay {
    type Err = ParseError;

    /// Parses `MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let (month, day) = trimmed
            .split_once(DATE_SEPARATOR)
            .ok_or_else(|| ParseError::InvalidFormat(trimmed.to_owned()))?;
        let month = parse_digits::<u8>(month.trim())?;
        let day = parse_digits::<u8>(day.trim())?;
        Self::new(month, day)
    }
}

impl Serialize for MonthDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MonthDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

/// Parses an unsigned field made only of ASCII digits. `str::parse` alone
/// would also take a leading `+`.
pub(crate) fn parse_digits<T: FromStr>(s: &str) -> Result<T, ParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Longest a month can be in any year.
pub const fn max_days_in_month(month: u8) -> u8 {
    if month == FEBRUARY {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
