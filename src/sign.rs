//! The twelve sun signs and the calendar rules that pick one for a date.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    APRIL, AUGUST, DECEMBER, FEBRUARY, JANUARY, JULY, JUNE, MARCH, MAY, NOVEMBER, OCTOBER, SEPTEMBER,
};
use crate::content::{self, ContentRecord};
use crate::prelude::*;
use crate::{BirthDate, MonthDay, ParseError, SignRange};

/// One of the twelve fixed zodiac labels, in zodiac order starting at Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Returned when a sign name is not one of the twelve labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sign: {0}")]
pub struct UnknownSign(pub String);

/// Ordered classification rules. The first rule containing the day wins;
/// Pisces is what remains when none do.
const RULES: [(Sign, SignRange); 11] = [
    (Sign::Aries, SignRange::literal((MARCH, 21), (APRIL, 19))),
    (Sign::Taurus, SignRange::literal((APRIL, 20), (MAY, 20))),
    (Sign::Gemini, SignRange::literal((MAY, 21), (JUNE, 20))),
    (Sign::Cancer, SignRange::literal((JUNE, 21), (JULY, 22))),
    (Sign::Leo, SignRange::literal((JULY, 23), (AUGUST, 22))),
    (Sign::Virgo, SignRange::literal((AUGUST, 23), (SEPTEMBER, 22))),
    (Sign::Libra, SignRange::literal((SEPTEMBER, 23), (OCTOBER, 22))),
    (Sign::Scorpio, SignRange::literal((OCTOBER, 23), (NOVEMBER, 21))),
    (Sign::Sagittarius, SignRange::literal((NOVEMBER, 22), (DECEMBER, 21))),
    (Sign::Capricorn, SignRange::literal((DECEMBER, 22), (JANUARY, 19))),
    (Sign::Aquarius, SignRange::literal((JANUARY, 20), (FEBRUARY, 18))),
];

const FALLBACK: Sign = Sign::Pisces;
const FALLBACK_RANGE: SignRange = SignRange::literal((FEBRUARY, 19), (MARCH, 20));

impl Sign {
    /// All signs in zodiac order.
    pub const ALL: [Self; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    /// Classifies a calendar day. Total over every valid month/day pair.
    pub fn from_month_day(day: MonthDay) -> Self {
        for (sign, range) in &RULES {
            tracing::trace!(%day, %sign, %range, "testing sign rule");
            if range.contains(day) {
                return *sign;
            }
        }
        FALLBACK
    }

    /// The inclusive span of days that classify as this sign.
    pub fn range(self) -> SignRange {
        RULES
            .iter()
            .find(|(sign, _)| *sign == self)
            .map_or(FALLBACK_RANGE, |(_, range)| *range)
    }

    /// Position in zodiac order, 0 for Aries through 11 for Pisces.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// The static content record for this sign.
    pub fn content(self) -> &'static ContentRecord {
        content::lookup(self)
    }
}

impl FromStr for Sign {
    type Err = UnknownSign;

    /// Matches sign names case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|sign| sign.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownSign(trimmed.to_owned()))
    }
}

/// Returns the sign for a birth date. The year plays no part.
pub fn classify(date: &BirthDate) -> Sign {
    let sign = Sign::from_month_day(date.month_day());
    tracing::debug!(%date, %sign, "classified birth date");
    sign
}

/// Parses a date string and classifies it.
///
/// # Errors
/// Returns the `ParseError` if the string is not a valid calendar date.
pub fn classify_str(input: &str) -> Result<Sign, ParseError> {
    let date = input.parse::<BirthDate>()?;
    Ok(classify(&date))
}
