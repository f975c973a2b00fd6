/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month numbers used by the sign rules
pub const JANUARY: u8 = 1;
pub const FEBRUARY: u8 = 2;
pub const MARCH: u8 = 3;
pub const APRIL: u8 = 4;
pub const MAY: u8 = 5;
pub const JUNE: u8 = 6;
pub const JULY: u8 = 7;
pub const AUGUST: u8 = 8;
pub const SEPTEMBER: u8 = 9;
pub const OCTOBER: u8 = 10;
pub const NOVEMBER: u8 = 11;
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Number of distinct month/day pairs a year-less calendar day can take (leap day included)
pub const DAYS_IN_ZODIAC_YEAR: usize = 366;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format, as emitted by HTML date inputs)
pub const DATE_SEPARATOR: char = '-';
/// Month-first format separator (legacy US format)
pub const MONTH_FIRST_SEPARATOR: char = '/';
/// Either case separates the calendar date from a time-of-day suffix (`1990-07-04T10:30`)
pub const TIME_DESIGNATORS: [char; 2] = ['T', 't'];
/// Range separator between the start and end of a sign's span
pub const RANGE_SEPARATOR: char = '/';
