use crate::{BirthDate, MonthDay};

pub fn month_day(month: u8, day: u8) -> MonthDay {
    MonthDay::new(month, day).unwrap_or_else(|e| panic!("bad test month/day {month:02}-{day:02}: {e}"))
}

pub fn birth_date(year: u16, month: u8, day: u8) -> BirthDate {
    BirthDate::new(year, month, day).unwrap_or_else(|e| panic!("bad test date {year}-{month:02}-{day:02}: {e}"))
}
