use crate::error::CoreError;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A calendar date parsed from `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthdayDate(NaiveDate);

impl BirthdayDate {
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidBirthday(value.to_string());
        let (day, month, year) = split_parts(value).ok_or_else(invalid)?;
        if year == 0 {
            return Err(invalid());
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

// chrono accepts unpadded fields for %d/%m, so the shape is checked by hand.
fn split_parts(value: &str) -> Option<(u32, u32, i32)> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'.' || bytes[5] != b'.' {
        return None;
    }
    let digits = |range: std::ops::Range<usize>| {
        let part = value.get(range)?;
        part.bytes().all(|b| b.is_ascii_digit()).then_some(part)
    };
    let day = digits(0..2)?.parse().ok()?;
    let month = digits(3..5)?.parse().ok()?;
    let year = digits(6..10)?.parse().ok()?;
    Some((day, month, year))
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl FromStr for BirthdayDate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
