use crate::error::CoreError;
use crate::rules::dates::anniversary_in_year;
use chrono::{Datelike, NaiveDate};

pub const DEFAULT_WINDOW_DAYS: u32 = 7;
pub const MAX_WINDOW_DAYS: u32 = 366;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub date: NaiveDate,
}

pub fn validate_window_days(value: i64) -> Result<u32, CoreError> {
    u32::try_from(value)
        .ok()
        .filter(|days| *days <= MAX_WINDOW_DAYS)
        .ok_or(CoreError::InvalidWindowDays(value))
}

/// First anniversary of `birthday` on or after `reference`.
pub fn next_occurrence(birthday: NaiveDate, reference: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in_year(birthday, reference.year())?;
    if this_year < reference {
        return anniversary_in_year(birthday, reference.year().checked_add(1)?);
    }
    Some(this_year)
}

pub fn days_until(date: NaiveDate, reference: NaiveDate) -> i64 {
    (date - reference).num_days()
}

/// Occurrence date when it lands within `window_days` of `reference`, inclusive.
pub(crate) fn occurrence_within(
    birthday: NaiveDate,
    reference: NaiveDate,
    window_days: u32,
) -> Option<NaiveDate> {
    let next = next_occurrence(birthday, reference)?;
    let days = days_until(next, reference);
    (0..=i64::from(window_days)).contains(&days).then_some(next)
}

/// Chronological order; ties keep their existing order.
pub fn sort_by_date(items: &mut [UpcomingBirthday]) {
    items.sort_by_key(|item| item.date);
}
