use chrono::{Datelike, NaiveDate};

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// The date `date` falls on in `year`. Feb 29 maps to Feb 28 outside leap years.
///
/// Returns `None` only when `year` is outside chrono's supported range.
pub fn anniversary_in_year(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    let (month, day) = (date.month(), date.day());
    if month == 2 && day == 29 && !is_leap_year(year) {
        return NaiveDate::from_ymd_opt(year, 2, 28);
    }
    NaiveDate::from_ymd_opt(year, month, day)
}
