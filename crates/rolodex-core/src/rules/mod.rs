pub mod birthdays;
pub mod dates;

pub use birthdays::{
    days_until, next_occurrence, sort_by_date, validate_window_days, UpcomingBirthday,
    DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS,
};
pub use dates::{anniversary_in_year, is_leap_year};
