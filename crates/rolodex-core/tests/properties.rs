use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use rolodex_core::domain::{AddressBook, BirthdayDate, ContactRecord, PhoneNumber};
use rolodex_core::error::{CoreError, CoreErrorKind};
use rolodex_core::rules::{days_until, next_occurrence};

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1i32..=9999, 1u32..=12, 1u32..=31)
        .prop_filter_map("real calendar date", |(y, m, d)| {
            NaiveDate::from_ymd_opt(y, m, d)
        })
}

proptest! {
    #[test]
    fn phone_accepts_any_ten_digits(value in "[0-9]{10}") {
        let phone = PhoneNumber::new(&value).expect("valid phone");
        prop_assert_eq!(phone.as_str(), value.as_str());
    }

    #[test]
    fn phone_rejects_other_lengths(value in "[0-9]{0,9}|[0-9]{11,16}") {
        let err = PhoneNumber::new(&value).unwrap_err();
        prop_assert_eq!(err.kind(), CoreErrorKind::Validation);
    }

    #[test]
    fn phone_rejects_non_digits(
        prefix in "[0-9]{0,9}",
        junk in "[^0-9]",
        suffix in "[0-9]{0,9}"
    ) {
        let value = format!("{prefix}{junk}{suffix}");
        prop_assert!(
            matches!(PhoneNumber::new(&value), Err(CoreError::InvalidPhone(_))),
            "accepted {:?}",
            value
        );
    }

    #[test]
    fn birthday_round_trips_text(date in any_date()) {
        let text = format!("{:02}.{:02}.{:04}", date.day(), date.month(), date.year());
        let birthday = BirthdayDate::parse(&text).expect("valid birthday");
        prop_assert_eq!(birthday.date(), date);
        prop_assert_eq!(birthday.to_string(), text);
    }

    #[test]
    fn next_occurrence_is_within_a_year(birthday in any_date(), reference in any_date()) {
        prop_assume!(reference.year() < 9999);
        let next = next_occurrence(birthday, reference).expect("in range");
        let days = days_until(next, reference);
        prop_assert!((0..=366).contains(&days));
        prop_assert_eq!(next.month(), birthday.month());
    }

    #[test]
    fn edit_phone_with_missing_old_value_leaves_record(
        phones in proptest::collection::vec("[0-9]{10}", 0..5),
        missing in "[a-z]{10}",
        replacement in "[0-9]{10}"
    ) {
        let mut record = ContactRecord::new("Ada").expect("record");
        for phone in &phones {
            record.add_phone(phone).expect("phone");
        }
        let before = record.clone();
        let err = record.edit_phone(&missing, &replacement).unwrap_err();
        prop_assert_eq!(err.kind(), CoreErrorKind::NotFound);
        prop_assert_eq!(record, before);
    }

    #[test]
    fn add_record_keeps_names_unique(names in proptest::collection::vec("[A-C]", 1..12)) {
        let mut book = AddressBook::new();
        for name in &names {
            book.add_record(ContactRecord::new(name.as_str()).expect("record"));
        }
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(book.len(), unique.len());
        for record in book.records() {
            prop_assert!(book.find(record.name()).is_some());
        }
    }
}
