use crate::domain::birthday::BirthdayDate;
use crate::domain::phone::PhoneNumber;
use crate::error::CoreError;
use std::fmt;

/// One contact: a name, its phone numbers in insertion order, and an optional birthday.
///
/// Every mutating method validates its input before touching the record, so a
/// failed call leaves the record exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    name: String,
    phones: Vec<PhoneNumber>,
    birthday: Option<BirthdayDate>,
}

impl ContactRecord {
    pub fn new(name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::EmptyName);
        }
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<BirthdayDate> {
        self.birthday
    }

    /// Appends a phone. Duplicates are kept.
    pub fn add_phone(&mut self, value: &str) -> Result<(), CoreError> {
        let phone = PhoneNumber::new(value)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Removes every phone equal to `value`; absent values are ignored.
    pub fn remove_phone(&mut self, value: &str) {
        self.phones.retain(|phone| phone.as_str() != value);
    }

    /// Replaces the first phone equal to `old_value`, keeping its position.
    pub fn edit_phone(&mut self, old_value: &str, new_value: &str) -> Result<(), CoreError> {
        let index = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == old_value)
            .ok_or_else(|| CoreError::PhoneNotFound(old_value.to_string()))?;
        let replacement = PhoneNumber::new(new_value)?;
        self.phones[index] = replacement;
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == value)
    }

    /// Sets the birthday, replacing any earlier one.
    pub fn add_birthday(&mut self, value: &str) -> Result<(), CoreError> {
        let birthday = BirthdayDate::parse(value)?;
        self.birthday = Some(birthday);
        Ok(())
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ContactRecord;
    use crate::error::{CoreError, CoreErrorKind};

    fn record_with_phones(phones: &[&str]) -> ContactRecord {
        let mut record = ContactRecord::new("Ada").unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    #[test]
    fn new_record_has_no_phones_or_birthday() {
        let record = ContactRecord::new("Ada").unwrap();
        assert_eq!(record.name(), "Ada");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn new_record_rejects_blank_name() {
        assert_eq!(ContactRecord::new("  "), Err(CoreError::EmptyName));
    }

    #[test]
    fn add_phone_keeps_order_and_duplicates() {
        let record = record_with_phones(&["1111111111", "2222222222", "1111111111"]);
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["1111111111", "2222222222", "1111111111"]);
    }

    #[test]
    fn add_phone_rejects_invalid_without_mutation() {
        let mut record = record_with_phones(&["1111111111"]);
        let err = record.add_phone("12345").unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::Validation);
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn remove_phone_drops_every_match() {
        let mut record = record_with_phones(&["1111111111", "2222222222", "1111111111"]);
        record.remove_phone("1111111111");
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].as_str(), "2222222222");
    }

    #[test]
    fn remove_phone_ignores_absent_value() {
        let mut record = record_with_phones(&["1111111111"]);
        record.remove_phone("9999999999");
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn edit_phone_replaces_first_match_in_place() {
        let mut record = record_with_phones(&["1111111111", "2222222222", "2222222222"]);
        record.edit_phone("2222222222", "3333333333").unwrap();
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["1111111111", "3333333333", "2222222222"]);
    }

    #[test]
    fn edit_phone_with_same_value_leaves_record_unchanged() {
        let mut record = record_with_phones(&["1111111111", "2222222222"]);
        let before = record.clone();
        record.edit_phone("2222222222", "2222222222").unwrap();
        assert_eq!(record, before);
    }

    #[test]
    fn edit_phone_reports_missing_old_value() {
        let mut record = record_with_phones(&["1111111111"]);
        let before = record.clone();
        let err = record.edit_phone("9999999999", "2222222222").unwrap_err();
        assert_eq!(err, CoreError::PhoneNotFound("9999999999".to_string()));
        assert_eq!(err.kind(), CoreErrorKind::NotFound);
        assert_eq!(record, before);
    }

    #[test]
    fn edit_phone_validates_new_value() {
        let mut record = record_with_phones(&["1111111111"]);
        let before = record.clone();
        let err = record.edit_phone("1111111111", "not-a-phone").unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::Validation);
        assert_eq!(record, before);
    }

    #[test]
    fn find_phone_returns_match_or_none() {
        let record = record_with_phones(&["1111111111"]);
        assert_eq!(
            record.find_phone("1111111111").map(|p| p.as_str()),
            Some("1111111111")
        );
        assert!(record.find_phone("2222222222").is_none());
    }

    #[test]
    fn add_birthday_last_write_wins() {
        let mut record = ContactRecord::new("Ada").unwrap();
        record.add_birthday("10.12.1815").unwrap();
        record.add_birthday("11.12.1815").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "11.12.1815");
    }

    #[test]
    fn add_birthday_failure_keeps_previous_value() {
        let mut record = ContactRecord::new("Ada").unwrap();
        record.add_birthday("10.12.1815").unwrap();
        assert!(record.add_birthday("1815-12-10").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "10.12.1815");
    }

    #[test]
    fn describe_lists_phones_and_birthday() {
        let mut record = record_with_phones(&["1111111111", "2222222222"]);
        assert_eq!(
            record.describe(),
            "Contact name: Ada, phones: 1111111111; 2222222222"
        );
        record.add_birthday("10.12.1815").unwrap();
        assert_eq!(
            record.describe(),
            "Contact name: Ada, phones: 1111111111; 2222222222, birthday: 10.12.1815"
        );
    }
}
