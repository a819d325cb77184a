use crate::domain::record::ContactRecord;
use crate::rules::birthdays::{occurrence_within, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
use chrono::NaiveDate;

/// In-memory contacts keyed by name, iterated in insertion order.
///
/// Replacing a record keeps the position of the one it replaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<ContactRecord>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record` under its name and returns the record it replaced, if any.
    pub fn add_record(&mut self, record: ContactRecord) -> Option<ContactRecord> {
        match self.position(record.name()) {
            Some(index) => Some(std::mem::replace(&mut self.records[index], record)),
            None => {
                self.records.push(record);
                None
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.iter().find(|record| record.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.iter_mut().find(|record| record.name() == name)
    }

    /// Removes the record named `name`; absent names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        let index = self.position(name)?;
        Some(self.records.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }

    pub fn upcoming_birthdays(&self, reference: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(reference, DEFAULT_WINDOW_DAYS)
    }

    /// Birthdays falling 0..=`window_days` days after `reference`, in book order.
    pub fn upcoming_birthdays_within(
        &self,
        reference: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = occurrence_within(birthday.date(), reference, window_days)?;
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    date,
                })
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|record| record.name() == name)
    }
}
