pub mod birthday;
pub mod book;
pub mod phone;
pub mod record;

pub use birthday::{BirthdayDate, BIRTHDAY_FORMAT};
pub use book::AddressBook;
pub use phone::{PhoneNumber, PHONE_DIGITS};
pub use record::ContactRecord;
