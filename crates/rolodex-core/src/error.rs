use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("phone must be 10 digits")]
    InvalidPhone(String),
    #[error("invalid date format, expected DD.MM.YYYY")]
    InvalidBirthday(String),
    #[error("contact name is required")]
    EmptyName,
    #[error("phone not found: {0}")]
    PhoneNotFound(String),
    #[error("invalid birthday window: {0} days")]
    InvalidWindowDays(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorKind {
    Validation,
    NotFound,
}

impl CoreError {
    pub fn kind(&self) -> CoreErrorKind {
        match self {
            CoreError::InvalidPhone(_)
            | CoreError::InvalidBirthday(_)
            | CoreError::EmptyName
            | CoreError::InvalidWindowDays(_) => CoreErrorKind::Validation,
            CoreError::PhoneNotFound(_) => CoreErrorKind::NotFound,
        }
    }
}
