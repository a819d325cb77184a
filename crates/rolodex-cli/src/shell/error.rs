use rolodex_core::{CoreError, CoreErrorKind};
use thiserror::Error;

pub const ADD_USAGE: &str = "Give me name and phone please.";
pub const CHANGE_USAGE: &str = "Give me name, old phone and new phone please.";
pub const NAME_USAGE: &str = "Enter the name please.";
pub const BIRTHDAY_USAGE: &str = "Give me name and birthday please.";
pub const NO_ARGS_USAGE: &str = "This command takes no arguments.";

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("unknown command: {0}")]
    InvalidCommand(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("contact not found: {0}")]
    ContactNotFound(String),
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ShellError {
    /// The line shown to the person at the prompt.
    pub fn user_message(&self) -> String {
        match self {
            ShellError::InvalidCommand(_) => "Invalid command.".to_string(),
            ShellError::Usage(usage) => (*usage).to_string(),
            ShellError::ContactNotFound(_) => "Contact not found.".to_string(),
            ShellError::Core(err) => match err.kind() {
                CoreErrorKind::Validation => capitalize_sentence(&err.to_string()),
                CoreErrorKind::NotFound => match err {
                    CoreError::PhoneNotFound(_) => "Phone not found.".to_string(),
                    other => capitalize_sentence(&other.to_string()),
                },
            },
        }
    }
}

fn capitalize_sentence(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
