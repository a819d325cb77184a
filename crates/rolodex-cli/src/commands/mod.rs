use crate::shell::error::{ShellError, NO_ARGS_USAGE};
use crate::shell::parse::ShellCommand;
use chrono::NaiveDate;
use rolodex_core::domain::{AddressBook, BirthdayDate, ContactRecord};
use rolodex_core::rules::UpcomingBirthday;

pub mod birthdays;
pub mod completions;
pub mod contacts;

pub struct Context<'a> {
    pub book: &'a mut AddressBook,
    pub today: NaiveDate,
    pub window_days: u32,
}

/// What a command produced, before it is rendered as text or JSON.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Message(&'static str),
    Phones(Vec<String>),
    Records(Vec<ContactRecord>),
    Birthday {
        name: String,
        birthday: Option<BirthdayDate>,
    },
    Upcoming(Vec<UpcomingBirthday>),
    Help,
    Exit,
}

pub fn dispatch(
    ctx: &mut Context<'_>,
    command: ShellCommand,
    args: &[&str],
) -> Result<Reply, ShellError> {
    match command {
        ShellCommand::Hello => {
            no_args(args)?;
            Ok(Reply::Message("How can I help you?"))
        }
        ShellCommand::Add => contacts::add_contact(ctx, args),
        ShellCommand::Change => contacts::change_contact(ctx, args),
        ShellCommand::Phone => contacts::show_phones(ctx, args),
        ShellCommand::RemovePhone => contacts::remove_phone(ctx, args),
        ShellCommand::Delete => contacts::delete_contact(ctx, args),
        ShellCommand::All => contacts::show_all(ctx, args),
        ShellCommand::AddBirthday => birthdays::add_birthday(ctx, args),
        ShellCommand::ShowBirthday => birthdays::show_birthday(ctx, args),
        ShellCommand::Birthdays => birthdays::upcoming(ctx, args),
        ShellCommand::Help => {
            no_args(args)?;
            Ok(Reply::Help)
        }
        ShellCommand::Exit => Ok(Reply::Exit),
    }
}

pub(crate) fn no_args(args: &[&str]) -> Result<(), ShellError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(ShellError::Usage(NO_ARGS_USAGE))
    }
}

pub(crate) fn existing<'b>(
    book: &'b mut AddressBook,
    name: &str,
) -> Result<&'b mut ContactRecord, ShellError> {
    book.find_mut(name)
        .ok_or_else(|| ShellError::ContactNotFound(name.to_string()))
}
