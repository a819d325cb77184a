pub mod error;
pub mod parse;

use crate::commands::{dispatch, Context, Reply};
use crate::render::render;
use anyhow::Result;
use chrono::NaiveDate;
use rolodex_config::ShellConfig;
use rolodex_core::domain::AddressBook;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

use self::error::ShellError;
use self::parse::{parse_input, ShellCommand};

#[derive(Debug, Clone, Copy)]
pub struct ShellOptions {
    pub today: NaiveDate,
    pub window_days: u32,
    pub json: bool,
}

/// Read-eval-print loop over an address book it does not own.
pub struct Shell<'a> {
    config: &'a ShellConfig,
    options: ShellOptions,
}

impl<'a> Shell<'a> {
    pub fn new(config: &'a ShellConfig, options: ShellOptions) -> Self {
        Self { config, options }
    }

    /// Runs until `exit`/`close` or end of input. Command errors are printed and the loop continues.
    pub fn run<R: BufRead, W: Write>(
        &self,
        book: &mut AddressBook,
        mut input: R,
        mut output: W,
    ) -> Result<()> {
        writeln!(output, "{}", self.config.greeting)?;
        let mut line = String::new();
        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                render(&mut output, &Reply::Exit, false)?;
                debug!("end of input");
                break;
            }

            let reply = match self.eval(book, &line) {
                Some(Ok(reply)) => reply,
                Some(Err(err)) => {
                    debug!(error = %err, "command failed");
                    writeln!(output, "{}", err.user_message())?;
                    continue;
                }
                None => continue,
            };

            render(&mut output, &reply, self.options.json)?;
            if reply == Reply::Exit {
                break;
            }
        }
        output.flush()?;
        Ok(())
    }

    fn eval(&self, book: &mut AddressBook, line: &str) -> Option<Result<Reply, ShellError>> {
        let parsed = parse_input(line)?;
        let Ok(command) = ShellCommand::from_str(&parsed.command) else {
            return Some(Err(ShellError::InvalidCommand(parsed.command)));
        };
        debug!(?command, args = parsed.args.len(), "dispatch");

        let mut ctx = Context {
            book,
            today: self.options.today,
            window_days: self.options.window_days,
        };
        Some(dispatch(&mut ctx, command, &parsed.args))
    }
}

#[cfg(test)]
mod tests {
    use super::{Shell, ShellOptions};
    use chrono::NaiveDate;
    use rolodex_config::ShellConfig;
    use rolodex_core::domain::AddressBook;
    use std::io::Cursor;

    fn session(book: &mut AddressBook, script: &str, json: bool) -> String {
        let config = ShellConfig::default();
        let shell = Shell::new(
            &config,
            ShellOptions {
                today: NaiveDate::from_ymd_opt(2024, 12, 30).unwrap(),
                window_days: 7,
                json,
            },
        );
        let mut out = Vec::new();
        shell.run(book, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn greets_and_says_goodbye() {
        let mut book = AddressBook::new();
        let out = session(&mut book, "hello\nexit\n", false);
        assert!(out.starts_with("Welcome to the assistant bot!\n"));
        assert!(out.contains("How can I help you?"));
        assert!(out.trim_end().ends_with("Good bye!"));
    }

    #[test]
    fn stops_reading_after_exit() {
        let mut book = AddressBook::new();
        session(&mut book, "close\nadd Ada 1111111111\n", false);
        assert!(book.is_empty());
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let mut book = AddressBook::new();
        let out = session(
            &mut book,
            "dance\nadd Ada 12\nphone Grace\nadd Ada\nadd Ada 1111111111\nexit\n",
            false,
        );
        assert!(out.contains("Invalid command."));
        assert!(out.contains("Phone must be 10 digits."));
        assert!(out.contains("Contact not found."));
        assert!(out.contains("Give me name and phone please."));
        assert!(out.contains("Contact added."));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn end_of_input_ends_session() {
        let mut book = AddressBook::new();
        let out = session(&mut book, "add Ada 1111111111\n\n", false);
        assert!(out.contains("Contact added."));
        assert!(out.trim_end().ends_with("Good bye!"));
    }

    #[test]
    fn birthdays_across_new_year() {
        let mut book = AddressBook::new();
        let out = session(
            &mut book,
            "add Grace 2222222222\nadd-birthday Grace 02.01.1985\nbirthdays\nexit\n",
            false,
        );
        assert!(out.contains("Grace: 2025.01.02"));
    }

    #[test]
    fn json_mode_prints_records() {
        let mut book = AddressBook::new();
        let out = session(&mut book, "add Ada 1111111111\nall\nexit\n", true);
        assert!(out.contains("\"name\": \"Ada\""));
        assert!(out.contains("\"1111111111\""));
    }
}
