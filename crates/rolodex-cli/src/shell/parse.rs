use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Hello,
    Add,
    Change,
    Phone,
    RemovePhone,
    Delete,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Help,
    Exit,
}

impl FromStr for ShellCommand {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "hello" => Ok(ShellCommand::Hello),
            "add" => Ok(ShellCommand::Add),
            "change" => Ok(ShellCommand::Change),
            "phone" => Ok(ShellCommand::Phone),
            "remove-phone" => Ok(ShellCommand::RemovePhone),
            "delete" => Ok(ShellCommand::Delete),
            "all" => Ok(ShellCommand::All),
            "add-birthday" => Ok(ShellCommand::AddBirthday),
            "show-birthday" => Ok(ShellCommand::ShowBirthday),
            "birthdays" => Ok(ShellCommand::Birthdays),
            "help" => Ok(ShellCommand::Help),
            "close" | "exit" => Ok(ShellCommand::Exit),
            _ => Err(()),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParsedInput<'a> {
    /// Lowercased command word.
    pub command: String,
    pub args: Vec<&'a str>,
}

/// Splits a line into a lowercased command word and its arguments.
///
/// Returns `None` for blank lines. `good bye` is folded into `exit`.
pub fn parse_input(line: &str) -> Option<ParsedInput<'_>> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args: Vec<&str> = tokens.collect();

    if command == "good" && args.len() == 1 && args[0].eq_ignore_ascii_case("bye") {
        return Some(ParsedInput {
            command: "exit".to_string(),
            args: Vec::new(),
        });
    }

    Some(ParsedInput { command, args })
}
