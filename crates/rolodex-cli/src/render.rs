use crate::commands::Reply;
use crate::util::format_upcoming_date;
use anyhow::Result;
use rolodex_core::dto::{BirthdayDto, RecordDto, UpcomingBirthdayDto};
use serde_json::json;
use std::io::Write;

const HELP: &str = "\
Commands:
  hello                          greet the assistant
  add <name> <phone>             add a contact or append a phone to it
  change <name> <old> <new>      replace one of a contact's phones
  phone <name>                   show a contact's phones
  remove-phone <name> <phone>    remove a phone from a contact
  delete <name>                  delete a contact
  all                            list every contact
  add-birthday <name> <DD.MM.YYYY>
                                 set a contact's birthday
  show-birthday <name>           show a contact's birthday
  birthdays                      list birthdays in the coming week
  close | exit                   leave";

pub fn render<W: Write>(out: &mut W, reply: &Reply, json: bool) -> Result<()> {
    if json {
        if let Some(value) = json_value(reply) {
            serde_json::to_writer_pretty(&mut *out, &value)?;
            writeln!(out)?;
            return Ok(());
        }
    }

    match reply {
        Reply::Message(message) => writeln!(out, "{message}")?,
        Reply::Phones(phones) => writeln!(out, "{}", phones.join("; "))?,
        Reply::Records(records) => {
            if records.is_empty() {
                writeln!(out, "No contacts saved.")?;
            }
            for record in records {
                writeln!(out, "{}", record.describe())?;
            }
        }
        Reply::Birthday { name, birthday } => match birthday {
            Some(birthday) => writeln!(out, "{name}'s birthday: {birthday}")?,
            None => writeln!(out, "{name} doesn't have a birthday set.")?,
        },
        Reply::Upcoming(items) => {
            if items.is_empty() {
                writeln!(out, "No upcoming birthdays this week.")?;
            }
            for item in items {
                writeln!(out, "{}: {}", item.name, format_upcoming_date(item.date))?;
            }
        }
        Reply::Help => writeln!(out, "{HELP}")?,
        Reply::Exit => writeln!(out, "Good bye!")?,
    }
    Ok(())
}

fn json_value(reply: &Reply) -> Option<serde_json::Value> {
    let value = match reply {
        Reply::Phones(phones) => json!(phones),
        Reply::Records(records) => {
            json!(records.iter().map(RecordDto::from).collect::<Vec<_>>())
        }
        Reply::Birthday { name, birthday } => json!(BirthdayDto {
            name: name.clone(),
            birthday: birthday.map(|value| value.to_string()),
        }),
        Reply::Upcoming(items) => {
            json!(items.iter().map(UpcomingBirthdayDto::from).collect::<Vec<_>>())
        }
        Reply::Message(_) | Reply::Help | Reply::Exit => return None,
    };
    Some(value)
}
