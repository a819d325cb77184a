use crate::commands::{existing, no_args, Context, Reply};
use crate::shell::error::{ShellError, ADD_USAGE, CHANGE_USAGE, NAME_USAGE};
use rolodex_core::domain::ContactRecord;

/// Appends a phone to an existing contact, or creates the contact with it.
pub fn add_contact(ctx: &mut Context<'_>, args: &[&str]) -> Result<Reply, ShellError> {
    let [name, phone] = args else {
        return Err(ShellError::Usage(ADD_USAGE));
    };

    if let Some(record) = ctx.book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok(Reply::Message("Contact updated."));
    }

    let mut record = ContactRecord::new(*name)?;
    record.add_phone(phone)?;
    ctx.book.add_record(record);
    Ok(Reply::Message("Contact added."))
}

pub fn change_contact(ctx: &mut Context<'_>, args: &[&str]) -> Result<Reply, ShellError> {
    let [name, old_phone, new_phone] = args else {
        return Err(ShellError::Usage(CHANGE_USAGE));
    };
    existing(ctx.book, name)?.edit_phone(old_phone, new_phone)?;
    Ok(Reply::Message("Phone updated."))
}

pub fn show_phones(ctx: &mut Context<'_>, args: &[&str]) -> Result<Reply, ShellError> {
    let [name] = args else {
        return Err(ShellError::Usage(NAME_USAGE));
    };
    let record = existing(ctx.book, name)?;
    let phones = record
        .phones()
        .iter()
        .map(|phone| phone.as_str().to_string())
        .collect();
    Ok(Reply::Phones(phones))
}

pub fn remove_phone(ctx: &mut Context<'_>, args: &[&str]) -> Result<Reply, ShellError> {
    let [name, phone] = args else {
        return Err(ShellError::Usage(ADD_USAGE));
    };
    existing(ctx.book, name)?.remove_phone(phone);
    Ok(Reply::Message("Phone removed."))
}

pub fn delete_contact(ctx: &mut Context<'_>, args: &[&str]) -> Result<Reply, ShellError> {
    let [name] = args else {
        return Err(ShellError::Usage(NAME_USAGE));
    };
    ctx.book.delete(name);
    Ok(Reply::Message("Contact deleted."))
}

pub fn show_all(ctx: &mut Context<'_>, args: &[&str]) -> Result<Reply, ShellError> {
    no_args(args)?;
    Ok(Reply::Records(ctx.book.records().cloned().collect()))
}
