use crate::commands::{existing, no_args, Context, Reply};
use crate::shell::error::{ShellError, BIRTHDAY_USAGE, NAME_USAGE};

pub fn add_birthday(ctx: &mut Context<'_>, args: &[&str]) -> Result<Reply, ShellError> {
    let [name, birthday] = args else {
        return Err(ShellError::Usage(BIRTHDAY_USAGE));
    };
    existing(ctx.book, name)?.add_birthday(birthday)?;
    Ok(Reply::Message("Birthday added."))
}

pub fn show_birthday(ctx: &mut Context<'_>, args: &[&str]) -> Result<Reply, ShellError> {
    let [name] = args else {
        return Err(ShellError::Usage(NAME_USAGE));
    };
    let record = existing(ctx.book, name)?;
    Ok(Reply::Birthday {
        name: record.name().to_string(),
        birthday: record.birthday(),
    })
}

/// Birthdays inside the configured window, in book order.
pub fn upcoming(ctx: &mut Context<'_>, args: &[&str]) -> Result<Reply, ShellError> {
    no_args(args)?;
    let items = ctx
        .book
        .upcoming_birthdays_within(ctx.today, ctx.window_days);
    Ok(Reply::Upcoming(items))
}
