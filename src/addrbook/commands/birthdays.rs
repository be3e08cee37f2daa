use super::helpers::expect_args;
use super::CmdMessage;
use crate::book::AddressBook;
use crate::error::Result;
use chrono::NaiveDate;

/// `add_birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> Result<CmdMessage> {
    let [name, date] = expect_args::<2>("add_birthday", "add_birthday <name> <DD.MM.YYYY>", args)?;

    match book.find_mut(name) {
        Some(record) => {
            record.add_birthday(date)?;
            Ok(CmdMessage::success("Birthday added."))
        }
        None => Ok(CmdMessage::warning("Contact is missing.")),
    }
}

/// `show_birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> Result<CmdMessage> {
    let [name] = expect_args::<1>("show_birthday", "show_birthday <name>", args)?;

    Ok(match book.find(name).and_then(|r| r.birthday()) {
        Some(birthday) => CmdMessage::info(birthday.to_string()),
        None => CmdMessage::warning("Birthday not found or contact is missing."),
    })
}

/// `birthdays`: who to congratulate within the next `days` days, one `Name - Date` per line.
pub fn show_upcoming(book: &AddressBook, today: NaiveDate, days: i64) -> CmdMessage {
    let upcoming = book.upcoming_birthdays(today, days);
    if upcoming.is_empty() {
        return CmdMessage::info("No upcoming birthdays.");
    }
    CmdMessage::info(
        upcoming
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
    )
}
