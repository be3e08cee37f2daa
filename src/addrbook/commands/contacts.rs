use super::helpers::expect_args;
use super::CmdMessage;
use crate::book::AddressBook;
use crate::error::Result;
use crate::model::{Phone, Record};

pub const CONTACT_MISSING: &str = "Contact is missing";
pub const EMPTY_BOOK: &str = "Address book is empty.";

/// `add <name> <phone>`: creates the contact if needed, then appends the phone.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> Result<CmdMessage> {
    let [name, phone] = expect_args::<2>("add", "add <name> <phone>", args)?;

    match book.find_mut(name) {
        Some(record) => record.add_phone(phone)?,
        None => {
            let mut record = Record::new(name)?;
            record.add_phone(phone)?;
            book.add_record(record);
        }
    }
    Ok(CmdMessage::success("Contact added."))
}

/// `change <name> <phone>`: appends the phone to an existing contact.
///
/// Existing numbers are kept; use the library's `Record::edit_phone` to replace one.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> Result<CmdMessage> {
    let [name, phone] = expect_args::<2>("change", "change <name> <phone>", args)?;

    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone)?;
            Ok(CmdMessage::success("Contact changed!"))
        }
        None => Ok(CmdMessage::warning(CONTACT_MISSING)),
    }
}

/// `phone <name>`: the contact's phones, comma separated.
pub fn show_phone(args: &[String], book: &AddressBook) -> Result<CmdMessage> {
    let [name] = expect_args::<1>("phone", "phone <name>", args)?;

    Ok(match book.find(name) {
        Some(record) => CmdMessage::info(
            record
                .phones()
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        None => CmdMessage::warning(CONTACT_MISSING),
    })
}

/// `all`: every contact, one per line.
pub fn show_all(book: &AddressBook) -> CmdMessage {
    if book.is_empty() {
        return CmdMessage::info(EMPTY_BOOK);
    }
    CmdMessage::info(
        book.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookError;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn add_then_show_phone() {
        let mut book = AddressBook::new();
        let msg = add_contact(&args(&["alice", "1234567890"]), &mut book).unwrap();
        assert_eq!(msg.content, "Contact added.");

        let shown = show_phone(&args(&["alice"]), &book).unwrap();
        assert_eq!(shown.content, "1234567890");
    }

    #[test]
    fn add_twice_appends() {
        let mut book = AddressBook::new();
        add_contact(&args(&["alice", "1234567890"]), &mut book).unwrap();
        add_contact(&args(&["alice", "0987654321"]), &mut book).unwrap();

        let shown = show_phone(&args(&["alice"]), &book).unwrap();
        assert_eq!(shown.content, "1234567890, 0987654321");
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn add_rejects_bad_phone_without_creating_contact() {
        let mut book = AddressBook::new();
        let err = add_contact(&args(&["alice", "12345"]), &mut book).unwrap_err();
        assert!(matches!(err, BookError::Validation(_)));
        assert!(book.find("alice").is_none());
    }

    #[test]
    fn show_phone_for_unknown_contact() {
        let book = AddressBook::new();
        let shown = show_phone(&args(&["nobody"]), &book).unwrap();
        assert_eq!(shown.content, CONTACT_MISSING);
    }

    #[test]
    fn change_appends_rather_than_replaces() {
        let mut book = AddressBook::new();
        add_contact(&args(&["alice", "1234567890"]), &mut book).unwrap();

        let msg = change_contact(&args(&["alice", "5555555555"]), &mut book).unwrap();
        assert_eq!(msg.content, "Contact changed!");

        let shown = show_phone(&args(&["alice"]), &book).unwrap();
        assert_eq!(shown.content, "1234567890, 5555555555");
    }

    #[test]
    fn change_unknown_contact() {
        let mut book = AddressBook::new();
        let msg = change_contact(&args(&["bob", "5555555555"]), &mut book).unwrap();
        assert_eq!(msg.content, CONTACT_MISSING);
        assert!(book.is_empty());
    }

    #[test]
    fn show_all_lists_in_insertion_order() {
        let mut book = AddressBook::new();
        assert_eq!(show_all(&book).content, EMPTY_BOOK);

        add_contact(&args(&["bob", "2222222222"]), &mut book).unwrap();
        add_contact(&args(&["alice", "1111111111"]), &mut book).unwrap();
        assert_eq!(
            show_all(&book).content,
            "Contact name: bob, Phones: 2222222222, Birthday: \n\
             Contact name: alice, Phones: 1111111111, Birthday: "
        );
    }

    #[test]
    fn argument_counts_are_checked() {
        let mut book = AddressBook::new();
        assert!(add_contact(&args(&["alice"]), &mut book).is_err());
        assert!(change_contact(&args(&[]), &mut book).is_err());
        assert!(show_phone(&args(&[]), &book).is_err());
        assert!(show_phone(&args(&["a", "b"]), &book).is_err());
    }
}
