//! # Command Layer
//!
//! One handler per user-facing command. Handlers take the argument tokens that followed the
//! command word plus the [`AddressBook`], and return the message to show. They never print and
//! never touch persistence; the session in [`api`](crate::api) does both.
//!
//! "Contact is missing" style outcomes are ordinary messages (at [`MessageLevel::Warning`]),
//! not errors. Errors are reserved for bad input: a field that fails validation or the wrong
//! number of arguments.

use crate::book::{AddressBook, DEFAULT_UPCOMING_DAYS};
use crate::error::Result;
use chrono::{Local, NaiveDate};

pub mod birthdays;
pub mod contacts;
pub mod helpers;

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye! :)";
pub const INVALID_COMMAND: &str = "Invalid command.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Outcome of one command line: what to show, and whether the session ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub exit: bool,
}

impl CmdResult {
    pub fn reply(message: CmdMessage) -> Self {
        Self {
            messages: vec![message],
            exit: false,
        }
    }

    pub fn exit(message: CmdMessage) -> Self {
        Self {
            messages: vec![message],
            exit: true,
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// All message contents joined with newlines, as they would be printed.
    pub fn text(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Inputs a handler may need besides the book itself.
#[derive(Debug, Clone, Copy)]
pub struct CmdContext {
    pub today: NaiveDate,
    pub upcoming_days: i64,
}

impl Default for CmdContext {
    fn default() -> Self {
        Self {
            today: Local::now().date_naive(),
            upcoming_days: DEFAULT_UPCOMING_DAYS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
    Unknown(String),
}

impl Command {
    pub fn from_word(word: &str) -> Self {
        match word {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add_birthday" => Command::AddBirthday,
            "show_birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "close" | "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Splits a line on whitespace into a lowercased command word and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.trim().to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}

/// Parses and runs one input line against `book`.
pub fn run(line: &str, book: &mut AddressBook, ctx: &CmdContext) -> Result<CmdResult> {
    let Some((word, args)) = parse_input(line) else {
        return Ok(CmdResult::reply(CmdMessage::warning(INVALID_COMMAND)));
    };

    let command = Command::from_word(&word);
    tracing::debug!(?command, args = args.len(), "dispatching command");

    let message = match command {
        Command::Exit => return Ok(CmdResult::exit(CmdMessage::info(FAREWELL))),
        Command::Hello => CmdMessage::info(GREETING),
        Command::Add => contacts::add_contact(&args, book)?,
        Command::Change => contacts::change_contact(&args, book)?,
        Command::Phone => contacts::show_phone(&args, book)?,
        Command::All => contacts::show_all(book),
        Command::AddBirthday => birthdays::add_birthday(&args, book)?,
        Command::ShowBirthday => birthdays::show_birthday(&args, book)?,
        Command::Birthdays => birthdays::show_upcoming(book, ctx.today, ctx.upcoming_days),
        Command::Unknown(_) => CmdMessage::warning(INVALID_COMMAND),
    };

    Ok(CmdResult::reply(message))
}
