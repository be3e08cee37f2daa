//! # API Facade
//!
//! [`AddressBookApi`] is the one entry point a UI drives. It owns the in-memory
//! [`AddressBook`] and a [`BookStore`], and runs each input line through the same cycle:
//!
//! ```text
//! parse -> dispatch to handler -> turn any error into "Error: ..." -> persist -> reply
//! ```
//!
//! [`execute`](AddressBookApi::execute) never returns an error. Whatever goes wrong inside a
//! command (bad phone, wrong argument count, failed save) comes back as an error-level
//! message, so a REPL can keep going. The only fallible step is [`open`](AddressBookApi::open),
//! which loads the initial state.
//!
//! ## Generic Over BookStore
//!
//! - Production: `AddressBookApi<FileStore>`
//! - Testing: `AddressBookApi<InMemoryStore>`

use crate::book::{AddressBook, DEFAULT_UPCOMING_DAYS};
use crate::commands::{self, CmdContext, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStore;
use chrono::{Local, NaiveDate};

pub struct AddressBookApi<S: BookStore> {
    store: S,
    book: AddressBook,
    upcoming_days: i64,
    today: Option<NaiveDate>,
}

impl<S: BookStore> AddressBookApi<S> {
    /// Loads the book from `store`.
    pub fn open(store: S) -> Result<Self> {
        let book = store.load()?;
        Ok(Self {
            store,
            book,
            upcoming_days: DEFAULT_UPCOMING_DAYS,
            today: None,
        })
    }

    pub fn with_upcoming_days(mut self, days: i64) -> Self {
        self.upcoming_days = days;
        self
    }

    /// Pins the date used by the `birthdays` command instead of the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Runs one input line and persists the book afterwards, unless the line ended the
    /// session.
    pub fn execute(&mut self, line: &str) -> CmdResult {
        let ctx = CmdContext {
            today: self.today.unwrap_or_else(|| Local::now().date_naive()),
            upcoming_days: self.upcoming_days,
        };

        let mut result = match commands::run(line, &mut self.book, &ctx) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(error = %e, "command failed");
                CmdResult::reply(CmdMessage::error(format!("Error: {}", e)))
            }
        };

        if !result.exit {
            if let Err(e) = self.save() {
                tracing::warn!(error = %e, "failed to persist address book");
                result.add_message(CmdMessage::error(format!("Error: {}", e)));
            }
        }

        result
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.book)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Direct access for operations that have no REPL command (deleting a contact,
    /// editing or removing a single phone).
    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
