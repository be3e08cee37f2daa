//! # Storage Layer
//!
//! Persistence for the address book. The [`BookStore`] trait lets the session work against
//! different backends:
//!
//! - [`fs::FileStore`]: production storage, one JSON file
//! - [`memory::InMemoryStore`]: keeps the encoded snapshot in memory, for tests
//!
//! ## Storage Format
//!
//! The whole book is written as a single versioned snapshot:
//!
//! ```text
//! {
//!   "version": 1,
//!   "contacts": [
//!     { "name": "alice", "phones": ["1234567890"], "birthday": "05.03.1990" }
//!   ]
//! }
//! ```
//!
//! `contacts` is in insertion order. Every field is re-validated when read back.

use crate::book::AddressBook;
use crate::error::{BookError, Result};
use crate::model::Record;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

pub const FORMAT_VERSION: u32 = 1;

/// Abstract interface for address book persistence.
pub trait BookStore {
    /// Load the stored book. A store that has never been written yields an empty book.
    fn load(&self) -> Result<AddressBook>;

    /// Overwrite the stored book with `book`.
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}

#[derive(Deserialize)]
struct SnapshotHeader {
    version: u32,
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    contacts: &'a [Record],
}

#[derive(Deserialize)]
struct Snapshot {
    #[serde(default)]
    contacts: Vec<Record>,
}

pub fn encode(book: &AddressBook) -> Result<String> {
    let snapshot = SnapshotRef {
        version: FORMAT_VERSION,
        contacts: book.records(),
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

pub fn decode(content: &str) -> Result<AddressBook> {
    let header: SnapshotHeader = serde_json::from_str(content)?;
    if header.version != FORMAT_VERSION {
        return Err(BookError::UnsupportedVersion(header.version));
    }
    let snapshot: Snapshot = serde_json::from_str(content)?;
    Ok(AddressBook::from_records(snapshot.contacts))
}
