//! # Addrbook Architecture
//!
//! Addrbook is a small contact manager: names, phone numbers and birthdays, with a report of
//! whose birthday is coming up this week. The library holds all of the behavior; the binary
//! is a line-oriented REPL on top of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Flags, logging setup, prompt, stdin/stdout               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One line in, one CmdResult out                           │
//! │  - Single error boundary, write-through persistence         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Parse a line, one handler per command                    │
//! │  - Operates on AddressBook, returns messages                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (model.rs, book.rs) and Storage (store/)             │
//! │  - Validated fields, Record, AddressBook                    │
//! │  - BookStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or exits the process.
//!
//! ## Module Overview
//!
//! - [`api`]: Session facade driving one command line at a time
//! - [`commands`]: Input parsing and command handlers
//! - [`book`]: The in-memory address book and upcoming-birthday query
//! - [`model`]: `Name`, `Phone`, `Birthday`, `Record`
//! - [`store`]: Persistence trait and implementations
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
