use super::{decode, encode, BookStore};
use crate::book::AddressBook;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "addressbook.json";

/// Stores the book as one JSON file, rewritten wholesale on every save.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl BookStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no data file, starting empty");
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let book = decode(&content)?;
        tracing::debug!(path = %self.path.display(), contacts = book.len(), "loaded address book");
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent()?;
        fs::write(&self.path, encode(book)?)?;
        tracing::debug!(path = %self.path.display(), contacts = book.len(), "saved address book");
        Ok(())
    }
}
