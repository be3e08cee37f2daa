use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    /// A name, phone or birthday did not pass its format check.
    #[error("{0}")]
    Validation(String),

    /// A command received the wrong number of arguments.
    #[error("'{command}' takes {expected} argument(s), got {got}. Usage: {usage}")]
    Argument {
        command: String,
        expected: usize,
        got: usize,
        usage: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported address book version: {0}")]
    UnsupportedVersion(u32),

    #[error("Config error: {0}")]
    Config(String),
}

impl BookError {
    pub fn validation(message: impl Into<String>) -> Self {
        BookError::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, BookError>;
