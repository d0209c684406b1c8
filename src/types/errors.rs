//! Error types for the assistant.

use std::path::PathBuf;

use thiserror::Error;

/// Default result type of the crate.
pub type AssistantResult<T> = Result<T, AssistantError>;

/// Errors that can escape a command.
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("The file {} was not found.", .0.display())]
    LogFileNotFound(PathBuf),

    #[error("An error occurred while reading the file {}: {}", .0.display(), .1)]
    LogFileRead(PathBuf, #[source] std::io::Error),

    #[error("Fibonacci number for n = {0} does not fit in 128 bits")]
    Overflow(i64),

    #[error("{0}")]
    Other(String),
}

impl AssistantError {
    /// Creates a generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}
