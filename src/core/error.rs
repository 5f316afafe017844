//! Error types for the sift library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using sift's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while triaging a metrics report.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error reading the report or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report file not found.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The report is not a JSON object keyed by class name.
    #[error("Parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A class in the target namespace carries an unusable metrics record.
    #[error("Malformed metrics for {class}: {message}")]
    MalformedMetrics { class: String, message: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new parse error for the report at `path`.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a malformed-metrics error for `class`.
    pub fn malformed(class: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedMetrics {
            class: class.into(),
            message: message.into(),
        }
    }

    /// Create a new config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
