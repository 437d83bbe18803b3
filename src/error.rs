//! Error handling for WearVis-RS
//!
//! This module defines custom error types and a Result alias for use
//! throughout the crate. Recoverable failures only exist at the ingestion
//! and configuration boundaries; precondition violations inside the core
//! (bad column indices, out-of-range viewport fractions) are caller bugs
//! and fail fast with assertions instead.

use thiserror::Error;

/// Main error type for WearVis-RS operations
#[derive(Error, Debug)]
pub enum WearVisError {
    /// IO errors while reading sensor logs or option files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed content in a sensor log file
    #[error("Format error at line {line}: {message}")]
    Format { line: usize, message: String },

    /// A table row whose value count does not match the table's column count
    #[error("Row width mismatch: expected {expected} values, got {actual}")]
    RowWidth { expected: usize, actual: usize },

    /// Errors related to render-option loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<WearVisError>,
    },
}

impl WearVisError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        WearVisError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create a format error for the given 1-based line number
    pub fn format(line: usize, message: impl Into<String>) -> Self {
        WearVisError::Format {
            line,
            message: message.into(),
        }
    }
}

/// Result type alias for WearVis-RS operations
pub type Result<T> = std::result::Result<T, WearVisError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
