//! Error types for tablesort.
//!
//! The sorting core never fails: odd input (row-border clicks, empty tables,
//! ragged rows) degrades to a no-op. Errors exist only at the edges, where the
//! host reads files, parses arguments and drives the terminal.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`InputError`] - HTML file/stdin reading failures
//!   - [`ActivationParseError`] - Malformed `--sort TABLE:COLUMN` values
//!   - [`crate::config::ConfigError`] - Config file failures
//!   - [`crate::logging::LoggingError`] - Subscriber setup failures
//!   - `std::io::Error` - Terminal failures

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// Every layer's error converts into `AppError` via `From`, so `main` can use `?`
/// throughout.
///
/// # Examples
///
/// ```no_run
/// use tablesort::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     let _html = read_document()?;
///     Ok(())
/// }
/// # fn read_document() -> Result<String, InputError> { Ok(String::new()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the HTML document.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// A batch activation argument could not be parsed or resolved.
    #[error("Invalid activation: {0}")]
    Activation(#[from] ActivationParseError),

    /// Config file exists but is unreadable or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or output stream failure.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// JSON output could not be produced.
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors encountered when reading the HTML document.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use tablesort::model::error::InputError;
///
/// let err = InputError::FileNotFound {
///     path: PathBuf::from("/tmp/missing.html")
/// };
/// assert!(err.to_string().contains("/tmp/missing.html"));
/// ```
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified HTML file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// No file given and stdin is an interactive terminal.
    #[error("No input source: provide an HTML file path or pipe HTML to stdin")]
    NoInput,

    /// Input is not valid UTF-8.
    #[error("Input is not valid UTF-8")]
    InvalidUtf8,

    /// Generic I/O failure (permissions, broken pipe).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A `--sort` value that is not of the form `TABLE:COLUMN`, or that names a
/// table that is not registered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActivationParseError {
    /// Missing `:` separator.
    #[error("expected TABLE:COLUMN, got '{0}'")]
    MissingSeparator(String),

    /// One side is not a non-negative integer.
    #[error("'{raw}' is not a valid index in '{input}'")]
    InvalidIndex {
        /// The offending component.
        raw: String,
        /// The whole argument.
        input: String,
    },

    /// Table index is beyond the registered sortable tables.
    #[error("no sortable table at index {index} ({available} available)")]
    UnknownTable {
        /// Requested index among sortable tables.
        index: usize,
        /// How many sortable tables the document has.
        available: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_from_input_error() {
        let err: AppError = InputError::InvalidUtf8.into();
        assert!(matches!(err, AppError::InputRead(InputError::InvalidUtf8)));
    }

    #[test]
    fn app_error_from_io_error() {
        let err: AppError = std::io::Error::other("boom").into();
        assert!(matches!(err, AppError::Terminal(_)));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn activation_errors_name_the_input() {
        let err = ActivationParseError::InvalidIndex {
            raw: "x".into(),
            input: "x:1".into(),
        };
        assert_eq!(err.to_string(), "'x' is not a valid index in 'x:1'");

        let err = ActivationParseError::UnknownTable {
            index: 3,
            available: 1,
        };
        assert_eq!(err.to_string(), "no sortable table at index 3 (1 available)");
    }
}
