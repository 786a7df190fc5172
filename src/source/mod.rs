//! HTML document sources.
//!
//! A document comes from a file or from piped stdin. Either way it is read
//! once, in full, and scanned into a [`Document`].

use crate::document::{parse_document, Document};
use crate::model::error::InputError;
use std::path::PathBuf;
use tracing::info;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Where the HTML comes from.
#[derive(Debug)]
pub enum InputSource {
    /// An HTML file.
    File(FileSource),
    /// Piped stdin.
    Stdin(StdinSource<std::io::Stdin>),
}

impl InputSource {
    /// Read the source to the end and scan it.
    ///
    /// # Errors
    ///
    /// Propagates I/O and UTF-8 failures.
    pub fn load(self) -> Result<Document, InputError> {
        let (origin, html) = match self {
            InputSource::File(f) => (f.path().display().to_string(), f.read()?),
            InputSource::Stdin(s) => ("<stdin>".to_string(), s.read()?),
        };
        info!(origin = %origin, bytes = html.len(), "document loaded");
        Ok(parse_document(html))
    }
}

/// Pick the input source.
///
/// A file path wins; otherwise stdin must be piped.
///
/// # Errors
///
/// `InputError::FileNotFound` for a missing file, `InputError::NoInput` when
/// no file is given and stdin is a terminal.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}
