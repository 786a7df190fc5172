//! File-based document input.

use crate::model::error::InputError;
use std::path::{Path, PathBuf};

/// An HTML file on disk, read once in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if nothing exists at `path`.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file as UTF-8.
    ///
    /// # Errors
    ///
    /// `InputError::InvalidUtf8` for non-UTF-8 content, `InputError::Io` otherwise.
    pub fn read(&self) -> Result<String, InputError> {
        let bytes = std::fs::read(&self.path)?;
        String::from_utf8(bytes).map_err(|_| InputError::InvalidUtf8)
    }
}
