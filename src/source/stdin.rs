//! Stdin document input for piped HTML.

use crate::model::error::InputError;
use std::io::{IsTerminal, Read};

/// Piped HTML on stdin (or any reader in tests), read to EOF.
pub struct StdinSource<R: Read> {
    reader: R,
}

impl StdinSource<std::io::Stdin> {
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is an interactive terminal, so
    /// a forgotten pipe does not hang waiting for typed input.
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self { reader: stdin })
    }
}

impl<R: Read> StdinSource<R> {
    /// Wrap any reader, skipping the terminal check.
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }

    /// Read everything up to EOF as UTF-8.
    ///
    /// # Errors
    ///
    /// `InputError::InvalidUtf8` for non-UTF-8 input, `InputError::Io` otherwise.
    pub fn read(mut self) -> Result<String, InputError> {
        let mut bytes = Vec::new();
        self.reader.read_to_end(&mut bytes)?;
        String::from_utf8(bytes).map_err(|_| InputError::InvalidUtf8)
    }
}

impl<R: Read> std::fmt::Debug for StdinSource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdinSource").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_collects_all_input() {
        let data = b"<table>\n<tr><td>x</td></tr>\n</table>";
        let source = StdinSource::from_reader(&data[..]);
        assert_eq!(
            source.read().unwrap(),
            "<table>\n<tr><td>x</td></tr>\n</table>"
        );
    }

    #[test]
    fn read_of_empty_input_is_empty() {
        let source = StdinSource::from_reader(&b""[..]);
        assert_eq!(source.read().unwrap(), "");
    }

    #[test]
    fn read_rejects_invalid_utf8() {
        let source = StdinSource::from_reader(&[0xc3u8, 0x28][..]);
        assert!(matches!(source.read(), Err(InputError::InvalidUtf8)));
    }
}
