//! File reading abstraction over the supported input formats.
//!
//! A [`FormatReader`] materializes the content of one file and derives the
//! reversed renderings and comparisons from it. Every operation re-opens the
//! file; nothing is cached between calls.

pub mod csv;
pub mod factory;
pub mod plain_text;
pub mod source;
pub mod validation;

pub use csv::{CsvReader, Delimiter};
pub use factory::{FileFormat, ReaderFactory};
pub use plain_text::PlainTextReader;

use crate::error::Result;
use crate::transform::{self, Comparison};
use std::path::Path;

/// Core trait for format-specific file reading.
///
/// Implementors only provide [`read`](FormatReader::read); the derived
/// operations are shared by all formats and always start from a fresh read.
pub trait FormatReader {
    /// Path of the file this reader was created for
    fn file_path(&self) -> &Path;

    /// Read the whole file and return its format-specific rendering
    ///
    /// # Errors
    /// * File missing, not a regular file, or not readable
    fn read(&self) -> Result<String>;

    /// Content with line order reversed, every line followed by `\n`
    fn read_reverse_line(&self) -> Result<String> {
        Ok(transform::reverse_lines(&self.read()?))
    }

    /// Content with word order reversed and every word spelled backwards
    fn read_palindrome(&self) -> Result<String> {
        Ok(transform::palindrome(&self.read()?))
    }

    /// Compare line counts and exact content with another reader
    ///
    /// Both files are read; the first failure is returned.
    fn compare(&self, other: &dyn FormatReader) -> Result<Comparison> {
        let content = self.read()?;
        let other_content = other.read()?;
        Ok(Comparison::of(&content, &other_content))
    }
}
