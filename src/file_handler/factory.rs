//! Factory for creating FormatReader instances.
//!
//! The reader is chosen from the file extension alone; the file itself is
//! not touched until one of the reader's operations runs.

use crate::error::{FilerevError, Result};
use crate::file_handler::{CsvReader, FormatReader, PlainTextReader};
use std::path::Path;

/// Input formats understood by filerev
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// `.txt` files, read verbatim
    PlainText,
    /// `.csv` files, read with the delimiter stripped
    Csv,
}

impl FileFormat {
    /// Get human-readable name for the format
    pub fn name(&self) -> &'static str {
        match self {
            Self::PlainText => "text",
            Self::Csv => "csv",
        }
    }

    /// Detect the format from the path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("txt") => Ok(Self::PlainText),
            Some("csv") => Ok(Self::Csv),
            _ => Err(FilerevError::unsupported_format(path)),
        }
    }
}

/// Factory selecting the reader implementation for a path
pub struct ReaderFactory;

impl ReaderFactory {
    /// Create the reader matching the extension of `path`
    ///
    /// # Errors
    /// * `UnsupportedFormat` if the extension is neither `.txt` nor `.csv`
    pub fn create(path: &Path) -> Result<Box<dyn FormatReader>> {
        let format = FileFormat::from_path(path)?;
        log::debug!("using {} reader for {}", format.name(), path.display());

        let reader: Box<dyn FormatReader> = match format {
            FileFormat::PlainText => Box::new(PlainTextReader::new(path)),
            FileFormat::Csv => Box::new(CsvReader::new(path)),
        };
        Ok(reader)
    }
}
