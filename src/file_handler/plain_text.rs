//! Reader for opaque `.txt` files.

use crate::error::Result;
use crate::file_handler::source::read_content;
use crate::file_handler::FormatReader;
use std::fmt;
use std::path::{Path, PathBuf};

/// Reads a text file verbatim, one char per byte
#[derive(Debug, Clone)]
pub struct PlainTextReader {
    path: PathBuf,
}

impl PlainTextReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FormatReader for PlainTextReader {
    fn file_path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String> {
        read_content(&self.path)
    }
}

impl fmt::Display for PlainTextReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlainTextReader with path {}", self.path.display())
    }
}
