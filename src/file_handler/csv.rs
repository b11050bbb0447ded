//! Reader for delimiter-separated `.csv` files.
//!
//! The delimiter is detected from the raw content: semicolon if one appears
//! anywhere, comma otherwise. Reading strips the detected delimiter, joining
//! the fields of each line with nothing in between.

use crate::error::Result;
use crate::file_handler::source::read_content;
use crate::file_handler::FormatReader;
use crate::transform::split_lines;
use std::fmt;
use std::path::{Path, PathBuf};

/// Field delimiters recognized in CSV content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `,` (assumed when no semicolon is present)
    Comma,
    /// `;` (takes priority whenever present)
    Semicolon,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Semicolon => ';',
        }
    }

    /// Pick the delimiter for `content`
    pub fn detect(content: &str) -> Self {
        if memchr::memchr(b';', content.as_bytes()).is_some() {
            Self::Semicolon
        } else {
            Self::Comma
        }
    }
}

/// Remove `delimiter` from every line, terminating each line with `\n`
pub fn strip_delimiter(content: &str, delimiter: Delimiter) -> String {
    let mut normalized = String::with_capacity(content.len() + 1);
    for line in split_lines(content) {
        for field in line.split(delimiter.as_char()) {
            normalized.push_str(field);
        }
        normalized.push('\n');
    }
    normalized
}

/// Reads a CSV file and renders it with the delimiter stripped
#[derive(Debug, Clone)]
pub struct CsvReader {
    path: PathBuf,
}

impl CsvReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FormatReader for CsvReader {
    fn file_path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String> {
        let raw = read_content(&self.path)?;
        let delimiter = Delimiter::detect(&raw);
        log::debug!(
            "detected delimiter {:?} in {}",
            delimiter.as_char(),
            self.path.display()
        );
        Ok(strip_delimiter(&raw, delimiter))
    }
}

impl fmt::Display for CsvReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CsvReader with path {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn reader_for(content: &[u8]) -> (NamedTempFile, CsvReader) {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(content).expect("Failed to write test content");
        file.flush().expect("Failed to flush test file");
        let reader = CsvReader::new(file.path());
        (file, reader)
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(Delimiter::detect("a,b,c"), Delimiter::Comma);
        assert_eq!(Delimiter::detect("a;b;c"), Delimiter::Semicolon);
        assert_eq!(Delimiter::detect("a,b\nc;d"), Delimiter::Semicolon);
        assert_eq!(Delimiter::detect("no delimiter"), Delimiter::Comma);
        assert_eq!(Delimiter::detect(""), Delimiter::Comma);
    }

    #[test]
    fn test_semicolon_priority_leaves_commas_untouched() {
        assert_eq!(
            strip_delimiter("a,b,c\nd;e;f", Delimiter::Semicolon),
            "a,b,c\ndef\n"
        );
    }

    #[test]
    fn test_strip_comma() {
        assert_eq!(
            strip_delimiter("name,age\nalice,30\n", Delimiter::Comma),
            "nameage\nalice30\n"
        );
        // Empty fields vanish
        assert_eq!(strip_delimiter("a,,b,", Delimiter::Comma), "ab\n");
    }

    #[test]
    fn test_read_detects_and_strips() {
        let (_file, reader) = reader_for(b"a,b,c\nd;e;f");
        assert_eq!(reader.read().unwrap(), "a,b,c\ndef\n");

        let (_file, reader) = reader_for(b"x,y\n1,2\n");
        assert_eq!(reader.read().unwrap(), "xy\n12\n");
    }

    #[test]
    fn test_derived_operations_use_stripped_content() {
        let (_file, reader) = reader_for(b"ab,cd\nef,gh\n");
        assert_eq!(reader.read_reverse_line().unwrap(), "efgh\nabcd\n");
        assert_eq!(reader.read_palindrome().unwrap(), "hgfe dcba ");
    }

    #[test]
    fn test_empty_csv_is_one_empty_line() {
        let (_file, reader) = reader_for(b"");
        assert_eq!(reader.read().unwrap(), "\n");
    }

    #[test]
    fn test_compare_with_different_delimiter_same_fields() {
        // Both normalize to the same content
        let (_a, comma) = reader_for(b"a,b\nc,d\n");
        let (_b, semicolon) = reader_for(b"a;b\nc;d\n");

        let comparison = comma.compare(&semicolon).unwrap();
        assert!(comparison.identical);
        assert_eq!(comparison.first_lines, 2);
    }

    #[test]
    fn test_display() {
        let reader = CsvReader::new("data/in.csv");
        assert_eq!(reader.to_string(), "CsvReader with path data/in.csv");
    }
}
