//! Scoped file acquisition and byte decoding.
//!
//! Files are opened, read to the end and closed within a single call. The
//! handle is dropped before returning on both the success and error paths.

use crate::error::{FilerevError, Result};
use crate::file_handler::validation::validate_file_path;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Read every byte of the file at `path`
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    validate_file_path(path)?;

    let mut file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FilerevError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => FilerevError::file_error(format!("Failed to open file: {}", path.display()), e),
    })?;

    let mut content = Vec::new();
    file.read_to_end(&mut content).map_err(|e| {
        FilerevError::file_error(format!("Failed to read file: {}", path.display()), e)
    })?;

    Ok(content)
}

/// Decode bytes as single-byte characters (ISO-8859-1).
///
/// Every byte maps to the char with the same value, so decoding never fails
/// and distinct inputs always give distinct strings. Multi-byte encodings
/// such as UTF-8 come out as one char per byte.
pub fn decode_single_byte(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Read the file at `path` and decode it with [`decode_single_byte`]
pub fn read_content(path: &Path) -> Result<String> {
    let bytes = read_bytes(path)?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(decode_single_byte(&bytes))
}
