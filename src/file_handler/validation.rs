//! File validation performed before a file is opened for reading.

use crate::error::{FilerevError, Result};
use std::path::Path;

/// Validate that a file path exists and points to a regular file
///
/// Empty files are accepted; they read as empty content.
///
/// # Error Cases
/// - File does not exist
/// - Path points to a directory or other non-regular file
/// - Metadata cannot be read (e.g. permission denied on a parent directory)
pub fn validate_file_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(FilerevError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let metadata = std::fs::metadata(path).map_err(|e| {
        FilerevError::file_error(
            format!("Failed to read file metadata: {}", path.display()),
            e,
        )
    })?;

    if !metadata.is_file() {
        return Err(FilerevError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_validate_valid_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(b"line 1\nline 2\n").unwrap();
        assert!(validate_file_path(file.path()).is_ok());
    }

    #[test]
    fn test_validate_empty_file_is_accepted() {
        let file = NamedTempFile::new().expect("Failed to create temp file");
        assert!(validate_file_path(file.path()).is_ok());
    }

    #[test]
    fn test_validate_nonexistent_file() {
        let result = validate_file_path(Path::new("/this/file/does/not/exist.txt"));
        assert!(matches!(result, Err(FilerevError::FileNotFound { .. })));
    }

    #[test]
    fn test_validate_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let result = validate_file_path(temp_dir.path());
        assert!(matches!(result, Err(FilerevError::NotAFile { .. })));
    }
}
