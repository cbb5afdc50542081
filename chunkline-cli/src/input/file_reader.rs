//! File reading utilities

use crate::error::CliError;
use crate::CliResult;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Loads whole input files into memory
pub struct FileReader;

impl FileReader {
    /// Read a file as raw bytes
    ///
    /// No encoding check is made; chunking passes invalid UTF-8 through.
    pub fn read_bytes(path: &Path) -> CliResult<Vec<u8>> {
        let content =
            fs::read(path).with_context(|| CliError::InputFile(path.display().to_string()))?;

        log::debug!("Read {} bytes from {}", content.len(), path.display());
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_read_bytes_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let content = "Hello, world!\nThis is a test.";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_bytes(&file_path).unwrap();
        assert_eq!(result, content.as_bytes());
    }

    #[test]
    fn test_read_bytes_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let result = FileReader::read_bytes(path);

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err
            .to_string()
            .contains("Error opening input file: /nonexistent/file.txt"));
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn test_read_bytes_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("latin1.txt");

        let content = [b'c', b'a', b'f', 0xE9, b'\n'];
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_bytes(&file_path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");

        File::create(&file_path).unwrap();

        let content = FileReader::read_bytes(&file_path).unwrap();
        assert!(content.is_empty());
    }
}
