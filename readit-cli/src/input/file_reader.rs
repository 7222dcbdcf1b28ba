//! File reading utilities

use anyhow::{Context, Result};
use readit_core::InMemoryBook;
use std::fs;
use std::path::Path;

use crate::error::CliError;

/// Loads book resources from disk
pub struct FileReader;

impl FileReader {
    /// Read a file's raw bytes
    pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }

    /// Build a book whose resources are the given files, in order
    ///
    /// Each resource is identified by its path and declares its file size.
    pub fn load_book<P: AsRef<Path>>(paths: &[P]) -> Result<InMemoryBook> {
        let mut book = InMemoryBook::new();
        for path in paths {
            let path = path.as_ref();
            let content = Self::read_bytes(path)?;
            let size = Self::file_size(path)? as usize;
            log::debug!("resource {} ({size} bytes)", path.display());
            book.push_with_size(path.display().to_string(), content, size);
        }
        Ok(book)
    }
}
