//! Input sources read once per phase

use crate::error::SourceError;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Something that yields the full puzzle input every time it is read
///
/// The runner reads the source from the start for each phase, so an
/// implementation must return the same text on every call unless the
/// underlying data changed.
pub trait InputSource: fmt::Display {
    /// Read the whole input
    fn read(&self) -> Result<String, SourceError>;
}

/// A puzzle input stored in a file, re-read on every call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InputSource for FileSource {
    fn read(&self) -> Result<String, SourceError> {
        fs::read_to_string(&self.path).map_err(|source| SourceError::Unreadable {
            origin: self.path.display().to_string(),
            source,
        })
    }
}

impl fmt::Display for FileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// A puzzle input held in memory; each read hands out a fresh copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySource {
    text: String,
}

impl MemorySource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl InputSource for MemorySource {
    fn read(&self) -> Result<String, SourceError> {
        Ok(self.text.clone())
    }
}

impl fmt::Display for MemorySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<memory, {} bytes>", self.text.len())
    }
}
