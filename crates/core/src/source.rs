//! Source provider abstraction.
//!
//! [`SourceProvider`] decouples the compiler from `std::fs` so documents can
//! be compiled from memory in tests or embedding hosts.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub trait SourceProvider {
    /// Read the full text of the document at `path`.
    fn read_source(&self, path: &Path) -> Result<String, std::io::Error>;
}

/// Reads documents from the filesystem.
pub struct FileSystemProvider;

impl SourceProvider for FileSystemProvider {
    fn read_source(&self, path: &Path) -> Result<String, std::io::Error> {
        std::fs::read_to_string(path)
    }
}

/// Serves documents from an in-memory map keyed by path.
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    files: HashMap<PathBuf, String>,
}

impl InMemoryProvider {
    pub fn new(files: HashMap<PathBuf, String>) -> Self {
        Self { files }
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }
}

impl SourceProvider for InMemoryProvider {
    fn read_source(&self, path: &Path) -> Result<String, std::io::Error> {
        self.files.get(path).cloned().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("file not found in memory: {}", path.display()),
            )
        })
    }
}
