//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use findex::{FileIndexManager, LocalChannel};

/// Builder for creating managed base directory trees
pub struct BaseDirBuilder {
    temp_dir: TempDir,
}

impl BaseDirBuilder {
    /// Create a new builder with an empty base directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the base directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a file at the given relative path, creating parent directories
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(path, content).expect("Failed to write file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

/// Open a manager session over `base` with the in-process channel
pub fn open_manager(base: &Path) -> FileIndexManager {
    FileIndexManager::open(base, Arc::new(LocalChannel::new())).expect("Failed to open session")
}
