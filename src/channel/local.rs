//! In-process channel backed by `tokio::fs`.

use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

use super::FileChannel;
use crate::error::{IndexError, IndexResult};

/// Channel implementation that performs the file I/O itself.
///
/// Stands in for the out-of-process broker in the CLI and in tests; it
/// honors the same contract, including newline-delimited listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalChannel;

impl LocalChannel {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileChannel for LocalChannel {
    async fn read_file(&self, path: &Path) -> IndexResult<String> {
        fs::read_to_string(path)
            .await
            .map_err(|e| IndexError::channel(format!("read {} failed: {e}", path.display())))
    }

    async fn write_file(&self, path: &Path, content: &str) -> IndexResult<()> {
        fs::write(path, content)
            .await
            .map_err(|e| IndexError::channel(format!("write {} failed: {e}", path.display())))
    }

    async fn list_directory(&self, path: &Path) -> IndexResult<String> {
        let mut reader = fs::read_dir(path)
            .await
            .map_err(|e| IndexError::channel(format!("list {} failed: {e}", path.display())))?;

        let mut names = Vec::new();
        while let Some(entry) = reader
            .next_entry()
            .await
            .map_err(|e| IndexError::channel(format!("list {} failed: {e}", path.display())))?
        {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        names.sort();
        Ok(names.join("\n"))
    }
}
