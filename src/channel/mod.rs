//! The external file-operation channel
//!
//! All byte-level reads, writes, and listings are brokered through a
//! [`FileChannel`]: the index cache computes and caches metadata itself,
//! but never serves file content directly. Replies are plain text, and
//! listings come back newline-delimited, matching the wire shape of the
//! external broker process. A failed or malformed reply surfaces as
//! [`IndexError::Channel`](crate::error::IndexError::Channel), never as a
//! panic.

pub mod local;

use std::path::Path;

use async_trait::async_trait;

use crate::error::IndexResult;

pub use local::LocalChannel;

/// Boundary contract for the process that performs actual file I/O.
#[async_trait]
pub trait FileChannel: Send + Sync {
    /// Read the file at `path` as text.
    async fn read_file(&self, path: &Path) -> IndexResult<String>;

    /// Write `content` to the file at `path`.
    async fn write_file(&self, path: &Path, content: &str) -> IndexResult<()>;

    /// List the entries of the directory at `path`, newline-delimited.
    async fn list_directory(&self, path: &Path) -> IndexResult<String>;
}
