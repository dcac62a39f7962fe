//! Error taxonomy for index, channel, and persistence failures.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the index cache and its collaborators.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A requested path resolves outside the managed base directory.
    #[error("path escapes the base directory: {}", path.display())]
    PathOutsideBase { path: PathBuf },

    /// Filesystem stat failed while extracting metadata for a file.
    #[error("metadata unavailable for {}: {source}", path.display())]
    MetadataUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external file channel failed or returned a malformed reply.
    #[error("channel error: {0}")]
    Channel(String),

    /// The persisted index could not be written.
    #[error("index persistence failed: {0}")]
    Persistence(String),

    /// The operation targets a path absent from the index.
    #[error("no index entry for {0}")]
    NotFound(String),

    /// A tool call carried a missing or mistyped argument.
    #[error("invalid tool arguments: {0}")]
    InvalidArguments(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias used throughout the library.
pub type IndexResult<T> = Result<T, IndexError>;

impl IndexError {
    /// Create a channel error
    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }

    /// Create a persistence error
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Create an invalid-arguments error
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
