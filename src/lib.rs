//! findex - persistent file index cache over a managed directory tree
//!
//! This library indexes a directory tree, caching per-file metadata (size,
//! timestamps, content hash) to disk, and serves read/write/list/search
//! operations over that tree. Byte-level I/O is brokered through an
//! external channel; a tool-dispatch layer exposes every operation as a
//! callable function for a language model. It supports:
//!
//! - Full-tree rescans with content-hash change detection
//! - Incremental re-indexing of files written through the channel
//! - Search by name, extension, path, or minimum size
//! - Atomic JSON persistence of the index across sessions
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use findex::{FileIndexManager, LocalChannel, SearchMode};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let manager = FileIndexManager::open("./my_files", Arc::new(LocalChannel::new()))?;
//!
//! manager.write_file("notes.txt", "hello from the index").await?;
//! let hits = manager.search_files(".txt", SearchMode::Extension);
//! println!("{} text files indexed", hits.len());
//!
//! manager.close();
//! # Ok(())
//! # }
//! ```

pub mod channel;
pub mod cli;
pub mod error;
pub mod index_storage;
pub mod indexer;
pub mod manager;
pub mod models;
pub mod tools;
pub mod utils;

// Re-export commonly used types
pub use channel::{FileChannel, LocalChannel};
pub use error::{IndexError, IndexResult};
pub use manager::FileIndexManager;
pub use models::{FileIndex, FileRecord, IndexStats, RefreshSummary, SearchHit, SearchMode};
