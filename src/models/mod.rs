//! Data models for the file index.
//!
//! - [`FileRecord`] - per-file cached metadata (size, timestamps, hash)
//! - [`FileIndex`] - the relative-path → record mapping
//! - [`SearchMode`] / [`SearchHit`] - query interpretation and results
//! - [`IndexStats`] / [`RefreshSummary`] - aggregates over the mapping
//!
//! Records serialize with serde into the persisted index document; custom
//! metadata values are schema-less [`serde_json::Value`] documents.

pub mod record;
pub mod search;
pub mod stats;

pub use record::{FileIndex, FileRecord};
pub use search::{SearchHit, SearchMode};
pub use stats::{IndexStats, RefreshSummary};
