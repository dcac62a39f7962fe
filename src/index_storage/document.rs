//! Persisted and exported index document shapes.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{FileIndex, IndexStats};

/// Files whose name starts with this prefix belong to the store and are
/// excluded from rescans.
pub const INDEX_FILE_PREFIX: &str = ".findex";

/// On-disk name of the persisted index inside the base directory.
pub const INDEX_FILENAME: &str = ".findex.json";

/// Document persisted at `<base>/.findex.json`.
///
/// `metadata_cache` is a reserved legacy section: always written, and
/// round-trips unchanged even when empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersistedIndex {
    #[serde(default)]
    pub file_index: FileIndex,
    #[serde(default)]
    pub metadata_cache: BTreeMap<String, Value>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Independent snapshot written by `export_index`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexExport {
    pub base_directory: String,
    pub export_time: DateTime<Utc>,
    pub stats: IndexStats,
    pub file_index: FileIndex,
}
