use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::FileIndex;

/// Bucket label for files without a suffix.
const NO_EXTENSION: &str = "no extension";

/// Aggregate view over the index, also embedded in exported snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexStats {
    pub total_files: usize,
    pub total_size_bytes: u64,
    pub total_size_mb: f64,
    pub extensions: BTreeMap<String, usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_indexed: Option<DateTime<Utc>>,
}

impl IndexStats {
    /// Aggregate the mapping. An empty mapping yields the zero aggregate.
    pub fn from_index(index: &FileIndex, last_indexed: Option<DateTime<Utc>>) -> Self {
        let total_size_bytes: u64 = index.values().map(|record| record.size).sum();

        let mut extensions = BTreeMap::new();
        for record in index.values() {
            let bucket = if record.extension.is_empty() {
                NO_EXTENSION.to_string()
            } else {
                record.extension.clone()
            };
            *extensions.entry(bucket).or_insert(0) += 1;
        }

        Self {
            total_files: index.len(),
            total_size_bytes,
            total_size_mb: (total_size_bytes as f64 / (1024.0 * 1024.0) * 100.0).round() / 100.0,
            extensions,
            last_indexed,
        }
    }
}

/// Outcome of a full rescan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RefreshSummary {
    /// Entries in the rebuilt mapping
    pub total: usize,
    /// Files not present in the previous mapping
    pub new_files: usize,
    /// Files whose content hash differs from the previous record
    pub changed_files: usize,
    /// Files dropped from this pass because their metadata was unreadable
    pub skipped: usize,
}
