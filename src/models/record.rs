use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Cached metadata for a single file under the base directory.
///
/// Field names match the persisted index document, so records round-trip
/// through `.findex.json` without renaming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub name: String,
    /// Relative path under the base directory; the record's identity.
    pub path: String,
    pub size: u64,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified: Option<DateTime<Utc>>,
    /// Lowercase suffix with leading dot (".txt"), empty when there is none.
    pub extension: String,
    /// Hex SHA-256 of the full content. An empty string means hashing
    /// failed and the content state is unknown, not that the file is empty.
    pub hash: String,
    pub indexed_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_accessed: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_metadata: Option<BTreeMap<String, Value>>,
}

/// The in-memory index: relative path → record.
///
/// Ordered map, so persisted output is deterministic across rescans.
pub type FileIndex = BTreeMap<String, FileRecord>;

impl FileRecord {
    /// Merge user metadata into the record, creating the sub-map on first
    /// use. Incoming keys overwrite same-named keys; other keys are kept.
    pub fn merge_custom_metadata(&mut self, metadata: BTreeMap<String, Value>) {
        self.custom_metadata.get_or_insert_with(BTreeMap::new).extend(metadata);
    }
}
