//! Index load/save with atomic writes

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use super::document::PersistedIndex;
use crate::error::{IndexError, IndexResult};

/// Loads the persisted index, falling back to an empty document when the
/// file is absent, unreadable, or unparseable. Corruption is a recoverable
/// condition, never fatal: the rescan at session start rebuilds the mapping.
pub fn load_index(path: &Path) -> PersistedIndex {
    if !path.exists() {
        info!(path = %path.display(), "no existing index, starting empty");
        return PersistedIndex::default();
    }

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read index file, starting empty");
            return PersistedIndex::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to parse index file, starting empty");
            PersistedIndex::default()
        }
    }
}

/// Saves the index document atomically so a concurrent loader never
/// observes a truncated file.
pub fn save_index(path: &Path, doc: &PersistedIndex) -> IndexResult<()> {
    write_json_atomic(path, doc)
}

/// Serializes `value` as pretty JSON to `path` via a temp file + rename.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> IndexResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| IndexError::persistence(format!("failed to serialize document: {e}")))?;

    let file_name =
        path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    if file_name.is_empty() {
        return Err(IndexError::persistence(format!(
            "destination has no file name: {}",
            path.display()
        )));
    }

    let temp = path.with_file_name(format!("{file_name}.tmp"));
    fs::write(&temp, json)
        .map_err(|e| IndexError::persistence(format!("failed to write {}: {e}", temp.display())))?;
    fs::rename(&temp, path).map_err(|e| {
        IndexError::persistence(format!("failed to replace {}: {e}", path.display()))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use tempfile::TempDir;

    use super::*;
    use crate::models::{FileIndex, FileRecord};

    fn sample_doc() -> PersistedIndex {
        let mut file_index = FileIndex::new();
        file_index.insert(
            "a.txt".to_string(),
            FileRecord {
                name: "a.txt".to_string(),
                path: "a.txt".to_string(),
                size: 5,
                created: None,
                modified: Some(Utc::now()),
                extension: ".txt".to_string(),
                hash: "deadbeef".to_string(),
                indexed_at: Utc::now(),
                last_accessed: None,
                custom_metadata: None,
            },
        );
        PersistedIndex {
            file_index,
            metadata_cache: [("reserved".to_string(), serde_json::json!({"v": 1}))]
                .into_iter()
                .collect(),
            last_updated: Some(Utc::now()),
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let doc = load_index(&dir.path().join(".findex.json"));
        assert!(doc.file_index.is_empty());
        assert!(doc.metadata_cache.is_empty());
        assert!(doc.last_updated.is_none());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".findex.json");
        std::fs::write(&path, "{not json").unwrap();

        let doc = load_index(&path);
        assert!(doc.file_index.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".findex.json");
        let doc = sample_doc();

        save_index(&path, &doc).unwrap();
        let loaded = load_index(&path);

        assert_eq!(loaded.file_index, doc.file_index);
        // Reserved section round-trips unchanged.
        assert_eq!(loaded.metadata_cache, doc.metadata_cache);
        assert_eq!(loaded.last_updated, doc.last_updated);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".findex.json");

        save_index(&path, &sample_doc()).unwrap();

        assert!(path.exists());
        assert!(!dir.path().join(".findex.json.tmp").exists());
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".findex.json");

        save_index(&path, &sample_doc()).unwrap();
        save_index(&path, &PersistedIndex::default()).unwrap();

        let loaded = load_index(&path);
        assert!(loaded.file_index.is_empty());
    }
}
