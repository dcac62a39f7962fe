//! The file index cache: session lifecycle, channel-brokered operations,
//! and queries over the in-memory mapping.
//!
//! A [`FileIndexManager`] is one session over a managed directory tree.
//! Opening it loads the persisted index and rescans the tree; closing it
//! persists the mapping. In between, reads and writes route through the
//! channel and keep the affected entries fresh, while searches and stats
//! run against the in-memory mapping only.
//!
//! Concurrency: the mapping sits behind a read-write lock. Mutations take
//! the write side only for the read-modify-write itself; a rescan builds
//! the replacement mapping off-lock and swaps it in whole, so concurrent
//! readers never observe a partially rebuilt index. No lock is held across
//! a channel call or while hashing.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::channel::FileChannel;
use crate::error::{IndexError, IndexResult};
use crate::index_storage::{self, INDEX_FILENAME, IndexExport, PersistedIndex};
use crate::indexer;
use crate::models::{FileIndex, FileRecord, IndexStats, RefreshSummary, SearchHit, SearchMode};
use crate::utils::{relative_to_base, resolve_in_base};

pub struct FileIndexManager {
    base_dir: PathBuf,
    index_path: PathBuf,
    channel: Arc<dyn FileChannel>,
    index: RwLock<FileIndex>,
    /// Reserved legacy section of the persisted document; round-trips as-is.
    metadata_cache: RwLock<BTreeMap<String, Value>>,
    last_refreshed: RwLock<Option<DateTime<Utc>>>,
}

impl FileIndexManager {
    /// Opens a session: loads the persisted index, then rescans the tree so
    /// queries reflect the directory as it exists right now.
    ///
    /// A corrupt or missing persisted index is not a failure; it falls back
    /// to empty and the rescan rebuilds it.
    ///
    /// # Errors
    ///
    /// Initialization failures propagate: a session needs an existing base
    /// directory and a completed first rescan before it can serve anything.
    pub fn open(base_dir: impl Into<PathBuf>, channel: Arc<dyn FileChannel>) -> IndexResult<Self> {
        let base_dir = base_dir.into().canonicalize()?;
        if !base_dir.is_dir() {
            return Err(IndexError::Io(std::io::Error::new(
                std::io::ErrorKind::NotADirectory,
                format!("base directory is not a directory: {}", base_dir.display()),
            )));
        }
        let index_path = base_dir.join(INDEX_FILENAME);

        let persisted = index_storage::load_index(&index_path);
        info!(
            files = persisted.file_index.len(),
            base = %base_dir.display(),
            "loaded persisted index"
        );

        let manager = Self {
            base_dir,
            index_path,
            channel,
            index: RwLock::new(persisted.file_index),
            metadata_cache: RwLock::new(persisted.metadata_cache),
            last_refreshed: RwLock::new(None),
        };
        manager.refresh_index()?;
        Ok(manager)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Full rescan of the tree. Builds the replacement mapping before
    /// taking the write lock, then swaps it in whole. Completes before
    /// returning, so subsequent queries see the result.
    pub fn refresh_index(&self) -> IndexResult<RefreshSummary> {
        let previous = self.index.read().clone();
        let (next, summary) = indexer::build_index(&self.base_dir, &previous)?;

        *self.index.write() = next;
        *self.last_refreshed.write() = Some(Utc::now());

        info!(
            total = summary.total,
            new = summary.new_files,
            changed = summary.changed_files,
            skipped = summary.skipped,
            "index refreshed"
        );
        Ok(summary)
    }

    /// Reads a file through the channel, then updates the entry's access
    /// time if the path is indexed. Never creates an entry; the access-time
    /// update is best-effort.
    pub async fn read_file(&self, path: &str) -> IndexResult<String> {
        let absolute = resolve_in_base(&self.base_dir, path)?;
        let content = self.channel.read_file(&absolute).await?;

        if let Ok(key) = relative_to_base(&self.base_dir, &absolute)
            && let Some(record) = self.index.write().get_mut(&key)
        {
            record.last_accessed = Some(Utc::now());
        }

        Ok(content)
    }

    /// Writes a file through the channel; on confirmed success, re-indexes
    /// exactly that file. Custom metadata previously attached to the path
    /// survives the replacement record.
    pub async fn write_file(&self, path: &str, content: &str) -> IndexResult<()> {
        let absolute = resolve_in_base(&self.base_dir, path)?;
        self.channel.write_file(&absolute, content).await?;

        match indexer::extract_record(&self.base_dir, &absolute) {
            Ok(mut record) => {
                let mut index = self.index.write();
                if let Some(old) = index.get(&record.path) {
                    record.custom_metadata = old.custom_metadata.clone();
                }
                index.insert(record.path.clone(), record);
            }
            Err(e) => {
                warn!(
                    path = %absolute.display(),
                    error = %e,
                    "write confirmed but re-index failed, keeping previous record"
                );
            }
        }
        Ok(())
    }

    /// Lists a directory through the channel. Does not consult or touch the
    /// index.
    pub async fn list_directory(&self, path: &str) -> IndexResult<Vec<String>> {
        let absolute = resolve_in_base(&self.base_dir, path)?;
        let reply = self.channel.list_directory(&absolute).await?;
        Ok(reply.lines().filter(|line| !line.is_empty()).map(str::to_owned).collect())
    }

    /// Linear scan over the mapping. Result order follows map iteration
    /// order; only membership is meaningful to callers.
    pub fn search_files(&self, query: &str, mode: SearchMode) -> Vec<SearchHit> {
        let query_lower = query.to_lowercase();
        let size_threshold = match mode {
            SearchMode::Size => match query.trim().parse::<u64>() {
                Ok(n) => Some(n),
                // A non-numeric size query matches nothing; it is not an error.
                Err(_) => return Vec::new(),
            },
            _ => None,
        };

        self.index
            .read()
            .iter()
            .filter(|(path, record)| match mode {
                SearchMode::Name => record.name.to_lowercase().contains(&query_lower),
                SearchMode::Extension => record.extension.eq_ignore_ascii_case(query.trim()),
                SearchMode::Path => path.to_lowercase().contains(&query_lower),
                SearchMode::Size => size_threshold.is_some_and(|n| record.size >= n),
            })
            .map(|(path, record)| SearchHit { path: path.clone(), record: record.clone() })
            .collect()
    }

    /// Aggregate statistics; zero-valued when the mapping is empty.
    pub fn file_stats(&self) -> IndexStats {
        IndexStats::from_index(&self.index.read(), *self.last_refreshed.read())
    }

    /// Merges user metadata into an indexed entry. Unlike writes, this does
    /// not persist by itself; call [`persist`](Self::persist) when the edit
    /// should hit disk.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::NotFound`] when the path is not indexed.
    pub fn add_file_metadata(
        &self,
        path: &str,
        metadata: BTreeMap<String, Value>,
    ) -> IndexResult<()> {
        let mut index = self.index.write();
        let record =
            index.get_mut(path).ok_or_else(|| IndexError::NotFound(path.to_string()))?;
        record.merge_custom_metadata(metadata);
        Ok(())
    }

    /// Cached record for a path, if indexed.
    pub fn get_file_metadata(&self, path: &str) -> Option<FileRecord> {
        self.index.read().get(path).cloned()
    }

    /// Writes the current mapping to the persisted index file.
    pub fn persist(&self) -> IndexResult<()> {
        let doc = PersistedIndex {
            file_index: self.index.read().clone(),
            metadata_cache: self.metadata_cache.read().clone(),
            last_updated: Some(Utc::now()),
        };
        index_storage::save_index(&self.index_path, &doc)?;
        debug!(files = doc.file_index.len(), "index persisted");
        Ok(())
    }

    /// Snapshots the index, with stats and provenance, to `destination`.
    /// Leaves live state untouched.
    pub fn export_index(&self, destination: &Path) -> IndexResult<()> {
        let export = IndexExport {
            base_directory: self.base_dir.to_string_lossy().into_owned(),
            export_time: Utc::now(),
            stats: self.file_stats(),
            file_index: self.index.read().clone(),
        };
        index_storage::write_json_atomic(destination, &export)?;
        info!(destination = %destination.display(), "index exported");
        Ok(())
    }

    /// Ends the session: persists the index, best-effort. Shutdown failures
    /// are logged and swallowed so they never mask the session's results.
    pub fn close(self) {
        if let Err(e) = self.persist() {
            warn!(error = %e, "failed to persist index on close");
        }
    }
}
