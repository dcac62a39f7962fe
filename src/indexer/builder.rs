//! Full-tree index builds with change detection.
//!
//! # Error Handling Strategy
//!
//! A build degrades gracefully rather than aborting:
//!
//! - **Unreadable directory entries**: logged and skipped; the walk continues
//! - **Stat failures on single files**: the previous record, if any, is
//!   retained for this pass; otherwise the file is skipped with a warning
//! - **Hash failures**: the file is still indexed, with an unknown hash
//!
//! Only a base directory that cannot be walked at all fails the build.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::IndexResult;
use crate::index_storage::INDEX_FILE_PREFIX;
use crate::indexer::extractor::extract_record;
use crate::models::{FileIndex, RefreshSummary};
use crate::utils::relative_to_base;

/// Walks the base directory and recomputes a record for every regular file.
///
/// Replaces the mapping wholesale: entries for files that no longer exist
/// simply do not appear in the result. Every file is rehashed
/// unconditionally; files that are new or whose hash differs from
/// `previous` are counted in the returned [`RefreshSummary`]. Custom
/// metadata attached to a surviving path is carried over to its fresh
/// record.
///
/// The store's own persisted-index file (and its temp sibling) is excluded
/// from the walk.
pub fn build_index(base: &Path, previous: &FileIndex) -> IndexResult<(FileIndex, RefreshSummary)> {
    let mut summary = RefreshSummary::default();
    let mut files: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(base) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                summary.skipped += 1;
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with(INDEX_FILE_PREFIX) {
            continue;
        }

        files.push(entry.into_path());
    }

    let extracted: Vec<_> = files
        .into_par_iter()
        .map(|path| {
            let record = extract_record(base, &path);
            (path, record)
        })
        .collect();

    let mut next = FileIndex::new();
    for (path, result) in extracted {
        match result {
            Ok(mut record) => {
                match previous.get(&record.path) {
                    None => {
                        summary.new_files += 1;
                        debug!(path = %record.path, "new file");
                    }
                    Some(old) => {
                        if old.hash != record.hash {
                            summary.changed_files += 1;
                            debug!(path = %record.path, "content changed");
                        }
                        // Custom metadata sticks to a path until the file
                        // disappears from the tree.
                        if record.custom_metadata.is_none() {
                            record.custom_metadata = old.custom_metadata.clone();
                        }
                    }
                }
                next.insert(record.path.clone(), record);
            }
            Err(e) => {
                let retained = relative_to_base(base, &path)
                    .ok()
                    .and_then(|key| previous.get(&key).map(|old| (key, old.clone())));
                match retained {
                    Some((key, old)) => {
                        warn!(path = %path.display(), error = %e, "metadata unavailable, retaining previous record");
                        next.insert(key, old);
                    }
                    None => {
                        warn!(path = %path.display(), error = %e, "metadata unavailable, skipping file");
                        summary.skipped += 1;
                    }
                }
            }
        }
    }

    summary.total = next.len();
    Ok((next, summary))
}
