//! Per-file metadata extraction: stat attributes, suffix, streamed content hash.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::error::{IndexError, IndexResult};
use crate::models::FileRecord;
use crate::utils::relative_to_base;

/// Read granularity for hashing. Large files are never loaded whole.
const HASH_CHUNK_BYTES: usize = 64 * 1024;

/// Hex SHA-256 of the file's full content, streamed chunk by chunk.
pub fn hash_file(path: &Path) -> std::io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; HASH_CHUNK_BYTES];

    loop {
        let read = file.read(&mut buf)?;
        if read == 0 {
            break;
        }
        hasher.update(&buf[..read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Lowercase file suffix with leading dot, or empty when there is none.
fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

fn timestamp(value: std::io::Result<SystemTime>) -> Option<DateTime<Utc>> {
    value.ok().map(DateTime::<Utc>::from)
}

/// Computes a fresh [`FileRecord`] for one file.
///
/// A stat failure is reported as [`IndexError::MetadataUnavailable`] so the
/// caller can decide whether to keep a previous record or skip the file. A
/// hash failure degrades to an empty hash ("unknown") instead of failing
/// the extraction; indexing stays resilient to races with concurrent
/// mutation of the tree.
///
/// # Errors
///
/// Returns [`IndexError::PathOutsideBase`] if `absolute` is not contained
/// under `base`, and [`IndexError::MetadataUnavailable`] on stat failure.
pub fn extract_record(base: &Path, absolute: &Path) -> IndexResult<FileRecord> {
    let path = relative_to_base(base, absolute)?;

    let stat = std::fs::metadata(absolute).map_err(|source| IndexError::MetadataUnavailable {
        path: absolute.to_path_buf(),
        source,
    })?;

    let hash = hash_file(absolute).unwrap_or_else(|e| {
        warn!(path = %absolute.display(), error = %e, "content hashing failed");
        String::new()
    });

    let name = absolute.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();

    Ok(FileRecord {
        name,
        path,
        size: stat.len(),
        created: timestamp(stat.created()),
        modified: timestamp(stat.modified()),
        extension: extension_of(absolute),
        hash,
        indexed_at: Utc::now(),
        last_accessed: None,
        custom_metadata: None,
    })
}
