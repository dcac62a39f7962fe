//! Persistent index storage
//!
//! The index lives as pretty-printed JSON at `<base>/.findex.json`, written
//! atomically (temp file + rename). A corrupt or missing file degrades to
//! an empty index. Two sessions against the same base directory race on
//! this file last-writer-wins; nothing here locks across processes.

pub mod document;
pub mod persistence;

pub use document::{INDEX_FILE_PREFIX, INDEX_FILENAME, IndexExport, PersistedIndex};
pub use persistence::{load_index, save_index, write_json_atomic};
