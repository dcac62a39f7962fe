//! Metadata extraction and full-tree index builds
//!
//! # Error Handling Strategy
//!
//! The indexer follows graceful degradation:
//!
//! - **File-level errors**: a file that cannot be stat'ed keeps its previous
//!   record when one exists and is skipped with a warning otherwise
//! - **Hash-level errors**: a file that cannot be read end-to-end is still
//!   indexed, with an empty ("unknown") content hash
//! - **Build-level errors**: only a base directory that cannot be walked at
//!   all fails a build, and that failure propagates via Result

pub mod builder;
pub mod extractor;

pub use builder::build_index;
pub use extractor::{extract_record, hash_file};
