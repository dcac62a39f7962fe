use clap::ValueEnum;
use serde::Serialize;

use super::record::FileRecord;

/// How a search query is interpreted against the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchMode {
    /// Case-insensitive substring of the file name
    Name,
    /// Case-insensitive exact match on the extension (".txt")
    Extension,
    /// Case-insensitive substring of the relative path
    Path,
    /// Minimum size in bytes; the query must parse as an integer
    Size,
}

impl SearchMode {
    /// Parse the wire-level mode names carried by tool calls.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "name" => Some(Self::Name),
            "extension" => Some(Self::Extension),
            "path" => Some(Self::Path),
            "size" => Some(Self::Size),
            _ => None,
        }
    }
}

/// One search result: the index key plus a snapshot of its record.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub path: String,
    #[serde(rename = "metadata")]
    pub record: FileRecord,
}
