//! Routing of parsed `(operation, arguments)` pairs onto the manager.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::{Value, json};

use crate::error::{IndexError, IndexResult};
use crate::manager::FileIndexManager;
use crate::models::SearchMode;

fn require_str<'a>(args: &'a Value, key: &str) -> IndexResult<&'a str> {
    args.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| IndexError::invalid_arguments(format!("missing string argument `{key}`")))
}

/// Executes one tool call against the manager.
///
/// The caller has already mapped the model's output to an operation name
/// and a JSON argument object; this function owns argument validation and
/// the shape of the JSON reply. Failures come back as error values, never
/// panics.
pub async fn dispatch(
    manager: &FileIndexManager,
    operation: &str,
    args: &Value,
) -> IndexResult<Value> {
    match operation {
        "read_file" => {
            let content = manager.read_file(require_str(args, "filepath")?).await?;
            Ok(Value::String(content))
        }
        "write_file" => {
            manager
                .write_file(require_str(args, "filepath")?, require_str(args, "content")?)
                .await?;
            Ok(json!({ "written": true }))
        }
        "refresh_filesystem_index" => {
            let summary = manager.refresh_index()?;
            Ok(serde_json::to_value(summary)?)
        }
        "list_directory" => {
            let path = args.get("path").and_then(Value::as_str).unwrap_or(".");
            let entries = manager.list_directory(path).await?;
            Ok(serde_json::to_value(entries)?)
        }
        "search_files" => {
            let query = require_str(args, "query")?;
            let raw_mode = require_str(args, "search_type")?;
            let mode = SearchMode::parse(raw_mode).ok_or_else(|| {
                IndexError::invalid_arguments(format!("unknown search_type `{raw_mode}`"))
            })?;
            Ok(serde_json::to_value(manager.search_files(query, mode))?)
        }
        "get_file_stats" => Ok(serde_json::to_value(manager.file_stats())?),
        "add_file_metadata" => {
            let filepath = require_str(args, "filepath")?;
            let metadata = args.get("metadata").and_then(Value::as_object).ok_or_else(|| {
                IndexError::invalid_arguments("missing object argument `metadata`")
            })?;
            let metadata: BTreeMap<String, Value> =
                metadata.iter().map(|(k, v)| (k.clone(), v.clone())).collect();

            manager.add_file_metadata(filepath, metadata)?;
            // Metadata edits are durable at the tool boundary.
            manager.persist()?;
            Ok(json!({ "updated": true }))
        }
        "get_file_metadata" => match manager.get_file_metadata(require_str(args, "filepath")?) {
            Some(record) => Ok(serde_json::to_value(record)?),
            None => Ok(Value::Null),
        },
        "export_index" => {
            let destination = require_str(args, "export_path")?;
            manager.export_index(Path::new(destination))?;
            Ok(json!({ "exported": true }))
        }
        other => Err(IndexError::invalid_arguments(format!("unsupported operation `{other}`"))),
    }
}
