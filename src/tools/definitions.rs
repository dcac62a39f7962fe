//! JSON tool definitions advertised to the model runtime.

use serde_json::{Value, json};

/// Definitions for every operation the dispatcher understands, in the
/// function-call format the model runtime expects.
pub fn tool_definitions() -> Vec<Value> {
    vec![
        json!({
            "type": "function",
            "function": {
                "name": "read_file",
                "description": "Read the contents of a text file inside the managed directory.",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "filepath": {
                            "type": "string",
                            "description": "Relative path of the file to read"
                        }
                    },
                    "required": ["filepath"]
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": "write_file",
                "description": "Write content to a text file inside the managed directory.",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "filepath": {
                            "type": "string",
                            "description": "Relative path of the file to write"
                        },
                        "content": {
                            "type": "string",
                            "description": "Content to write"
                        }
                    },
                    "required": ["filepath", "content"]
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": "refresh_filesystem_index",
                "description": "Rescan the managed directory and rebuild the file index.",
                "parameters": {
                    "type": "object",
                    "properties": {},
                    "required": []
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": "list_directory",
                "description": "List the entries of a directory inside the managed tree.",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "path": {
                            "type": "string",
                            "description": "Relative path of the directory; defaults to the base directory"
                        }
                    },
                    "required": []
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": "search_files",
                "description": "Search indexed files by name, extension, path, or minimum size.",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Query value"
                        },
                        "search_type": {
                            "type": "string",
                            "description": "One of: name, extension, path, size"
                        }
                    },
                    "required": ["query", "search_type"]
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": "get_file_stats",
                "description": "Get aggregate statistics about the indexed files.",
                "parameters": {
                    "type": "object",
                    "properties": {},
                    "required": []
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": "add_file_metadata",
                "description": "Merge custom metadata into an indexed file's record.",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "filepath": {
                            "type": "string",
                            "description": "Relative path of the file"
                        },
                        "metadata": {
                            "type": "object",
                            "description": "Key/value pairs to merge into the file's custom metadata"
                        }
                    },
                    "required": ["filepath", "metadata"]
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": "get_file_metadata",
                "description": "Get the cached metadata record for a file.",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "filepath": {
                            "type": "string",
                            "description": "Relative path of the file"
                        }
                    },
                    "required": ["filepath"]
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": "export_index",
                "description": "Export a snapshot of the file index with statistics.",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "export_path": {
                            "type": "string",
                            "description": "Destination path for the exported snapshot"
                        }
                    },
                    "required": ["export_path"]
                }
            }
        }),
    ]
}
