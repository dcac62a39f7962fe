use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::channel::LocalChannel;
use crate::manager::FileIndexManager;
use crate::models::SearchMode;
use crate::tools;

#[derive(Parser)]
#[command(name = "findex")]
#[command(version = "0.1.0")]
#[command(about = "Index a directory tree and serve reads, writes, and searches over it", long_about = None)]
pub struct Cli {
    /// Directory tree to manage
    #[arg(long, default_value = ".")]
    pub base_dir: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rescan the tree and rebuild the index
    Refresh,
    /// Show aggregate statistics for the indexed files
    Stats,
    /// Search indexed files
    Search {
        query: String,
        /// How to interpret the query
        #[arg(long, value_enum, default_value = "name")]
        mode: SearchMode,
    },
    /// Read a file through the channel
    Read { path: String },
    /// Write a file through the channel and re-index it
    Write { path: String, content: String },
    /// List a directory through the channel
    Ls {
        #[arg(default_value = ".")]
        path: String,
    },
    /// Show a file's cached record, optionally merging custom metadata first
    Meta {
        path: String,
        /// key=value pairs merged into the entry's custom metadata
        #[arg(long = "set", value_parser = parse_key_value)]
        set: Vec<(String, Value)>,
    },
    /// Export an index snapshot with statistics
    Export { destination: PathBuf },
    /// Print the tool definitions exposed to a language model
    Tools,
}

/// Parse a `key=value` metadata pair. Values that parse as JSON keep their
/// type; everything else becomes a string.
fn parse_key_value(raw: &str) -> Result<(String, Value), String> {
    let (key, value) =
        raw.split_once('=').ok_or_else(|| format!("expected key=value, got `{raw}`"))?;
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    // Printing definitions needs no session.
    if matches!(command, Commands::Tools) {
        println!("{}", serde_json::to_string_pretty(&tools::tool_definitions())?);
        return Ok(());
    }

    let manager = FileIndexManager::open(&cli.base_dir, Arc::new(LocalChannel::new()))
        .with_context(|| format!("failed to open session for {}", cli.base_dir.display()))?;

    let result = execute(&manager, command).await;
    manager.close();
    result
}

async fn execute(manager: &FileIndexManager, command: Commands) -> Result<()> {
    match command {
        Commands::Refresh => {
            let summary = manager.refresh_index()?;
            println!(
                "Indexed {} files ({} new, {} changed, {} skipped)",
                summary.total, summary.new_files, summary.changed_files, summary.skipped
            );
        }
        Commands::Stats => {
            let stats = manager.file_stats();
            println!("File Index Statistics");
            println!("=====================");
            println!("Total files: {}", stats.total_files);
            println!(
                "Total size: {} bytes ({:.2} MB)",
                stats.total_size_bytes, stats.total_size_mb
            );
            for (extension, count) in &stats.extensions {
                println!("  {extension}: {count}");
            }
            if let Some(last) = stats.last_indexed {
                println!("Last indexed: {}", last.format("%Y-%m-%d %H:%M:%S"));
            }
        }
        Commands::Search { query, mode } => {
            let hits = manager.search_files(&query, mode);
            for hit in &hits {
                println!("{} ({} bytes)", hit.path, hit.record.size);
            }
            println!("{} match(es)", hits.len());
        }
        Commands::Read { path } => {
            let content = manager.read_file(&path).await?;
            print!("{content}");
        }
        Commands::Write { path, content } => {
            manager.write_file(&path, &content).await?;
            println!("Wrote {path}");
        }
        Commands::Ls { path } => {
            for name in manager.list_directory(&path).await? {
                println!("{name}");
            }
        }
        Commands::Meta { path, set } => {
            if !set.is_empty() {
                let metadata: BTreeMap<String, Value> = set.into_iter().collect();
                manager.add_file_metadata(&path, metadata)?;
                manager.persist()?;
            }
            match manager.get_file_metadata(&path) {
                Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
                None => println!("No index entry for {path}"),
            }
        }
        Commands::Export { destination } => {
            manager.export_index(&destination)?;
            println!("Index exported to {}", destination.display());
        }
        Commands::Tools => unreachable!("handled before the session opens"),
    }
    Ok(())
}
