/// Edge case integration tests
///
/// These tests cover filesystem quirks, data edge cases, and other unusual scenarios
mod common;

use std::fs;

use common::{BaseDirBuilder, open_manager};
use findex::{IndexError, SearchMode};

#[test]
fn test_edge_case_empty_base_directory() {
    // A tree with no files at all yields a zero aggregate, not an error
    let base = BaseDirBuilder::new().build();
    let manager = open_manager(base.path());

    let stats = manager.file_stats();
    assert_eq!(stats.total_files, 0);
    assert_eq!(stats.total_size_bytes, 0);
    assert!(stats.extensions.is_empty());
    assert!(manager.search_files("", SearchMode::Name).is_empty());
}

#[test]
fn test_edge_case_zero_byte_file() {
    // An empty file is indexed with size 0 and a real hash; an empty hash
    // string would mean "unknown", which this is not
    let base = BaseDirBuilder::new().with_file("empty.txt", "").build();
    let manager = open_manager(base.path());

    let record = manager.get_file_metadata("empty.txt").unwrap();
    assert_eq!(record.size, 0);
    assert!(!record.hash.is_empty(), "Empty file should still hash");
}

#[test]
fn test_edge_case_unicode_filenames() {
    // Unicode in file names: accents, CJK, emoji
    let base = BaseDirBuilder::new()
        .with_file("café.txt", "coffee")
        .with_file("日本語.md", "text")
        .with_file("🚀.log", "launch")
        .build();
    let manager = open_manager(base.path());

    assert_eq!(manager.file_stats().total_files, 3);
    let hits = manager.search_files("café", SearchMode::Name);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].record.name, "café.txt");
}

#[test]
fn test_edge_case_dotfile_has_no_extension() {
    // ".gitignore" is a name, not an extension
    let base = BaseDirBuilder::new().with_file(".gitignore", "target/").build();
    let manager = open_manager(base.path());

    let record = manager.get_file_metadata(".gitignore").unwrap();
    assert_eq!(record.extension, "");
    assert_eq!(manager.file_stats().extensions["no extension"], 1);
}

#[test]
fn test_edge_case_multiple_dots_keep_last_suffix() {
    let base = BaseDirBuilder::new().with_file("archive.tar.gz", "bytes").build();
    let manager = open_manager(base.path());

    let record = manager.get_file_metadata("archive.tar.gz").unwrap();
    assert_eq!(record.extension, ".gz");
}

#[test]
fn test_edge_case_uppercase_extension_normalized() {
    // Extension is stored lowercase; the original name is preserved
    let base = BaseDirBuilder::new().with_file("REPORT.PDF", "pdf bytes").build();
    let manager = open_manager(base.path());

    let record = manager.get_file_metadata("REPORT.PDF").unwrap();
    assert_eq!(record.name, "REPORT.PDF");
    assert_eq!(record.extension, ".pdf");
}

#[test]
fn test_edge_case_empty_name_query_matches_everything() {
    // Substring match with an empty query is a match for every record
    let base =
        BaseDirBuilder::new().with_file("a.txt", "a").with_file("b.md", "b").build();
    let manager = open_manager(base.path());

    assert_eq!(manager.search_files("", SearchMode::Name).len(), 2);
}

#[test]
fn test_edge_case_zero_size_threshold_matches_everything() {
    let base =
        BaseDirBuilder::new().with_file("a.txt", "a").with_file("empty", "").build();
    let manager = open_manager(base.path());

    assert_eq!(manager.search_files("0", SearchMode::Size).len(), 2);
}

#[test]
fn test_edge_case_negative_size_query_matches_nothing() {
    // "-1" does not parse as an unsigned threshold; no matches, no error
    let base = BaseDirBuilder::new().with_file("a.txt", "alpha").build();
    let manager = open_manager(base.path());

    assert!(manager.search_files("-1", SearchMode::Size).is_empty());
}

#[test]
fn test_edge_case_many_small_files() {
    // 500 files across 10 subdirectories
    let mut builder = BaseDirBuilder::new();
    for i in 0..500 {
        builder = builder.with_file(&format!("dir-{}/file-{i}.txt", i % 10), "x");
    }
    let base = builder.build();
    let manager = open_manager(base.path());

    let stats = manager.file_stats();
    assert_eq!(stats.total_files, 500);
    assert_eq!(stats.extensions[".txt"], 500);
}

#[test]
fn test_edge_case_deeply_nested_file() {
    let base = BaseDirBuilder::new()
        .with_file("a/b/c/d/e/f/g/deep.txt", "buried")
        .build();
    let manager = open_manager(base.path());

    let hits = manager.search_files("deep", SearchMode::Name);
    assert_eq!(hits.len(), 1);
    assert!(hits[0].path.contains("a/b/c"));
}

#[tokio::test]
async fn test_edge_case_write_to_missing_parent_directory() {
    // The channel reports the failure; no index entry appears
    let base = BaseDirBuilder::new().build();
    let manager = open_manager(base.path());

    let result = manager.write_file("missing-dir/new.txt", "content").await;
    assert!(matches!(result, Err(IndexError::Channel(_))));
    assert!(manager.get_file_metadata("missing-dir/new.txt").is_none());
}

#[tokio::test]
async fn test_edge_case_list_missing_directory_is_error_not_panic() {
    let base = BaseDirBuilder::new().build();
    let manager = open_manager(base.path());

    let result = manager.list_directory("no-such-dir").await;
    assert!(matches!(result, Err(IndexError::Channel(_))));
}

#[test]
fn test_edge_case_file_changed_between_sessions() {
    // Content edited while no session is open: the reopen rescan reports it
    let base = BaseDirBuilder::new().with_file("a.txt", "version one").build();

    let first = open_manager(base.path());
    let original_hash = first.get_file_metadata("a.txt").unwrap().hash;
    first.close();

    fs::write(base.path().join("a.txt"), "version two").unwrap();

    // The reopen rescan rehashes every file and replaces the stale record.
    let second = open_manager(base.path());
    assert_ne!(second.get_file_metadata("a.txt").unwrap().hash, original_hash);
}

#[test]
fn test_edge_case_hidden_files_are_indexed() {
    // Dotfiles are regular files; only the store's own files are excluded
    let base = BaseDirBuilder::new().with_file(".env", "SECRET=1").build();
    let manager = open_manager(base.path());

    assert!(manager.get_file_metadata(".env").is_some());
}

#[tokio::test]
async fn test_edge_case_overwrite_with_identical_content() {
    // Rewriting the same bytes keeps the hash stable
    let base = BaseDirBuilder::new().with_file("a.txt", "same").build();
    let manager = open_manager(base.path());
    let before = manager.get_file_metadata("a.txt").unwrap().hash;

    manager.write_file("a.txt", "same").await.unwrap();

    assert_eq!(manager.get_file_metadata("a.txt").unwrap().hash, before);
}
