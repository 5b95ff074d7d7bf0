//! Configuration Loading Tests
//!
//! Tests for loading `StoreConfig` from disk and driving a store with it.

use std::fs;

use docstore::observability::LogLevel;
use docstore::{AuthorMatch, DocumentDraft, DocumentStore, IdPolicy, StoreConfig};
use tempfile::TempDir;

fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("docstore.json");
    fs::write(&path, body).unwrap();
    path
}

/// File contents are parsed into the config.
#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{"id_policy":"overwrite_existing","author_match":"author_id","log_level":"off"}"#,
    );

    let config = StoreConfig::load(&path).unwrap();
    assert_eq!(config.id_policy, IdPolicy::OverwriteExisting);
    assert_eq!(config.author_match, AuthorMatch::AuthorId);
    assert_eq!(config.log_level, LogLevel::Off);
}

/// Missing file is an I/O error naming the path.
#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = StoreConfig::load(&path).unwrap_err();
    assert_eq!(err.code(), "DOCSTORE_CONFIG_IO");
    assert!(err.to_string().contains("absent.json"));
}

/// Broken JSON is a parse error.
#[test]
fn test_invalid_json_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "{ not json");

    let err = StoreConfig::load(&path).unwrap_err();
    assert_eq!(err.code(), "DOCSTORE_CONFIG_PARSE");
}

/// A loaded config changes store behavior.
#[test]
fn test_loaded_config_drives_store() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"id_policy":"overwrite_existing","log_level":"off"}"#);

    let mut store = DocumentStore::with_config(StoreConfig::load(&path).unwrap());
    assert_eq!(store.config().id_policy, IdPolicy::OverwriteExisting);

    let first = store
        .save(DocumentDraft {
            id: Some("fixed".into()),
            ..DocumentDraft::with_text("v1", "one")
        })
        .unwrap();
    let second = store
        .save(DocumentDraft {
            id: Some("fixed".into()),
            ..DocumentDraft::with_text("v2", "two")
        })
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(store.len(), 1);
    assert_eq!(store.find_by_id("fixed").unwrap().title.as_deref(), Some("v2"));

    let metrics = store.metrics();
    assert_eq!(metrics.inserts, 1);
    assert_eq!(metrics.overwrites, 1);
}
