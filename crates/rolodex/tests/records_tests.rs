//! File-based tests: load a record file and search it

use std::io::Write;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rolodex::{load_records, Error, HitView, SearchOptions};
use rolodex_core::SearchEngine;
use tempfile::NamedTempFile;

/// Helper to write a record file
fn record_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

const CONTACTS: &str = r#"{
  "records": [
    {"id": "1", "name": "John Smith", "tags": ["engineer", "climbing"]},
    {"id": "2", "name": "Jane Doe", "note": "met at the python meetup"},
    {"id": "3", "name": "John Johnson", "tags": ["python"]},
    {"id": "4", "name": "Jon Snow"}
  ]
}"#;

#[test]
fn test_load_and_search() {
    let file = record_file(CONTACTS);
    let records = load_records(file.path()).unwrap();
    assert_eq!(records.len(), 4);

    let hits = SearchEngine::new().search(&records, "john");
    let ids: Vec<&str> = hits.iter().map(|h| h.record.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3", "4"]);
}

#[test]
fn test_multi_word_search_from_file() {
    let file = record_file(CONTACTS);
    let records = load_records(file.path()).unwrap();

    let hits = SearchEngine::new().search(&records, "john python");
    let views: Vec<HitView> = hits.iter().map(HitView::from).collect();

    assert_eq!(views.len(), 1);
    assert_eq!(views[0].id, "3");
    // "john python" as a whole matches no single field
    assert!(views[0].matches.is_empty());
    assert!(views[0].score > 0.9);
}

#[test]
fn test_options_drive_engine() {
    let file = record_file(CONTACTS);
    let options = SearchOptions {
        records: file.path().to_path_buf(),
        min_score: Some(0.6),
        limit: Some(1),
        neutral_score: None,
    };

    let engine = SearchEngine::with_config(options.to_config().unwrap()).unwrap();
    let records = load_records(&options.records).unwrap();
    let hits = engine.search(&records, "john");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].record.id, "1");
}

#[test]
fn test_missing_file() {
    let path = PathBuf::from("/nonexistent/rolodex/contacts.json");
    assert!(matches!(load_records(&path), Err(Error::Io(_))));
}

#[test]
fn test_malformed_file() {
    let file = record_file(r#"{"contacts": []}"#);
    assert!(matches!(
        load_records(file.path()),
        Err(Error::Serialization(_))
    ));
}
