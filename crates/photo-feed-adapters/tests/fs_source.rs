//! Integration tests for the filesystem photo source.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;

use photo_feed_adapters::FsPhotoApi;
use photo_feed_core::{load_photo, FeedLoader, FeedStatus, LoadOutcome, PhotoApi, PhotoId};
use photo_feed_test_support::{page_of, RecordBuilder};
use serde_json::Value;
use tempfile::TempDir;

fn write_json(dir: &Path, name: &str, value: &Value) {
    fs::write(dir.join(name), serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn write_page(dir: &Path, page: u32, records: Vec<Value>) {
    write_json(dir, &format!("page-{page}.json"), &Value::Array(records));
}

#[test]
fn test_rejects_missing_directory() {
    let dir = TempDir::new().unwrap();
    assert!(FsPhotoApi::new(dir.path().join("nope")).is_err());
}

#[test]
fn test_reads_page_files() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), 1, page_of(&["a", "b"]));

    let api = FsPhotoApi::new(dir.path()).unwrap();
    let records = api.fetch_page(1).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["id"], "a");
}

#[test]
fn test_missing_page_is_empty() {
    let dir = TempDir::new().unwrap();
    let api = FsPhotoApi::new(dir.path()).unwrap();

    assert!(api.fetch_page(7).unwrap().is_empty());
}

#[test]
fn test_page_must_be_array() {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "page-1.json", &serde_json::json!({ "errors": ["nope"] }));
    fs::write(dir.path().join("page-2.json"), "not json").unwrap();

    let api = FsPhotoApi::new(dir.path()).unwrap();
    let err = api.fetch_page(1).unwrap_err();
    assert!(err.to_string().contains("JSON array"));
    assert!(api.fetch_page(2).is_err());
}

#[test]
fn test_fetch_photo() {
    let dir = TempDir::new().unwrap();
    write_json(
        dir.path(),
        "photo-abc.json",
        &RecordBuilder::new("abc").title("Dunes").build(),
    );

    let api = FsPhotoApi::new(dir.path()).unwrap();
    let photo = load_photo(&api, &PhotoId::new("abc")).unwrap();
    assert_eq!(photo.display_title(), "Dunes");

    let err = api.fetch_photo(&PhotoId::new("missing")).unwrap_err();
    assert!(err.to_string().contains("not found"));
    assert!(api.fetch_photo(&PhotoId::new("../abc")).is_err());
}

#[test]
fn test_feed_over_directory() {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), 1, page_of(&["1", "2", "3"]));
    write_page(dir.path(), 2, page_of(&["3", "4"]));

    let mut loader = FeedLoader::new(FsPhotoApi::new(dir.path()).unwrap());
    while loader.status() == FeedStatus::Idle {
        loader.load_next_page();
    }

    let ids: Vec<_> = loader.photos().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4"]);
    assert_eq!(loader.status(), FeedStatus::Exhausted);
    assert_eq!(loader.load_next_page(), LoadOutcome::Skipped(photo_feed_core::SkipReason::Exhausted));
}
