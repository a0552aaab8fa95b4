//! Feed output tests.
//!
//! Scrolls a directory-backed feed end to end and checks what is printed.

#![allow(clippy::unwrap_used)]
#![allow(deprecated)] // cargo_bin deprecation

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use photo_feed_test_support::{numbered_page, page_of, RecordBuilder};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn photo_feed(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("photo-feed").unwrap();
    cmd.current_dir(workdir)
        .env("XDG_CONFIG_HOME", workdir.join("xdg"))
        .env_remove("PHOTO_FEED_ACCESS_KEY");
    cmd
}

/// Writes `pages` as `page-1.json`, `page-2.json`, ...
fn write_source(workdir: &Path, pages: &[Vec<Value>]) -> PathBuf {
    let dir = workdir.join("photos");
    fs::create_dir_all(&dir).unwrap();
    for (i, records) in pages.iter().enumerate() {
        let body = serde_json::to_string(records).unwrap();
        fs::write(dir.join(format!("page-{}.json", i + 1)), body).unwrap();
    }
    dir
}

fn jsonl_ids(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            let card: Value = serde_json::from_str(line).unwrap();
            card["id"].as_str().unwrap().to_string()
        })
        .collect()
}

// === JSONL Format Tests ===

#[test]
fn test_scrolls_to_end_of_feed() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(
        temp_dir.path(),
        &[page_of(&["a", "b", "c"]), page_of(&["c", "d"])],
    );

    let output = photo_feed(temp_dir.path())
        .arg("--source")
        .arg(&source)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(jsonl_ids(&output.stdout), ["a", "b", "c", "d"]);
}

#[test]
fn test_full_pages_until_empty() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(temp_dir.path(), &[numbered_page("p1", 12)]);

    let output = photo_feed(temp_dir.path())
        .args(["-vv", "--source"])
        .arg(&source)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(jsonl_ids(&output.stdout).len(), 12);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("page-2.json"), "second page should be requested");
    assert!(!stderr.contains("page-3.json"), "feed should stop after the empty page");
}

#[test]
fn test_card_fields() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(
        temp_dir.path(),
        &[vec![RecordBuilder::new("x").author("Lin").build()]],
    );

    let output = photo_feed(temp_dir.path())
        .arg("--source")
        .arg(&source)
        .output()
        .unwrap();

    let card: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(card["title"], "Untitled");
    assert_eq!(card["alt"], "Photo by Lin");
    assert_eq!(card["author"], "Lin");
    assert_eq!(card["thumb"], "https://images.example/x?w=200");
    assert_eq!(card["regular"], "https://images.example/x?w=1080");
}

#[test]
fn test_numeric_and_string_ids_deduplicated() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(
        temp_dir.path(),
        &[
            vec![RecordBuilder::numeric(1).build()],
            vec![RecordBuilder::new("1").build(), RecordBuilder::new("2").build()],
        ],
    );

    let output = photo_feed(temp_dir.path())
        .arg("--source")
        .arg(&source)
        .output()
        .unwrap();

    assert_eq!(jsonl_ids(&output.stdout), ["1", "2"]);
}

#[test]
fn test_malformed_records_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(
        temp_dir.path(),
        &[
            vec![
                RecordBuilder::new("a").build(),
                RecordBuilder::new("b").without_thumb().build(),
            ],
            page_of(&["c"]),
        ],
    );

    let output = photo_feed(temp_dir.path())
        .arg("--source")
        .arg(&source)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(jsonl_ids(&output.stdout), ["a", "c"]);
    assert!(String::from_utf8_lossy(&output.stderr).contains("malformed"));
}

#[test]
fn test_page_without_valid_photos_does_not_end_feed() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(
        temp_dir.path(),
        &[
            vec![RecordBuilder::new("bad").without_thumb().build()],
            page_of(&["1", "2"]),
        ],
    );

    let output = photo_feed(temp_dir.path())
        .args(["-q", "--source"])
        .arg(&source)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(jsonl_ids(&output.stdout), ["1", "2"]);
}

#[test]
fn test_empty_source() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(temp_dir.path(), &[]);

    photo_feed(temp_dir.path())
        .arg("--source")
        .arg(&source)
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}

// === Page Limit ===

#[test]
fn test_pages_limit() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(
        temp_dir.path(),
        &[page_of(&["a"]), page_of(&["b"]), page_of(&["c"])],
    );

    let output = photo_feed(temp_dir.path())
        .args(["--pages", "2", "--source"])
        .arg(&source)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(jsonl_ids(&output.stdout), ["a", "b"]);
}

// === JSON Array Format Tests ===

#[test]
fn test_json_array() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(temp_dir.path(), &[page_of(&["a", "b"]), page_of(&["c"])]);

    let output = photo_feed(temp_dir.path())
        .args(["--format", "json", "--source"])
        .arg(&source)
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1, "compact array should be one line");
    let cards: Vec<Value> = serde_json::from_str(&stdout).unwrap();
    let ids: Vec<_> = cards.iter().map(|c| c["id"].as_str().unwrap()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn test_json_pretty() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(temp_dir.path(), &[page_of(&["a"])]);

    let output = photo_feed(temp_dir.path())
        .args(["--format", "json", "--pretty", "--source"])
        .arg(&source)
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("[\n"));
    let cards: Vec<Value> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(cards.len(), 1);
}

#[test]
fn test_json_empty_feed_is_empty_array() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(temp_dir.path(), &[]);

    photo_feed(temp_dir.path())
        .args(["--format", "json", "--source"])
        .arg(&source)
        .assert()
        .code(0)
        .stdout("[]\n");
}

// === Failure ===

#[test]
fn test_failed_page_keeps_loaded_photos() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(temp_dir.path(), &[page_of(&["a", "b"])]);
    fs::write(source.join("page-2.json"), "{ not json").unwrap();

    let output = photo_feed(temp_dir.path())
        .arg("--source")
        .arg(&source)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(jsonl_ids(&output.stdout), ["a", "b"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to fetch photos (page 2)"));
}

#[test]
fn test_failed_first_page() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(temp_dir.path(), &[]);
    fs::write(source.join("page-1.json"), r#"{"errors":["Rate Limit Exceeded"]}"#).unwrap();

    photo_feed(temp_dir.path())
        .arg("--source")
        .arg(&source)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to fetch photos (page 1)"));
}
