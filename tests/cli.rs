//! Integration tests for the `sufx` command-line tool.
//!
//! Each test runs the built binary against fixture files in a shared
//! temporary directory, with an isolated config path.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;
use tempfile::TempDir;

static FIXTURE_DIR: OnceLock<TempDir> = OnceLock::new();

/// Get or create the test fixture directory (singleton)
fn fixture_dir() -> &'static Path {
    FIXTURE_DIR.get_or_init(create_fixture_dir).path()
}

/// Create fixture files with known content
fn create_fixture_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create fixture dir");

    fs::write(dir.path().join("banana.txt"), "banana").unwrap();
    fs::write(dir.path().join("repeat.txt"), "aaaa").unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();
    fs::write(dir.path().join("binary.bin"), b"ab\x00cd").unwrap();
    fs::write(dir.path().join("unicode.txt"), "abracadabra ünïcödé").unwrap();

    dir
}

fn fixture(name: &str) -> PathBuf {
    fixture_dir().join(name)
}

/// Run sufx with given args; returns (stdout, stderr, exit code)
fn run_sufx(args: &[&str]) -> (String, String, i32) {
    let config = fixture_dir().join("no-such-config.json");
    let output = Command::new(env!("CARGO_BIN_EXE_sufx"))
        .args(args)
        .arg("--no-color")
        .arg("--config")
        .arg(&config)
        .output()
        .expect("Failed to run sufx");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

#[test]
fn test_contains_found_and_missing() {
    let file = fixture("banana.txt");
    let (stdout, _, code) = run_sufx(&["contains", file.to_str().unwrap(), "ana", "nab"]);

    assert!(stdout.lines().any(|l| l.starts_with("found") && l.ends_with("ana")));
    assert!(stdout.lines().any(|l| l.starts_with("missing") && l.ends_with("nab")));
    assert_eq!(code, 1, "any missing pattern fails the command");
}

#[test]
fn test_contains_all_found() {
    let file = fixture("banana.txt");
    let (_, _, code) = run_sufx(&["contains", file.to_str().unwrap(), "ban", "nana", "a"]);
    assert_eq!(code, 0);
}

#[test]
fn test_occurrences_json() {
    let file = fixture("banana.txt");
    let (stdout, _, code) = run_sufx(&["--json", "occurrences", file.to_str().unwrap(), "ana"]);

    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["count"], 2);
    assert_eq!(value["positions"], serde_json::json!([1, 3]));
}

#[test]
fn test_suffixes_in_order() {
    let file = fixture("banana.txt");
    let (stdout, _, code) = run_sufx(&["suffixes", file.to_str().unwrap()]);

    assert_eq!(code, 0);
    let starts: Vec<usize> = stdout
        .lines()
        .map(|l| l.split('\t').next().unwrap().parse().unwrap())
        .collect();
    assert_eq!(starts, vec![6, 5, 3, 1, 0, 4, 2]);
    assert!(stdout.contains("1\tanana$"));
}

#[test]
fn test_suffixes_limit() {
    let file = fixture("repeat.txt");
    let (stdout, _, _) = run_sufx(&["suffixes", file.to_str().unwrap(), "--limit", "2"]);
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn test_stats_json() {
    let file = fixture("repeat.txt");
    let (stdout, _, code) = run_sufx(&["--json", "stats", file.to_str().unwrap()]);

    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["text_len"], 5);
    assert_eq!(value["leaves"], 5);
    assert_eq!(value["internal_nodes"], 4);
}

#[test]
fn test_validate() {
    let file = fixture("unicode.txt");
    let (stdout, _, code) = run_sufx(&["validate", file.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "valid");

    let (stdout, _, code) = run_sufx(&["--chars", "validate", file.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "valid");
}

#[test]
fn test_chars_mode_counts_scalars() {
    let file = fixture("unicode.txt");
    let (stdout, _, _) = run_sufx(&["--chars", "--json", "occurrences", file.to_str().unwrap(), "ö"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    // "abracadabra ünïcödé": 'ö' is the 17th scalar value
    assert_eq!(value["positions"], serde_json::json!([16]));
}

#[test]
fn test_empty_input_is_construction_error() {
    let file = fixture("empty.txt");
    let (_, stderr, code) = run_sufx(&["stats", file.to_str().unwrap()]);
    assert_eq!(code, 2);
    assert!(stderr.contains("empty input"));
}

#[test]
fn test_sentinel_collision_and_override() {
    let file = fixture("binary.bin");
    let (_, stderr, code) = run_sufx(&["stats", file.to_str().unwrap()]);
    assert_eq!(code, 2);
    assert!(stderr.contains("position 2"));

    let (_, _, code) = run_sufx(&["--sentinel", "255", "validate", file.to_str().unwrap()]);
    assert_eq!(code, 0);
}

#[test]
fn test_missing_file() {
    let file = fixture("does-not-exist.txt");
    let (_, stderr, code) = run_sufx(&["stats", file.to_str().unwrap()]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Failed to open"));
}

#[test]
fn test_init_config_writes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sufx").join("config.json");

    let output = Command::new(env!("CARGO_BIN_EXE_sufx"))
        .args(["init-config", "--config"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["sentinel_byte"], 0);

    let again = Command::new(env!("CARGO_BIN_EXE_sufx"))
        .args(["init-config", "--config"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(!again.status.success());
}
