#![allow(clippy::unwrap_used)]
//! End-to-end tests for the `pos-collect` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pos-collect"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn prints_sorted_unique_values() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.yaml", r#"{word: "run", pos: "VERB"}"#);
    write(
        tmp.path(),
        "b.yml",
        r#"{entries: [{pos: ["NOUN","ADJ"]}, {pos: "NOUN"}]}"#,
    );

    let output = run(&[tmp.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "Unique pos values: ['ADJ', 'NOUN', 'VERB']\n"
    );
    assert!(stderr(&output).is_empty(), "stderr: {}", stderr(&output));
}

#[test]
fn corrupt_file_is_reported_without_failing() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "broken.yaml", "key: [unclosed bracket");
    write(tmp.path(), "good.yaml", r#"{pos: "INTJ"}"#);

    let output = run(&[tmp.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Unique pos values: ['INTJ']\n");
    let err = stderr(&output);
    assert!(err.contains("broken.yaml"), "stderr: {err}");
    assert!(err.contains("YAML parse error"), "stderr: {err}");
}

#[test]
fn strict_mode_fails_on_scan_errors() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "broken.yaml", "key: [unclosed bracket");
    write(tmp.path(), "good.yaml", r#"{pos: "INTJ"}"#);

    let output = run(&["--strict", tmp.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "Unique pos values: ['INTJ']\n");
}

#[test]
fn missing_directory_reports_and_prints_empty_list() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("does_not_exist");

    let output = run(&[missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Unique pos values: []\n");
    assert!(
        stderr(&output).contains("Failed to access directory"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn missing_argument_prints_usage_and_exits_one() {
    let output = run(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Usage:"), "stdout: {}", stdout(&output));
}

#[test]
fn extra_argument_prints_usage_and_exits_one() {
    let output = run(&["one", "two"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Usage:"), "stdout: {}", stdout(&output));
}

#[test]
fn help_exits_zero() {
    let output = run(&["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("<DIRECTORY>"));
}

#[test]
fn json_format_emits_report() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "tags.yml", "pos: [NOUN, VERB]");
    write(tmp.path(), "notes.txt", "pos: NOTE");

    let output = run(&["--format", "json", tmp.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["values"], serde_json::json!(["NOUN", "VERB"]));
    assert_eq!(json["scanned_files"], 1);
    assert_eq!(json["ok"], true);
}

#[test]
fn recursive_flag_descends_into_subdirectories() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "top.yaml", "pos: NOUN");
    fs::create_dir(tmp.path().join("sub")).unwrap();
    write(&tmp.path().join("sub"), "deep.yaml", "pos: VERB");

    let flat = run(&[tmp.path().to_str().unwrap()]);
    assert_eq!(stdout(&flat), "Unique pos values: ['NOUN']\n");

    let deep = run(&["--recursive", tmp.path().to_str().unwrap()]);
    assert_eq!(stdout(&deep), "Unique pos values: ['NOUN', 'VERB']\n");
}

#[test]
fn custom_key_changes_label_and_values() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.yaml", "pos: NOUN\ngender: [m, f]\n");

    let output = run(&["--key", "gender", tmp.path().to_str().unwrap()]);

    assert_eq!(stdout(&output), "Unique gender values: ['f', 'm']\n");
}

#[test]
fn largest_max_file_size_still_reads_files() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.yaml", "pos: NOUN");

    let output = run(&[
        "--max-file-size",
        "18446744073709551615",
        tmp.path().to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Unique pos values: ['NOUN']\n");
    assert!(stderr(&output).is_empty(), "stderr: {}", stderr(&output));
}

#[test]
fn multi_document_streams_need_opt_in() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "stream.yaml", "pos: NOUN\n---\npos: VERB\n");

    let default_run = run(&[tmp.path().to_str().unwrap()]);
    assert_eq!(default_run.status.code(), Some(0));
    assert_eq!(stdout(&default_run), "Unique pos values: []\n");
    assert!(
        stderr(&default_run).contains("expected a single document"),
        "stderr: {}",
        stderr(&default_run)
    );

    let opted_in = run(&["--multi-document", tmp.path().to_str().unwrap()]);
    assert_eq!(stdout(&opted_in), "Unique pos values: ['NOUN', 'VERB']\n");
}
