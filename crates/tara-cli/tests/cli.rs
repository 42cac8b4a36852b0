//! Smoke tests for the tara binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn parse_outputs_json_result() {
    Command::cargo_bin("tara")
        .unwrap()
        .arg("parse")
        .arg(fixture("sample_slip.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": true"))
        .stdout(predicate::str::contains("8713"))
        .stdout(predicate::str::contains("12480"));
}

#[test]
fn parse_text_format_prints_summary() {
    Command::cargo_bin("tara")
        .unwrap()
        .args(["parse", "--format", "text"])
        .arg(fixture("sample_slip.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("vehicle number: 8713"))
        .stdout(predicate::str::contains("gross weight"));
}

#[test]
fn parse_missing_file_fails() {
    Command::cargo_bin("tara")
        .unwrap()
        .args(["parse", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn parse_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("result.json");

    Command::cargo_bin("tara")
        .unwrap()
        .arg("parse")
        .arg(fixture("sample_slip.json"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.contains("\"vehicle_number\": \"8713\""));
}

#[test]
fn batch_writes_summary_csv() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::copy(fixture("sample_slip.json"), dir.path().join("slip_01.json")).unwrap();

    let pattern = dir.path().join("*.json");
    let output_dir = dir.path().join("out");

    Command::cargo_bin("tara")
        .unwrap()
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .arg("--output-dir")
        .arg(&output_dir)
        .arg("--summary")
        .assert()
        .success();

    let summary = std::fs::read_to_string(output_dir.join("summary.csv")).unwrap();
    assert!(summary.contains("slip_01"));
    assert!(summary.contains("true"));

    let per_file = std::fs::read_to_string(output_dir.join("slip_01.json")).unwrap();
    assert!(per_file.contains("\"success\": true"));
}

#[test]
fn config_show_prints_defaults() {
    Command::cargo_bin("tara")
        .unwrap()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fuzzy_match_threshold"));
}
