//! CLI integration tests for every subcommand.
//!
//! Uses `assert_cmd` to spawn the `adaptivecards` binary and verify exit
//! codes, stdout content, and stderr content. Commands run from the
//! workspace root so fixture paths resolve.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Locate the workspace root by walking up from CARGO_MANIFEST_DIR.
fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // crates/cli -> workspace root is two levels up
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .to_path_buf()
}

fn adaptivecards() -> Command {
    let mut cmd = cargo_bin_cmd!("adaptivecards");
    cmd.current_dir(workspace_root());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_card(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    adaptivecards()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Parse, normalize and validate Adaptive Card elements",
        ));
}

#[test]
fn version_exits_0() {
    adaptivecards()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("adaptivecards"));
}

// ──────────────────────────────────────────────
// 2. Parse
// ──────────────────────────────────────────────

#[test]
fn parse_lists_elements() {
    adaptivecards()
        .args(["parse", "fixtures/positive/date_input.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Input.Date id=dueDate"));
}

#[test]
fn parse_json_output_contains_all_elements() {
    let output = adaptivecards()
        .args(["--output", "json", "parse", "fixtures/positive/expense_form.json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let elements = json["elements"].as_array().unwrap();
    assert_eq!(elements.len(), 6);
    assert_eq!(elements[0]["type"], "Input.Text");
    assert_eq!(elements[5]["valueOn"], "yes");
    assert_eq!(json["warnings"], serde_json::json!([]));
}

#[test]
fn parse_reports_warnings_on_stderr() {
    adaptivecards()
        .args(["parse", "fixtures/warnings/lenient_values.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Media"))
        .stderr(predicate::str::contains(
            "warning: Unknown element type 'Media'",
        ));
}

#[test]
fn parse_quiet_suppresses_warnings() {
    adaptivecards()
        .args(["--quiet", "parse", "fixtures/warnings/lenient_values.json"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn parse_invalid_json_exits_1() {
    adaptivecards()
        .args(["--output", "json", "parse", "fixtures/negative/truncated.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalidJson"));
}

#[test]
fn parse_missing_file_exits_1() {
    adaptivecards()
        .args(["parse", "fixtures/positive/does_not_exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error reading file"));
}

// ──────────────────────────────────────────────
// 3. Normalize
// ──────────────────────────────────────────────

#[test]
fn normalize_drops_defaults_and_canonicalizes_enums() {
    let dir = TempDir::new().unwrap();
    let path = write_card(
        &dir,
        "card.json",
        r#"{"type": "Input.Date", "id": "d", "spacing": "MEDIUM", "separator": false, "isVisible": true, "min": ""}"#,
    );

    let output = adaptivecards()
        .arg("normalize")
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"type": "Input.Date", "id": "d", "spacing": "medium"})
    );
}

#[test]
fn normalize_keeps_array_shape() {
    let output = adaptivecards()
        .args(["normalize", "fixtures/positive/preserved_properties.json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(2));
    assert_eq!(json[0]["x-host-hint"]["calendar"], "gregorian");
    assert_eq!(json[1]["type"], "Rating");
}

// ──────────────────────────────────────────────
// 4. Validate
// ──────────────────────────────────────────────

#[test]
fn validate_positive_fixture_exits_0() {
    adaptivecards()
        .args(["validate", "--schema", "fixtures/positive/expense_form.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid (6 elements)"));
}

#[test]
fn validate_missing_id_exits_1() {
    adaptivecards()
        .args(["validate", "fixtures/negative/missing_id.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Property is required"));
}

#[test]
fn validate_warnings_pass_unless_strict() {
    adaptivecards()
        .args(["validate", "fixtures/warnings/lenient_values.json"])
        .assert()
        .success();

    adaptivecards()
        .args(["validate", "--strict", "fixtures/warnings/lenient_values.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("strict: Unknown element type 'Media'"));
}

#[test]
fn validate_schema_flags_malformed_date() {
    let dir = TempDir::new().unwrap();
    let path = write_card(
        &dir,
        "card.json",
        r#"{"type": "Input.Date", "id": "d", "value": "tomorrow"}"#,
    );

    adaptivecards()
        .args(["validate", "--schema"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("schema: Input.Date 'd'"));
}

#[test]
fn validate_json_output_reports_valid() {
    let output = adaptivecards()
        .args(["--output", "json", "validate", "fixtures/positive/date_input.json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["valid"], true);
    assert_eq!(json["elements"], 1);
}
