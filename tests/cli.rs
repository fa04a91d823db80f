//! End-to-end CLI tests.

mod common;

use assert_cmd::Command;
use common::{dataset, scenario_records, with_paths, record};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn write_dataset_fixture(dir: &std::path::Path) -> String {
    let mut records = scenario_records();
    records.push(with_paths(
        record("USB Devices", "external-storage"),
        &["HKLM\\SYSTEM\\CurrentControlSet\\Enum\\USBSTOR"],
    ));
    let ds = dataset(records);
    let path = dir.join("artifacts.json");
    std::fs::write(&path, serde_json::to_string_pretty(&ds).unwrap()).unwrap();
    path.display().to_string()
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("regdex").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("regdex").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_list_filters_by_category() {
    let dir = tempdir().unwrap();
    let ds = write_dataset_fixture(dir.path());

    let mut cmd = Command::cargo_bin("regdex").unwrap();
    cmd.args(["--dataset", &ds, "list", "--category", "program-execution"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Zed"))
        .stdout(predicate::str::contains("Alpha"))
        .stdout(predicate::str::contains("Mid").not());
}

#[test]
fn test_list_robot_output_is_json() {
    let dir = tempdir().unwrap();
    let ds = write_dataset_fixture(dir.path());

    let mut cmd = Command::cargo_bin("regdex").unwrap();
    let output = cmd
        .args(["--robot", "--dataset", &ds, "list", "--sort", "title"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["status"], "ok");
    assert_eq!(parsed["visible"], 4);
    assert_eq!(parsed["artifacts"][0]["title"], "Alpha");
}

#[test]
fn test_unknown_sort_key_is_not_an_error() {
    let dir = tempdir().unwrap();
    let ds = write_dataset_fixture(dir.path());

    let mut cmd = Command::cargo_bin("regdex").unwrap();
    cmd.args(["--dataset", &ds, "list", "--sort", "relevance"])
        .assert()
        .success();
}

#[test]
fn test_search_is_case_insensitive() {
    let dir = tempdir().unwrap();
    let ds = write_dataset_fixture(dir.path());

    let mut cmd = Command::cargo_bin("regdex").unwrap();
    cmd.args(["--dataset", &ds, "search", "USBSTOR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USB Devices"));

    let mut cmd = Command::cargo_bin("regdex").unwrap();
    cmd.args(["--dataset", &ds, "search", "usbstor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USB Devices"));
}

#[test]
fn test_show_renders_all_sections() {
    let dir = tempdir().unwrap();
    let ds = write_dataset_fixture(dir.path());

    let mut cmd = Command::cargo_bin("regdex").unwrap();
    cmd.args(["--dataset", &ds, "show", "zed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overview"))
        .stdout(predicate::str::contains("Limitations"))
        .stdout(predicate::str::contains("Not documented."));
}

#[test]
fn test_show_unknown_artifact_fails() {
    let dir = tempdir().unwrap();
    let ds = write_dataset_fixture(dir.path());

    let mut cmd = Command::cargo_bin("regdex").unwrap();
    cmd.args(["--dataset", &ds, "show", "no-such-artifact"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("artifact not found"));
}

#[test]
fn test_missing_dataset_is_single_readable_error() {
    let mut cmd = Command::cargo_bin("regdex").unwrap();
    cmd.args(["--dataset", "/nonexistent/artifacts.json", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load dataset"));
}

#[test]
fn test_stats_displays_precomputed_counts() {
    let dir = tempdir().unwrap();
    let ds = write_dataset_fixture(dir.path());

    let mut cmd = Command::cargo_bin("regdex").unwrap();
    cmd.args(["--dataset", &ds, "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total artifacts"))
        .stdout(predicate::str::contains("program-execution: 2"));
}

#[test]
fn test_validate_exits_nonzero_on_invalid_files() {
    let dir = tempdir().unwrap();
    let artifacts = dir.path().join("artifacts/program-execution");
    std::fs::create_dir_all(&artifacts).unwrap();
    std::fs::write(artifacts.join("bad.yml"), "title: x\n").unwrap();

    let mut cmd = Command::cargo_bin("regdex").unwrap();
    cmd.current_dir(dir.path())
        .args(["validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("validation failed"));
}

#[test]
fn test_build_then_list_round_trip() {
    let dir = tempdir().unwrap();
    let artifacts = dir.path().join("artifacts/persistence-methods");
    std::fs::create_dir_all(&artifacts).unwrap();
    std::fs::write(
        artifacts.join("run-keys.yml"),
        "title: Run Keys Persistence\ncategory: persistence-methods\ndescription: Autostart programs at logon\npaths: HKLM\\Software\\Microsoft\\Windows\\CurrentVersion\\Run\nlimitations: [does not prove execution]\ncorrelation:\n  strengthens_evidence: [prefetch]\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("regdex").unwrap();
    cmd.current_dir(dir.path()).args(["build"]).assert().success();

    let mut cmd = Command::cargo_bin("regdex").unwrap();
    cmd.current_dir(dir.path())
        .args(["list", "--hive", "HKLM"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Run Keys Persistence"));
}
