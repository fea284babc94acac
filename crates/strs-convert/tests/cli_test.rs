#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for the strs-convert CLI

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const ROW: &str = "C000,123456.78,2021,0.67, ,333224444,Sample Joe A,876543.21,123 HOME ST,\
                   APT 999,,New York,NY,12345,4444,22,123456.78,joe@sample.com,5555551234,C\r\n";

fn strs_convert() -> Command {
    let mut cmd = Command::cargo_bin("strs-convert").unwrap();
    cmd.env_remove("STRS_CONVERT_DIR").env("RUST_LOG", "warn");
    cmd
}

#[test]
fn test_help_command() {
    strs_convert()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("layout"));
}

#[test]
fn test_version_command() {
    strs_convert()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("strs-convert"));
}

#[test]
fn test_invalid_command() {
    strs_convert()
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_layout_table() {
    strs_convert()
        .arg("layout")
        .assert()
        .success()
        .stdout(predicate::str::contains("SocialSecurityNumber"))
        .stdout(predicate::str::contains("Record width: 350 bytes"));
}

#[test]
fn test_layout_json() {
    let output = strs_convert().args(["layout", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["record_width"], 350);
    assert_eq!(json["fields"][0]["name"], "EmployeeID");
}

#[test]
fn test_convert_scans_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("2021.csv"), ROW).unwrap();
    fs::write(dir.path().join("old.out.dat"), b"ignored").unwrap();
    fs::write(dir.path().join("readme.txt"), b"ignored").unwrap();

    strs_convert()
        .args(["convert", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2021.csv"))
        .stdout(predicate::str::contains("old.out.dat").not())
        .stdout(predicate::str::contains("Processed: 1, Skipped: 0, Failed: 0"));

    let dat = fs::read(dir.path().join("2021.out.dat")).unwrap();
    assert_eq!(dat.len(), 350);
}

#[test]
fn test_convert_directory_from_environment() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("2021.csv"), ROW).unwrap();

    strs_convert()
        .arg("convert")
        .env("STRS_CONVERT_DIR", dir.path())
        .assert()
        .success();

    assert!(dir.path().join("2021.out.dat").exists());
}

#[test]
fn test_round_trip_through_files() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("2021.csv");
    fs::write(&csv, ROW).unwrap();

    strs_convert().arg("convert").arg(&csv).assert().success();

    let dat = dir.path().join("2021.out.dat");
    let renamed = dir.path().join("upload.dat");
    fs::rename(&dat, &renamed).unwrap();

    strs_convert().arg("convert").arg(&renamed).assert().success();

    let back = fs::read_to_string(dir.path().join("upload.out.csv")).unwrap();
    assert_eq!(back, ROW);
}

#[test]
fn test_skipped_arguments_are_listed() {
    let dir = TempDir::new().unwrap();
    let notes = dir.path().join("notes.txt");
    fs::write(&notes, b"").unwrap();

    strs_convert()
        .arg("convert")
        .arg(&notes)
        .assert()
        .success()
        .stdout(predicate::str::contains("(skipped)    1:"))
        .stdout(predicate::str::contains("Processed: 0, Skipped: 1, Failed: 0"));
}

#[test]
fn test_failure_sets_exit_code_and_keeps_going() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("a.dat");
    let good = dir.path().join("b.csv");
    fs::write(&bad, b"short").unwrap();
    fs::write(&good, ROW).unwrap();

    strs_convert()
        .arg("convert")
        .arg(&bad)
        .arg(&good)
        .assert()
        .failure()
        .stdout(predicate::str::contains("not a multiple of the record width"))
        .stdout(predicate::str::contains("Processed: 1, Skipped: 0, Failed: 1"))
        .stderr(predicate::str::contains("1 file(s) failed to convert"));

    assert!(!dir.path().join("a.out.csv").exists());
    assert!(dir.path().join("b.out.dat").exists());
}

#[test]
fn test_missing_directory() {
    strs_convert()
        .args(["convert", "--dir", "/nonexistent/strs/input"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input directory not found"));
}
