//! Tests for the `meshaug` binary.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::{contains, starts_with};
use serde_json::Value;
use tempfile::TempDir;

const CORNERS: &str = "OFF\n4 1 0\n0 0 0\n1 0 0\n0 1 0\n0 0 1\n3 0 1 2\n";

fn cmd() -> Command {
    cargo_bin_cmd!("meshaug")
}

fn input(contents: &str) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().expect("create temp dir");
    let path = tmp.path().join("corners.off");
    fs::write(&path, contents).expect("write input");
    (tmp, path)
}

fn run_json(args: &[&str]) -> Value {
    let out = cmd()
        .arg("--json")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("valid json output")
}

#[test]
fn apply_prints_output_path() {
    let (tmp, path) = input(CORNERS);
    let expected = tmp.path().join("centered_corners.off");

    cmd()
        .arg("apply")
        .arg("Centering")
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("centered_corners.off"));
    assert!(expected.exists());
}

#[test]
fn apply_with_public_prefix_json() {
    let (_tmp, path) = input(CORNERS);
    let v = run_json(&[
        "apply",
        "Adding Noise",
        path.to_str().unwrap(),
        "--seed",
        "5",
        "--public-prefix",
        "/static/uploads/",
    ]);
    assert_eq!(v["output"], "/static/uploads/noisy_corners.off");
    assert_eq!(v["file_type"], "3d");
}

#[test]
fn seeded_apply_is_reproducible() {
    let (tmp, path) = input(CORNERS);
    let out = tmp.path().join("rotated_corners.off");

    cmd().args(["apply", "rotation"]).arg(&path).args(["--seed", "11"]).assert().success();
    let first = fs::read_to_string(&out).unwrap();
    cmd().args(["apply", "rotation"]).arg(&path).args(["--seed", "11"]).assert().success();
    assert_eq!(fs::read_to_string(&out).unwrap(), first);
}

#[test]
fn apply_failure_exits_nonzero() {
    let (_tmp, path) = input("OFF\n3 0 0\n0 0 0\n0 0 0\n0 0 0\n");
    cmd()
        .arg("apply")
        .arg("Normalization")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(starts_with(
            "Error in normalization: invalid model - zero scale factor",
        ));
}

#[test]
fn apply_unknown_operation() {
    let (_tmp, path) = input(CORNERS);
    cmd()
        .arg("apply")
        .arg("Time Stretch")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(contains("Error: invalid option selected: Time Stretch"));
}

#[test]
fn debug_logging_goes_to_stderr() {
    let out = cmd()
        .env("RUST_LOG", "debug")
        .arg("--json")
        .arg("list")
        .assert()
        .success()
        .stderr(contains("Starting command"))
        .get_output()
        .stdout
        .clone();
    let v: Value = serde_json::from_slice(&out).expect("stdout stays pure json");
    assert!(v["preprocess_options"].is_array());
}

#[test]
fn list_text() {
    cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Preprocessing:"))
        .stdout(contains("Adding Noise"));
}

#[test]
fn list_json() {
    let v = run_json(&["list"]);
    assert_eq!(v["preprocess_options"], serde_json::json!(["Normalization", "Centering"]));
    assert_eq!(
        v["augmentation_options"],
        serde_json::json!(["Rotation", "Scaling", "Adding Noise"])
    );
}

#[test]
fn inspect_json() {
    let (_tmp, path) = input(CORNERS);
    let v = run_json(&["inspect", path.to_str().unwrap()]);
    assert_eq!(v["vertices"], 4);
    assert_eq!(v["faces"], 1);
    assert_eq!(v["extent"], 1.0);
    assert_eq!(v["centroid"], serde_json::json!([0.25, 0.25, 0.25]));
}

#[test]
fn inspect_missing_file_fails() {
    cmd()
        .args(["inspect", "no/such/mesh.off"])
        .assert()
        .failure()
        .stderr(contains("failed to load"));
}
