//! Integration tests for the pubmine CLI.
//!
//! Only offline behavior is exercised here: argument validation has to
//! happen before any network call, so these tests never need a reachable
//! endpoint.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper function to create a clean command instance
fn pubmine() -> Command { Command::cargo_bin("pubmine").unwrap() }

#[test]
fn rejects_output_path_without_csv_extension() {
  pubmine()
    .arg("breast cancer")
    .arg("--file")
    .arg("out.txt")
    .assert()
    .success()
    .stderr(predicate::str::contains("out.txt"))
    .stderr(predicate::str::contains("must end in .csv"));
}

#[test]
fn requires_a_search_keyword() {
  pubmine().assert().failure();
}

#[test]
fn rejected_path_leaves_no_output_behind() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("out.txt");

  pubmine().arg("breast cancer").arg("--file").arg(&path).assert().success();

  assert!(!path.exists());
}
