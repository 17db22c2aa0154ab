//! Runs the binary against input files in a temporary working directory.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const EXAMPLE: &str = "2-4,6-8\n2-3,4-5\n5-7,7-9\n2-8,3-7\n6-6,4-6\n2-6,4-8\n";

fn workdir(input: Option<&str>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();

    if let Some(input) = input {
        fs::write(dir.path().join("input.txt"), input).unwrap();
    }

    dir
}

fn command(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("camp-cleanup").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn prints_both_counts() {
    let dir = workdir(Some(EXAMPLE));
    command(&dir).assert().success().stdout("2\n4\n");
}

#[test]
fn single_pair_contains_and_overlaps_itself() {
    let dir = workdir(Some("1-1,1-1"));
    command(&dir).assert().success().stdout("1\n1\n");
}

#[test]
fn empty_input_counts_nothing() {
    let dir = workdir(Some(""));
    command(&dir).assert().success().stdout("0\n0\n");
}

#[test]
fn missing_input_fails() {
    let dir = workdir(None);

    command(&dir)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("failed to open `input.txt`"));
}

#[test]
fn malformed_line_is_reported() {
    let dir = workdir(Some("2-4,6-8\n2-3,4-x\n"));

    command(&dir)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("input.txt:2:7: `2-3,4-x`"))
        .stderr(predicate::str::contains("expected integer"));
}

#[test]
fn verbose_logs_to_stderr() {
    let dir = workdir(Some(EXAMPLE));

    command(&dir)
        .args(["--verbose", "extra"])
        .assert()
        .success()
        .stdout("2\n4\n")
        .stderr(predicate::str::contains("DEBUG: fully-contains: 2"))
        .stderr(predicate::str::contains("DEBUG: ignoring argument: extra"));
}

#[test]
fn extra_arguments_are_ignored() {
    let dir = workdir(Some(EXAMPLE));

    command(&dir)
        .args(["--quiet", "other.txt"])
        .assert()
        .success()
        .stdout("2\n4\n")
        .stderr("");
}
