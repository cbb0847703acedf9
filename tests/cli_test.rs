use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const FIVE: &str = "L1\nL2\nL3\nL4\nL5\n";

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_license-head"))
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--skip-short"));
}

#[test]
fn prints_nested_report_for_cwd() {
    let dir = tempfile::tempdir().unwrap();
    let proj = dir.path().join("proj");
    fs::create_dir_all(proj.join("sub")).unwrap();
    fs::write(proj.join("license.txt"), FIVE).unwrap();
    fs::write(proj.join("sub").join("license.txt"), "A\nB\nC\nD\nE\nF\n").unwrap();

    bin()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("Name: sub\nA\nB\nC\nD\nE\nName: proj\nL1\nL2\nL3\nL4\nL5\n\n");
}

#[test]
fn empty_tree_prints_single_newline() {
    let dir = tempfile::tempdir().unwrap();

    bin()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn license_in_cwd_has_empty_name() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("license.txt"), FIVE).unwrap();

    bin()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("Name: \nL1\nL2\nL3\nL4\nL5\n\n");
}

#[test]
fn short_file_fails_with_no_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("good")).unwrap();
    fs::create_dir(dir.path().join("bad")).unwrap();
    fs::write(dir.path().join("good").join("license.txt"), FIVE).unwrap();
    fs::write(dir.path().join("bad").join("license.txt"), "short\n").unwrap();

    bin()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("expected at least 5"));
}

#[test]
fn skip_short_keeps_other_records() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("good")).unwrap();
    fs::create_dir(dir.path().join("bad")).unwrap();
    fs::write(dir.path().join("good").join("license.txt"), FIVE).unwrap();
    fs::write(dir.path().join("bad").join("license.txt"), "short\n").unwrap();

    bin()
        .current_dir(dir.path())
        .arg("--skip-short")
        .assert()
        .success()
        .stdout("Name: good\nL1\nL2\nL3\nL4\nL5\n\n")
        .stderr(predicate::str::contains("skipping short file"));
}
