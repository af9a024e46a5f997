//! CLI integration tests using the real epubstrap binary

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn epubstrap_cmd() -> Command {
    Command::cargo_bin("epubstrap").unwrap()
}

#[test]
fn test_help_output() {
    epubstrap_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bootstrap"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_output() {
    epubstrap_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("epubstrap"))
        .stdout(predicate::str::contains("Host profile"))
        .stdout(predicate::str::contains("Platform:"))
        .stdout(predicate::str::contains("Ninja binary:"));
}

#[test]
fn test_version_flag() {
    epubstrap_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("epubstrap"));
}

#[test]
fn test_completions_bash() {
    epubstrap_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("epubstrap"));
}

#[test]
fn test_completions_unknown_shell() {
    epubstrap_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_unknown_subcommand() {
    epubstrap_cmd().arg("frobnicate").assert().failure();
}

#[test]
fn test_bootstrap_help_mentions_skip_patches() {
    epubstrap_cmd()
        .args(["bootstrap", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--skip-patches"));
}
