//! Binary smoke tests
//!
//! The TUI itself needs a terminal; these exercise the clap surface only.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_application() {
    Command::cargo_bin("splitter")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("expense splitting calculator"))
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_matches_manifest() {
    Command::cargo_bin("splitter")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_prints_paths_and_settings() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    Command::cargo_bin("splitter")
        .unwrap()
        .env("SPLITTER_CLI_DATA_DIR", temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: $"))
        .stdout(predicate::str::contains("config.json"));
}

#[test]
fn unknown_subcommand_fails() {
    Command::cargo_bin("splitter")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
