//! End-to-end tests for the focusflow binary.
//!
//! Each test runs against its own temporary home directory so the real
//! `~/.focusflow/` is never touched.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn focusflow(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("focusflow").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn shows_version() {
    let home = TempDir::new().unwrap();

    focusflow(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("focusflow"));
}

#[test]
fn stats_on_fresh_store_shows_defaults() {
    let home = TempDir::new().unwrap();

    focusflow(&home)
        .args(["stats", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"today_sessions\": 0"))
        .stdout(predicate::str::contains("\"total_focus_seconds\": 0"))
        .stdout(predicate::str::contains("\"last_session_date\": null"));
}

#[test]
fn settings_show_defaults() {
    let home = TempDir::new().unwrap();

    focusflow(&home)
        .args(["settings", "show", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"focus_minutes\": 25"))
        .stdout(predicate::str::contains("\"cycles_before_long_break\": 4"));
}

#[test]
fn settings_set_persists_across_invocations() {
    let home = TempDir::new().unwrap();

    focusflow(&home)
        .args(["settings", "set", "--focus", "50", "--cycles", "3"])
        .assert()
        .success();

    focusflow(&home)
        .args(["settings", "show", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"focus_minutes\": 50"))
        .stdout(predicate::str::contains("\"cycles_before_long_break\": 3"))
        // Untouched fields keep their defaults
        .stdout(predicate::str::contains("\"short_break_minutes\": 5"));
}

#[test]
fn settings_set_rejects_zero_duration() {
    let home = TempDir::new().unwrap();

    focusflow(&home)
        .args(["settings", "set", "--focus", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid settings"));

    // Prior settings are untouched
    focusflow(&home)
        .args(["settings", "show", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"focus_minutes\": 25"));
}

#[test]
fn settings_set_rejects_zero_cycles() {
    let home = TempDir::new().unwrap();

    focusflow(&home)
        .args(["settings", "set", "--cycles", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid settings"));
}

#[test]
fn reset_requires_force() {
    let home = TempDir::new().unwrap();

    focusflow(&home)
        .arg("reset")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn reset_force_restores_defaults() {
    let home = TempDir::new().unwrap();

    focusflow(&home)
        .args(["settings", "set", "--focus", "50"])
        .assert()
        .success();

    focusflow(&home)
        .args(["reset", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reset"));

    focusflow(&home)
        .args(["settings", "show", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"focus_minutes\": 25"));
}

#[test]
fn completions_generate_for_bash() {
    let home = TempDir::new().unwrap();

    focusflow(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("focusflow"));
}

#[test]
fn completions_reject_unknown_shell() {
    let home = TempDir::new().unwrap();

    focusflow(&home)
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}
