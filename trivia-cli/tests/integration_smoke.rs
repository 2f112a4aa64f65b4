//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help_lists_commands() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"))
        .stdout(predicate::str::contains("seed"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--bind"))
        .stdout(predicate::str::contains("--cors-origin"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_seed_help() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("seed").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--max-connections"));
}

#[test]
fn test_migrate_without_database_url_fails() {
    let temp = std::env::temp_dir();
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.current_dir(&temp)
        .env_remove("DATABASE_URL")
        .env("HOME", &temp)
        .arg("migrate");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_invalid_bind_address_rejected() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("serve").arg("--bind").arg("not-an-address");

    cmd.assert().failure();
}
