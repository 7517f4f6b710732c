//! Integration tests for the envseal CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Interactive passphrase prompts are bypassed by setting the
//! `ENVSEAL_PASSPHRASE` environment variable on each invocation, so
//! every flow here runs non-interactively.

use std::fs;

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

const PASSPHRASE: &str = "integration-passphrase";

/// Helper: get a Command pointing at the envseal binary.
fn envseal() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("envseal").expect("binary should exist");
    cmd.env_remove("ENVSEAL_PASSPHRASE");
    cmd.env_remove("ENVSEAL_DIR");
    cmd
}

#[test]
fn help_flag_shows_usage() {
    envseal()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Encrypt and decrypt .env files with a single passphrase",
        ))
        .stdout(predicate::str::contains("encrypt"))
        .stdout(predicate::str::contains("decrypt"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_shows_version() {
    envseal()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("envseal"));
}

#[test]
fn no_args_shows_help() {
    // Running with no subcommand should show an error or help.
    envseal().assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn encrypt_then_decrypt_roundtrip() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("api")).unwrap();
    fs::write(tmp.path().join(".env"), "ROOT_TOKEN=alpha\n").unwrap();
    fs::write(tmp.path().join("api/.env"), "API_TOKEN=beta\n").unwrap();

    envseal()
        .args(["encrypt", "--dir", tmp.path().to_str().unwrap()])
        .env("ENVSEAL_PASSPHRASE", PASSPHRASE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 file(s) to encrypt"));

    assert!(tmp.path().join(".env-encrypted").exists());
    assert!(tmp.path().join("api/.env-encrypted").exists());

    // Plaintext survives an encrypt run; remove it so decrypt provably
    // recreates it.
    fs::remove_file(tmp.path().join(".env")).unwrap();
    fs::remove_file(tmp.path().join("api/.env")).unwrap();

    envseal()
        .args(["decrypt", "--dir", tmp.path().to_str().unwrap()])
        .env("ENVSEAL_PASSPHRASE", PASSPHRASE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 file(s) to decrypt"));

    assert_eq!(
        fs::read_to_string(tmp.path().join(".env")).unwrap(),
        "ROOT_TOKEN=alpha\n"
    );
    assert_eq!(
        fs::read_to_string(tmp.path().join("api/.env")).unwrap(),
        "API_TOKEN=beta\n"
    );
}

#[test]
fn encrypt_patches_gitignore() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".env"), "A=1\n").unwrap();

    envseal()
        .args(["encrypt", "--dir", tmp.path().to_str().unwrap()])
        .env("ENVSEAL_PASSPHRASE", PASSPHRASE)
        .assert()
        .success();

    let gitignore = fs::read_to_string(tmp.path().join(".gitignore")).unwrap();
    assert!(gitignore.lines().any(|l| l == ".env"));
}

#[test]
fn encrypt_honors_no_gitignore() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".env"), "A=1\n").unwrap();

    envseal()
        .args(["encrypt", "--no-gitignore", "--dir", tmp.path().to_str().unwrap()])
        .env("ENVSEAL_PASSPHRASE", PASSPHRASE)
        .assert()
        .success();

    assert!(!tmp.path().join(".gitignore").exists());
}

#[test]
fn encrypt_on_empty_tree_succeeds_without_passphrase() {
    let tmp = TempDir::new().unwrap();

    // No ENVSEAL_PASSPHRASE and no TTY: this would hang at the prompt
    // if the command did not bail out before asking.
    envseal()
        .args(["encrypt", "--dir", tmp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No .env files found"));
}

#[test]
fn encrypt_rejects_short_env_passphrase() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".env"), "A=1\n").unwrap();

    envseal()
        .args(["encrypt", "--dir", tmp.path().to_str().unwrap()])
        .env("ENVSEAL_PASSPHRASE", "short")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 8 characters"));

    assert!(!tmp.path().join(".env-encrypted").exists());
}

#[test]
fn decrypt_reports_malformed_envelopes_and_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".env-encrypted"), b"not an envelope").unwrap();

    envseal()
        .args(["decrypt", "--dir", tmp.path().to_str().unwrap()])
        .env("ENVSEAL_PASSPHRASE", PASSPHRASE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed envelope"))
        .stderr(predicate::str::contains("1 of 1 file(s)"));
}

#[test]
fn decrypt_keeps_going_past_a_bad_file() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("ok")).unwrap();
    fs::write(tmp.path().join("ok/.env"), "GOOD=1\n").unwrap();

    envseal()
        .args(["encrypt", "--dir", tmp.path().to_str().unwrap()])
        .env("ENVSEAL_PASSPHRASE", PASSPHRASE)
        .assert()
        .success();
    fs::remove_file(tmp.path().join("ok/.env")).unwrap();

    // Drop a corrupt envelope next to the good one.
    fs::write(tmp.path().join(".env-encrypted"), b"junk").unwrap();

    envseal()
        .args(["decrypt", "--dir", tmp.path().to_str().unwrap()])
        .env("ENVSEAL_PASSPHRASE", PASSPHRASE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 of 2 file(s)"));

    // The good file was still restored.
    assert_eq!(
        fs::read_to_string(tmp.path().join("ok/.env")).unwrap(),
        "GOOD=1\n"
    );
}

#[test]
fn list_shows_discovered_files_without_passphrase() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("svc")).unwrap();
    fs::write(tmp.path().join(".env"), "A=1\n").unwrap();
    fs::write(tmp.path().join("svc/.env-encrypted"), b"whatever").unwrap();

    envseal()
        .args(["list", "--dir", tmp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 env file(s)"))
        .stdout(predicate::str::contains("plaintext"))
        .stdout(predicate::str::contains("encrypted"));
}

#[test]
fn completions_emit_a_script() {
    envseal()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("envseal"));
}

#[test]
fn dir_rejects_missing_directory() {
    let tmp = TempDir::new().unwrap();
    let gone = tmp.path().join("does-not-exist");

    envseal()
        .args(["list", "--dir", gone.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}
