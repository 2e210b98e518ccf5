use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("perch")
        .env("PERCH_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    assert!(!config_path.exists());

    cargo_bin_cmd!("perch")
        .env("PERCH_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config written to"));

    assert!(config_path.exists());

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("clear_fields_on_submit ="));
    assert!(contents.contains("[backend]"));
}

#[test]
fn test_config_init_keeps_user_values() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    fs::write(&config_path, "clear_fields_on_submit = false\n").unwrap();

    cargo_bin_cmd!("perch")
        .env("PERCH_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success();

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("clear_fields_on_submit = false"));
    assert!(contents.contains("[backend]"));
}

#[test]
fn test_login_rejects_invalid_backend_url() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[backend]\nidentity_url = \"not a url\"\n",
    )
    .unwrap();

    cargo_bin_cmd!("perch")
        .env("PERCH_HOME", dir.path())
        .args(["login", "--email", "a@b.c", "--password", "secret"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("identity_url"));
}

#[test]
fn test_config_path_works_with_broken_backend_url() {
    // `config` subcommands must keep working so a bad config can be fixed
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[backend]\nidentity_url = \"not a url\"\n",
    )
    .unwrap();

    cargo_bin_cmd!("perch")
        .env("PERCH_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
