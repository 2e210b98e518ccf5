//! End-to-end `perch login` against a mock identity server.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Writes a config pointing both backend URLs at the mock server.
fn write_config(home: &std::path::Path, server_uri: &str) {
    fs::write(
        home.join("config.toml"),
        format!(
            "[backend]\napi_key = \"test-key\"\nproject_id = \"proj\"\n\
             identity_url = \"{server_uri}\"\ndata_url = \"{server_uri}\"\n"
        ),
    )
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn login_persists_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "idToken": "id-123",
            "refreshToken": "refresh-456",
            "expiresIn": "3600",
            "localId": "uid-789",
            "email": "a@b.c",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let home = tempdir().unwrap();
    write_config(home.path(), &server.uri());

    let assert = tokio::task::spawn_blocking({
        let home = home.path().to_path_buf();
        move || {
            cargo_bin_cmd!("perch")
                .env("PERCH_HOME", &home)
                .args(["login", "--email", "a@b.c", "--password", "secret"])
                .assert()
        }
    })
    .await
    .unwrap();

    assert
        .success()
        .stdout(predicate::str::contains("Signed in as a@b.c."));

    let session = fs::read_to_string(home.path().join("session.json")).unwrap();
    assert!(session.contains("id-123"));
    assert!(session.contains("uid-789"));
}

#[tokio::test(flavor = "multi_thread")]
async fn login_rejection_reports_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": { "message": "INVALID_LOGIN_CREDENTIALS", "code": 400 }
        })))
        .mount(&server)
        .await;

    let home = tempdir().unwrap();
    write_config(home.path(), &server.uri());

    let assert = tokio::task::spawn_blocking({
        let home = home.path().to_path_buf();
        move || {
            cargo_bin_cmd!("perch")
                .env("PERCH_HOME", &home)
                .args(["login", "--email", "a@b.c", "--password", "wrong"])
                .assert()
        }
    })
    .await
    .unwrap();

    assert
        .failure()
        .stderr(predicate::str::contains("invalid email or password"));

    assert!(!home.path().join("session.json").exists());
}

#[test]
fn login_validates_before_any_request() {
    let home = tempdir().unwrap();

    // Malformed email: rejected client-side, no backend needed
    cargo_bin_cmd!("perch")
        .env("PERCH_HOME", home.path())
        .args(["login", "--email", "not-an-email", "--password", "secret"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid email"));
}

#[test]
fn logout_clears_session() {
    let home = tempdir().unwrap();
    fs::write(home.path().join("session.json"), "{}").unwrap();

    cargo_bin_cmd!("perch")
        .env("PERCH_HOME", home.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out."));

    assert!(!home.path().join("session.json").exists());
}
