//! HTTP contract tests for the identity and post feed clients.
//!
//! Every test points the client at a wiremock server; nothing here touches
//! the real backend.

use perch_core::auth::{AuthClient, AuthError, Session};
use perch_core::config::BackendConfig;
use perch_core::posts::PostsClient;
use wiremock::matchers::{bearer_token, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> BackendConfig {
    BackendConfig {
        api_key: "test-key".to_string(),
        project_id: "proj-1".to_string(),
        identity_url: server.uri(),
        data_url: server.uri(),
    }
}

fn token_body(email: &str) -> serde_json::Value {
    serde_json::json!({
        "idToken": "id-123",
        "refreshToken": "refresh-456",
        "expiresIn": "3600",
        "localId": "uid-789",
        "email": email,
    })
}

#[tokio::test]
async fn sign_in_success_returns_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("a@b.c")))
        .expect(1)
        .mount(&server)
        .await;

    let client = AuthClient::new(&backend_for(&server));
    let session = client.sign_in("a@b.c", "secret").await.expect("session");

    assert_eq!(session.id_token, "id-123");
    assert_eq!(session.refresh_token, "refresh-456");
    assert_eq!(session.local_id, "uid-789");
    assert_eq!(session.email, "a@b.c");
    assert!(!session.is_expired());
}

#[tokio::test]
async fn sign_in_rejection_is_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": { "message": "INVALID_LOGIN_CREDENTIALS", "code": 400 }
        })))
        .mount(&server)
        .await;

    let client = AuthClient::new(&backend_for(&server));
    let err = client.sign_in("a@b.c", "wrong").await.expect_err("rejected");
    assert_eq!(err, AuthError::InvalidCredentials);
}

#[tokio::test]
async fn sign_in_outage_is_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(503).set_body_string("try later"))
        .mount(&server)
        .await;

    let client = AuthClient::new(&backend_for(&server));
    let err = client.sign_in("a@b.c", "secret").await.expect_err("outage");
    assert_eq!(
        err,
        AuthError::Service {
            status: 503,
            message: "try later".to_string()
        }
    );
}

#[tokio::test]
async fn sign_in_unreachable_host_is_transport_error() {
    // Reserve a port, then drop the listener so nothing is bound to it
    let backend = {
        let server = MockServer::start().await;
        backend_for(&server)
    };

    let client = AuthClient::new(&backend);
    let err = client.sign_in("a@b.c", "secret").await.expect_err("dead host");
    assert!(matches!(err, AuthError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn sign_up_success_returns_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("new@b.c")))
        .expect(1)
        .mount(&server)
        .await;

    let client = AuthClient::new(&backend_for(&server));
    let session = client
        .sign_up("New User", "new@b.c", "secret")
        .await
        .expect("session");
    assert_eq!(session.email, "new@b.c");
}

#[tokio::test]
async fn sign_up_existing_email_is_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": { "message": "EMAIL_EXISTS", "code": 400 }
        })))
        .mount(&server)
        .await;

    let client = AuthClient::new(&backend_for(&server));
    let err = client
        .sign_up("New User", "taken@b.c", "secret")
        .await
        .expect_err("taken");
    assert_eq!(
        err,
        AuthError::Service {
            status: 400,
            message: "EMAIL_EXISTS".to_string()
        }
    );
}

#[tokio::test]
async fn fetch_posts_sends_bearer_and_parses_feed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/v1/projects/proj-1/databases/(default)/documents/posts",
        ))
        .and(bearer_token("id-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "documents": [
                {
                    "name": "projects/proj-1/databases/(default)/documents/posts/p1",
                    "fields": {
                        "title": { "stringValue": "Sunset" },
                        "author": { "stringValue": "Olena" },
                        "likes": { "integerValue": "2" },
                        "createdAt": { "timestampValue": "2024-03-01T10:00:00Z" }
                    }
                },
                {
                    "name": "projects/proj-1/databases/(default)/documents/posts/p2",
                    "fields": {
                        "title": { "stringValue": "Forest" },
                        "createdAt": { "timestampValue": "2024-04-01T10:00:00Z" }
                    }
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session {
        id_token: "id-123".to_string(),
        refresh_token: "refresh".to_string(),
        local_id: "uid".to_string(),
        email: "a@b.c".to_string(),
        expires: u64::MAX,
    };

    let client = PostsClient::new(&backend_for(&server));
    let posts = client.fetch_posts(&session).await.expect("feed");

    // Newest first
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title, "Forest");
    assert_eq!(posts[1].title, "Sunset");
    assert_eq!(posts[1].likes, 2);
}

#[tokio::test]
async fn fetch_posts_surfaces_http_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("expired"))
        .mount(&server)
        .await;

    let session = Session {
        id_token: "stale".to_string(),
        refresh_token: "refresh".to_string(),
        local_id: "uid".to_string(),
        email: "a@b.c".to_string(),
        expires: u64::MAX,
    };

    let client = PostsClient::new(&backend_for(&server));
    let err = client.fetch_posts(&session).await.expect_err("401");
    assert!(err.to_string().contains("401"), "got {err:#}");
}
