//! Identity service client.
//!
//! Speaks the hosted backend's REST dialect: `accounts:signInWithPassword`
//! and `accounts:signUp` under the identity base URL, keyed by the project
//! API key. Tokens are never logged in full.

use serde::Deserialize;

use super::{AuthError, Session, session};
use crate::config::BackendConfig;

/// Rejection codes the identity service uses for a bad credential pair.
const CREDENTIAL_REJECTIONS: &[&str] = &[
    "INVALID_LOGIN_CREDENTIALS",
    "INVALID_PASSWORD",
    "EMAIL_NOT_FOUND",
];

/// Identity service client.
pub struct AuthClient {
    http: reqwest::Client,
    identity_url: String,
    api_key: String,
}

/// Token response from the identity endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    id_token: String,
    refresh_token: String,
    /// Seconds until expiry; the service encodes it as a string.
    expires_in: String,
    local_id: String,
    #[serde(default)]
    email: Option<String>,
}

/// Error envelope: `{"error": {"message": "...", "code": 400}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

impl AuthClient {
    /// Creates a client for the configured backend.
    pub fn new(backend: &BackendConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            identity_url: backend.identity_url.trim_end_matches('/').to_string(),
            api_key: backend.api_key.clone(),
        }
    }

    /// Signs in with an email/password pair.
    ///
    /// Resolves to a [`Session`] on success; failures are tagged so the UI
    /// can show invalid credentials, transport faults, and service errors
    /// distinctly.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        tracing::debug!(email, "signing in");
        self.account_request(
            "signInWithPassword",
            serde_json::json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }),
        )
        .await
    }

    /// Creates an account and returns the freshly established session.
    pub async fn sign_up(
        &self,
        display_name: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        tracing::debug!(email, "signing up");
        self.account_request(
            "signUp",
            serde_json::json!({
                "displayName": display_name,
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }),
        )
        .await
    }

    async fn account_request(
        &self,
        operation: &str,
        body: serde_json::Value,
    ) -> Result<Session, AuthError> {
        let url = format!("{}/v1/accounts:{operation}", self.identity_url);
        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(classify_rejection(status.as_u16(), &text));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|err| AuthError::Service {
                status: status.as_u16(),
                message: format!("unreadable token response: {err}"),
            })?;

        Ok(session_from_token(token))
    }
}

/// Maps a non-2xx identity answer to an [`AuthError`].
fn classify_rejection(status: u16, body: &str) -> AuthError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    let code = message.split(&[' ', ':']).next().unwrap_or_default();
    if CREDENTIAL_REJECTIONS.contains(&code) {
        return AuthError::InvalidCredentials;
    }

    AuthError::Service { status, message }
}

fn session_from_token(token: TokenResponse) -> Session {
    let expires_in_secs: u64 = token.expires_in.parse().unwrap_or(0);
    Session {
        id_token: token.id_token,
        refresh_token: token.refresh_token,
        local_id: token.local_id,
        email: token.email.unwrap_or_default(),
        expires: session::expiry_from_now(expires_in_secs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_maps_credential_rejections() {
        let body = r#"{"error":{"message":"INVALID_LOGIN_CREDENTIALS","code":400}}"#;
        assert_eq!(classify_rejection(400, body), AuthError::InvalidCredentials);

        let body = r#"{"error":{"message":"EMAIL_NOT_FOUND","code":400}}"#;
        assert_eq!(classify_rejection(400, body), AuthError::InvalidCredentials);
    }

    #[test]
    fn classify_keeps_trailing_detail() {
        // Lockout messages carry detail after the code
        let body =
            r#"{"error":{"message":"INVALID_PASSWORD : Too many attempts","code":400}}"#;
        assert_eq!(classify_rejection(400, body), AuthError::InvalidCredentials);
    }

    #[test]
    fn classify_maps_other_statuses_to_service() {
        let body = r#"{"error":{"message":"EMAIL_EXISTS","code":400}}"#;
        assert_eq!(
            classify_rejection(400, body),
            AuthError::Service {
                status: 400,
                message: "EMAIL_EXISTS".to_string()
            }
        );

        assert_eq!(
            classify_rejection(503, "upstream down"),
            AuthError::Service {
                status: 503,
                message: "upstream down".to_string()
            }
        );
    }
}
