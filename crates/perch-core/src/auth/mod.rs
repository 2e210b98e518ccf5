//! Authentication: identity client and session persistence.

mod client;
mod session;

use std::fmt;

pub use client::AuthClient;
pub use session::Session;

/// Tagged sign-in/sign-up outcome.
///
/// The UI branches on these variants, so they stay coarse: a rejected
/// credential pair, a request that never got an HTTP answer, and anything
/// else the service said.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The identity service rejected the credential pair.
    InvalidCredentials,
    /// The request failed before an HTTP response arrived.
    Transport(String),
    /// The service answered with an unexpected status.
    Service { status: u16, message: String },
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => f.write_str("invalid email or password"),
            AuthError::Transport(detail) => write!(f, "network error: {detail}"),
            AuthError::Service { status, message } => {
                write!(f, "service error (HTTP {status}): {message}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Transport(err.to_string())
    }
}
