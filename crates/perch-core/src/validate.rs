//! Credential shape checks.
//!
//! These run on the client before any backend call. They are syntactic
//! only; existence and deliverability are the identity service's problem.

use std::fmt;

/// Why a credential pair was rejected before reaching the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialsError {
    MissingEmail,
    MissingPassword,
    MalformedEmail,
}

impl fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            CredentialsError::MissingEmail => "Enter your email address.",
            CredentialsError::MissingPassword => "Enter your password.",
            CredentialsError::MalformedEmail => "Enter a valid email address.",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for CredentialsError {}

/// Returns true when `email` looks like `local@domain.tld`.
///
/// Exactly one `@`, no whitespace, and at least one `.` after the `@` with
/// non-empty segments on every side.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }

    domain.contains('.') && domain.split('.').all(|segment| !segment.is_empty())
}

/// Checks the submit predicate: both fields non-empty and the email well-formed.
pub fn check_credentials(email: &str, password: &str) -> Result<(), CredentialsError> {
    if email.is_empty() {
        return Err(CredentialsError::MissingEmail);
    }
    if password.is_empty() {
        return Err(CredentialsError::MissingPassword);
    }
    if !is_valid_email(email) {
        return Err(CredentialsError::MalformedEmail);
    }
    Ok(())
}
