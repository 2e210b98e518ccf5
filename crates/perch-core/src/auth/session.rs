//! Session persistence.
//!
//! Stores the signed-in session in `${PERCH_HOME}/session.json` with
//! restricted permissions (0600). Tokens are never logged or displayed
//! in full.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::paths;

fn now_millis_u64() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|d| u64::try_from(d.as_millis()).ok())
        .unwrap_or(u64::MAX)
}

/// Expiry timestamp for a token valid for `expires_in_secs`, minus a
/// five-minute buffer so a nearly-dead token is treated as expired.
pub(crate) fn expiry_from_now(expires_in_secs: u64) -> u64 {
    let lifetime_ms = expires_in_secs.saturating_mul(1000);
    now_millis_u64() + lifetime_ms.saturating_sub(5 * 60 * 1000)
}

/// An established session with the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Short-lived bearer token for data requests.
    pub id_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Backend account identifier.
    pub local_id: String,
    /// Email the session was established for.
    pub email: String,
    /// Expiry timestamp in milliseconds since epoch.
    pub expires: u64,
}

impl Session {
    /// Returns true if the session's bearer token is expired or about to expire.
    pub fn is_expired(&self) -> bool {
        now_millis_u64() >= self.expires
    }

    /// Loads the persisted session, if any.
    pub fn load() -> Result<Option<Self>> {
        Self::load_from(&paths::session_path())
    }

    /// Loads a session from a specific path. Returns `None` if the file
    /// doesn't exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session from {}", path.display()))?;
        let session = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse session from {}", path.display()))?;
        Ok(Some(session))
    }

    /// Saves the session to the default path with restricted permissions.
    pub fn save(&self) -> Result<()> {
        self.save_to(&paths::session_path())
    }

    /// Saves the session to a specific path with restricted permissions (0600).
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize session")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(path)
                .with_context(|| format!("Failed to open {} for writing", path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }

        Ok(())
    }

    /// Removes the persisted session, if any.
    pub fn clear() -> Result<()> {
        Self::clear_at(&paths::session_path())
    }

    /// Removes a persisted session at a specific path.
    pub fn clear_at(path: &Path) -> Result<()> {
        if path.exists() {
            fs::remove_file(path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session(expires: u64) -> Session {
        Session {
            id_token: "id-token".to_string(),
            refresh_token: "refresh-token".to_string(),
            local_id: "uid-1".to_string(),
            email: "a@b.c".to_string(),
            expires,
        }
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        let session = sample_session(u64::MAX);

        session.save_to(&path).expect("save");
        let loaded = Session::load_from(&path).expect("load").expect("some");
        assert_eq!(loaded, session);
    }

    #[test]
    fn load_missing_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loaded = Session::load_from(&dir.path().join("session.json")).expect("load");
        assert!(loaded.is_none());
    }

    #[test]
    fn clear_removes_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        sample_session(u64::MAX).save_to(&path).expect("save");

        Session::clear_at(&path).expect("clear");
        assert!(!path.exists());
        // Clearing again is a no-op
        Session::clear_at(&path).expect("clear again");
    }

    #[test]
    fn expiry_checks() {
        assert!(sample_session(0).is_expired());
        assert!(!sample_session(u64::MAX).is_expired());
        // A fresh one-hour token is not expired despite the buffer
        assert!(!sample_session(expiry_from_now(3600)).is_expired());
        // A token with less lifetime than the buffer is already expired
        assert!(sample_session(expiry_from_now(10)).is_expired());
    }

    #[cfg(unix)]
    #[test]
    fn saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        sample_session(u64::MAX).save_to(&path).expect("save");

        let mode = std::fs::metadata(&path).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
