//! Session store
//!
//! Holds the bearer token for the current session, persisted as
//! `session.json` in the app directory so it survives restarts. The token is
//! read once when the store is loaded; another process logging out is not
//! observed until the next load (accepted limitation).
//!
//! This is the only shared state between services, passed explicitly - no
//! ambient globals.

use std::path::{Path, PathBuf};

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::domain::result::Result;

const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default)]
    token: Option<String>,
}

/// Persistent holder of the session token
///
/// Presence of a token is the sole authorization signal for protected
/// views; no expiry check is performed client-side.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    token: Option<String>,
}

impl SessionStore {
    /// Load the session from the app directory. A missing or unreadable
    /// file means no session.
    pub fn load(app_dir: &Path) -> Self {
        let path = app_dir.join(SESSION_FILE);

        let file: SessionFile = std::fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();

        Self {
            path,
            token: file.token.filter(|t| !t.is_empty()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Store a new token and persist it.
    pub fn set_token(&mut self, token: impl Into<String>) -> Result<()> {
        self.token = Some(token.into());
        self.save()
    }

    /// Destroy the session and persist the absence.
    pub fn clear_token(&mut self) -> Result<()> {
        self.token = None;
        self.save()
    }

    fn save(&self) -> Result<()> {
        let file = SessionFile {
            token: self.token.clone(),
        };
        let content = serde_json::to_string_pretty(&file)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Best-effort display name from the token's JWT payload `name` claim.
    ///
    /// Purely cosmetic (dashboard greeting) - never used for authorization.
    pub fn display_name(&self) -> String {
        self.token
            .as_deref()
            .and_then(jwt_name_claim)
            .unwrap_or_else(|| "User".to_string())
    }
}

fn jwt_name_claim(token: &str) -> Option<String> {
    let payload = token.split('.').nth(1)?;
    // JWT segments are base64url without padding, but some issuers pad.
    let decoded = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| base64::engine::general_purpose::URL_SAFE.decode(payload))
        .ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&decoded).ok()?;
    claims.get("name")?.as_str().map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_session_when_no_file() {
        let dir = tempdir().unwrap();
        let store = SessionStore::load(dir.path());
        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_token_survives_reload() {
        let dir = tempdir().unwrap();

        let mut store = SessionStore::load(dir.path());
        store.set_token("abc.def.ghi").unwrap();

        let reloaded = SessionStore::load(dir.path());
        assert!(reloaded.is_authenticated());
        assert_eq!(reloaded.token(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_clear_token_persists() {
        let dir = tempdir().unwrap();

        let mut store = SessionStore::load(dir.path());
        store.set_token("abc.def.ghi").unwrap();
        store.clear_token().unwrap();
        assert!(!store.is_authenticated());

        let reloaded = SessionStore::load(dir.path());
        assert!(!reloaded.is_authenticated());
    }

    #[test]
    fn test_corrupt_session_file_means_logged_out() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE), "{not json").unwrap();

        let store = SessionStore::load(dir.path());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_display_name_from_jwt() {
        // {"alg":"HS256"} . {"name":"Jane Doe"} . signature
        let header = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
        let payload =
            base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"name":"Jane Doe"}"#);
        let token = format!("{}.{}.sig", header, payload);

        let dir = tempdir().unwrap();
        let mut store = SessionStore::load(dir.path());
        store.set_token(token).unwrap();
        assert_eq!(store.display_name(), "Jane Doe");
    }

    #[test]
    fn test_display_name_falls_back_for_opaque_token() {
        let dir = tempdir().unwrap();
        let mut store = SessionStore::load(dir.path());
        store.set_token("opaque-token").unwrap();
        assert_eq!(store.display_name(), "User");
    }
}
