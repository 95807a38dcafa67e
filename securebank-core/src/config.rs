//! Configuration management
//!
//! Settings live in `settings.json` inside the app directory:
//! ```json
//! {
//!   "apiBaseUrl": "https://localhost:3000/api",
//!   "timeoutSecs": 30,
//!   "acceptInvalidCerts": false
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "https://localhost:3000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Raw settings.json structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default = "default_api_base_url")]
    api_base_url: String,
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
    #[serde(default)]
    accept_invalid_certs: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
            accept_invalid_certs: false,
            other: HashMap::new(),
        }
    }
}

/// SecureBank client configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub timeout: Duration,
    /// Accept self-signed certificates (development only)
    pub accept_invalid_certs: bool,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        let raw = SettingsFile::default();
        Self {
            api_base_url: raw.api_base_url.clone(),
            timeout: Duration::from_secs(raw.timeout_secs),
            accept_invalid_certs: raw.accept_invalid_certs,
            _raw_settings: raw,
        }
    }
}

impl Config {
    /// Load config from the app directory
    ///
    /// The API base URL can be overridden via the SECUREBANK_API_URL
    /// environment variable (for CI/testing against a local server).
    pub fn load(app_dir: &Path) -> Result<Self> {
        let settings_path = app_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let api_base_url = std::env::var("SECUREBANK_API_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| raw.api_base_url.clone());

        Ok(Self {
            api_base_url,
            timeout: Duration::from_secs(raw.timeout_secs),
            accept_invalid_certs: raw.accept_invalid_certs,
            _raw_settings: raw,
        })
    }

    /// Save config to the app directory
    /// Preserves settings fields the client doesn't manage
    pub fn save(&self, app_dir: &Path) -> Result<()> {
        let settings_path = app_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.api_base_url = self.api_base_url.clone();
        settings.timeout_secs = self.timeout.as_secs();
        settings.accept_invalid_certs = self.accept_invalid_certs;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_when_no_settings_file() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.api_base_url = "https://bank.example.com/api".to_string();
        config.timeout = Duration::from_secs(10);
        config.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.api_base_url, "https://bank.example.com/api");
        assert_eq!(loaded.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_save_preserves_unmanaged_fields() {
        let dir = tempdir().unwrap();
        let settings_path = dir.path().join("settings.json");
        std::fs::write(
            &settings_path,
            r#"{"apiBaseUrl": "https://bank.example.com/api", "theme": "dark"}"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        config.save(dir.path()).unwrap();

        let content = std::fs::read_to_string(&settings_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["apiBaseUrl"], "https://bank.example.com/api");
    }
}
