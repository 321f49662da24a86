//! Application configuration management.
//!
//! This module handles loading and saving the application configuration,
//! which names the portal server, the admin session cookie sent with
//! backend calls, and the request timeout.
//!
//! Configuration is stored at `~/.config/eligibility-ui/config.json`.
//! `ELIGIBILITY_BASE_URL` and `ELIGIBILITY_SESSION_COOKIE` override the
//! stored server URL and session cookie.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Application name used for config directory paths
const APP_NAME: &str = "eligibility-ui";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding `base_url`
pub const BASE_URL_ENV: &str = "ELIGIBILITY_BASE_URL";

/// Environment variable overriding `session_cookie`
pub const SESSION_COOKIE_ENV: &str = "ELIGIBILITY_SESSION_COOKIE";

/// Flask development server default.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// HTTP request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    /// `Cookie` header value of a logged-in admin session, e.g.
    /// `session=eyJ1c2VyX2lkIjoxfQ...`. The approval endpoint answers 401
    /// without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_cookie: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            session_cookie: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load from the default location, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = Self::load_from(&path)?;
        config.apply_env_overrides(
            std::env::var(BASE_URL_ENV).ok(),
            std::env::var(SESSION_COOKIE_ENV).ok(),
        );
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn apply_env_overrides(&mut self, base_url: Option<String>, session_cookie: Option<String>) {
        if let Some(url) = non_blank(base_url) {
            self.base_url = url;
        }
        if let Some(cookie) = non_blank(session_cookie) {
            self.session_cookie = Some(cookie);
        }
    }

    /// Store (or with `None`, forget) the admin session cookie.
    pub fn set_session_cookie(&mut self, cookie: Option<String>) {
        self.session_cookie = non_blank(cookie);
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
