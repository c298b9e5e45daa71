//! Configuration for locsync, loaded from an optional `locsync.toml`.
//!
//! Values missing from the file fall back to defaults. The environment
//! variables `LOKALISE_API_TOKEN` and `DEEPL_AUTH_KEY` take precedence over
//! the file for the two secrets.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

pub const LOKALISE_TOKEN_VAR: &str = "LOKALISE_API_TOKEN";
pub const DEEPL_KEY_VAR: &str = "DEEPL_AUTH_KEY";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LocsyncConfig {
    /// Lokalise API token, sent as `X-Api-Token`.
    #[serde(default)]
    pub lokalise_api_token: String,

    /// DeepL authentication key.
    #[serde(default)]
    pub deepl_auth_key: String,

    /// Per-request timeout for both APIs, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub log: LogConfig,
}

/// Where log lines go and how the file is rotated.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_file")]
    pub file: PathBuf,

    /// Size at which the file is rotated.
    #[serde(default = "default_log_max_bytes")]
    pub max_bytes: u64,

    /// Number of rotated files kept.
    #[serde(default = "default_log_backups")]
    pub backups: usize,
}

/// The two secrets a run needs, validated non-empty.
#[derive(Clone)]
pub struct Credentials {
    pub lokalise_api_token: String,
    pub deepl_auth_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials").finish_non_exhaustive()
    }
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_log_file() -> PathBuf {
    PathBuf::from("error.log")
}

// 1 MiB
fn default_log_max_bytes() -> u64 {
    1024 * 1024
}

fn default_log_backups() -> usize {
    5
}

impl Default for LocsyncConfig {
    fn default() -> Self {
        Self {
            lokalise_api_token: String::new(),
            deepl_auth_key: String::new(),
            request_timeout_secs: default_request_timeout_secs(),
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            max_bytes: default_log_max_bytes(),
            backups: default_log_backups(),
        }
    }
}

impl LocsyncConfig {
    /// Load `path` (defaults when it does not exist), then apply the
    /// process environment.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::from_file(path)?.with_env(|name| std::env::var(name).ok()))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str::<LocsyncConfig>(&contents)?)
    }

    /// Overlay non-empty environment values on the secrets.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(token) = lookup(LOKALISE_TOKEN_VAR).filter(|v| !v.is_empty()) {
            self.lokalise_api_token = token;
        }
        if let Some(key) = lookup(DEEPL_KEY_VAR).filter(|v| !v.is_empty()) {
            self.deepl_auth_key = key;
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Both secrets, or an error naming every one that is missing.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let mut missing = Vec::new();
        if self.lokalise_api_token.is_empty() {
            missing.push(LOKALISE_TOKEN_VAR);
        }
        if self.deepl_auth_key.is_empty() {
            missing.push(DEEPL_KEY_VAR);
        }
        if !missing.is_empty() {
            return Err(ConfigError::MissingCredentials(missing));
        }
        Ok(Credentials {
            lokalise_api_token: self.lokalise_api_token.clone(),
            deepl_auth_key: self.deepl_auth_key.clone(),
        })
    }
}
