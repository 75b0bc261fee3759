//! Application configuration
//!
//! Resolved from three layers, later layers winning:
//! built-in defaults, the TOML config file, environment overrides.

use anyhow::{Context, Result};
use gh_client::{RepoScope, DEFAULT_API_BASE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variables that override the config file
pub const ENV_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_TOKEN_FALLBACK: &str = "GH_TOKEN";
pub const ENV_API_BASE: &str = "GITHUB_API_BASE";
pub const ENV_LOG_PATH: &str = "GH_FORK_MANAGER_LOG";

/// Application configuration loaded from gh-fork-manager config files
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Personal access token; `None` leaves the client unauthenticated
    pub token: Option<String>,

    /// REST API origin (e.g., "https://github.example.com/api/v3")
    pub api_base: String,

    /// Audit log file receiving one line per delete outcome
    pub log_path: PathBuf,

    /// Require typing the approval phrase before a delete batch starts
    pub confirm_deletes: bool,

    /// Which owned repositories are listed on start-up
    pub scope: RepoScope,

    /// Upper bound for a single API call
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base: DEFAULT_API_BASE.to_string(),
            log_path: crate::paths::default_log_path(),
            confirm_deletes: true,
            scope: RepoScope::default(),
            request_timeout_secs: 20,
        }
    }
}

impl AppConfig {
    /// Load config file (CWD first, then config directory) and apply the
    /// process environment on top
    pub fn load() -> Result<Self> {
        let config = match crate::load_config_file()? {
            Some((path, content)) => {
                let config = Self::from_toml(&content)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))?;
                log::info!("Loaded app config from {}", path.display());
                config
            }
            None => {
                log::debug!("No config file found, using default app config");
                Self::default()
            }
        };

        Ok(config.with_env(|key| std::env::var(key).ok()))
    }

    /// Parse TOML content; absent keys fall back to defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config.normalized())
    }

    /// Apply environment overrides read through `lookup`
    ///
    /// Empty values are treated as unset.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(token) = non_empty(ENV_TOKEN).or_else(|| non_empty(ENV_TOKEN_FALLBACK)) {
            self.token = Some(token);
        }
        if let Some(api_base) = non_empty(ENV_API_BASE) {
            self.api_base = api_base;
        }
        if let Some(log_path) = non_empty(ENV_LOG_PATH) {
            self.log_path = PathBuf::from(log_path);
        }

        self.normalized()
    }

    fn normalized(mut self) -> Self {
        self.token = self
            .token
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        let api_base = self.api_base.trim().trim_end_matches('/');
        self.api_base = if api_base.is_empty() {
            DEFAULT_API_BASE.to_string()
        } else {
            api_base.to_string()
        };

        if self.log_path.as_os_str().is_empty() {
            self.log_path = crate::paths::default_log_path();
        }
        self.log_path = crate::paths::expand_tilde(&self.log_path);

        if self.request_timeout_secs == 0 {
            self.request_timeout_secs = Self::default().request_timeout_secs;
        }

        self
    }
}
