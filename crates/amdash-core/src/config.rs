//! Configuration types for amdash.
//!
//! [`Config::load`] reads `~/.config/amdash/config.toml`, creating it with
//! commented defaults if it does not yet exist, and layers the
//! `AMDASH_API_BASE_URL` environment variable on top. [`Config::defaults`]
//! returns the built-in defaults without touching the filesystem (useful in
//! tests).
//!
//! The backend base URL has no default. [`Config::base_url`] turns its
//! absence into [`ConfigError::MissingBaseUrl`].

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `[api] base_url`.
pub const BASE_URL_ENV: &str = "AMDASH_API_BASE_URL";

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[api]
# base_url = "http://localhost:8000"

[ui]
page_size    = 50
latest_limit = 10
theme        = "default"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/amdash/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[api]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: Option<String>,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Rows per page on the events screen.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    /// Rows in the overview's "Latest Events" table.
    #[serde(default = "default_latest_limit")]
    pub latest_limit: u64,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_page_size() -> u64 { 50 }
fn default_latest_limit() -> u64 { 10 }
fn default_theme() -> String { "default".to_string() }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            latest_limit: default_latest_limit(),
            theme: default_theme(),
        }
    }
}

impl UiConfig {
    /// Row counts of zero would stall pagination on the same offset.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroRows { key: "ui.page_size" });
        }
        if self.latest_limit == 0 {
            return Err(ConfigError::ZeroRows { key: "ui.latest_limit" });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/amdash/config.toml` and the environment, layered
    /// on top of the built-in defaults. Creates the file with defaults if it
    /// does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "wrote default config");
        }

        Self::load_from(&path, std::env::var(BASE_URL_ENV).ok())
    }

    /// Load from an explicit file (which may be missing) plus an optional
    /// environment-supplied base URL. The environment value wins over the
    /// file when both are set.
    pub fn load_from(path: &Path, env_base_url: Option<String>) -> Result<Self, ConfigError> {
        let env_base_url = env_base_url.filter(|s| !s.trim().is_empty());

        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .set_override_option("api.base_url", env_base_url)?
            .build()?
            .try_deserialize()?;
        cfg.ui.validate()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// The configured backend base URL with any trailing `/` removed.
    pub fn base_url(&self) -> Result<&str, ConfigError> {
        self.api
            .base_url
            .as_deref()
            .map(|s| s.trim().trim_end_matches('/'))
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingBaseUrl)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// Location of the user config file, honouring `$XDG_CONFIG_HOME`.
pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("amdash")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
