//! Startup error kinds.
//!
//! Transport failures live in `amdash-client`; the normalizer has no error
//! kind at all.

/// Fatal configuration problems surfaced before the terminal is taken over.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No backend base URL from the CLI, the environment, or the config file.
    #[error(
        "backend base URL is not set (pass --base-url, set AMDASH_API_BASE_URL, \
         or add `base_url` under [api] in the config file)"
    )]
    MissingBaseUrl,

    /// A `[ui]` row count that would leave a screen with nothing to page.
    #[error("`{key}` must be at least 1")]
    ZeroRows { key: &'static str },

    #[error("failed to read configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("failed to prepare configuration file: {0}")]
    Io(#[from] std::io::Error),
}
