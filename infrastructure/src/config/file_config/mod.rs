//! Raw TOML configuration data types
//!
//! These structs mirror the config file layout exactly. Every section uses
//! `#[serde(default)]` so a partial file (or no file) still yields a usable
//! configuration.

mod generation;
mod images;
mod retry;
mod server;

pub use generation::FileGenerationConfig;
pub use images::FileImagesConfig;
pub use retry::FileRetryConfig;
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder printed instead of secrets by `--show-config`
const REDACTED: &str = "********";

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{section}.timeout_seconds cannot be 0")]
    InvalidTimeout { section: &'static str },

    #[error("retry.max_attempts cannot be 0")]
    ZeroAttempts,

    #[error("server.bind '{0}' is not a valid socket address")]
    InvalidBind(String),

    #[error("{section}.base_url '{value}' must start with http:// or https://")]
    InvalidBaseUrl {
        section: &'static str,
        value: String,
    },
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Question generation (Gemini) settings
    pub generation: FileGenerationConfig,
    /// Image search (Pexels) settings
    pub images: FileImagesConfig,
    /// Retry settings for question generation
    pub retry: FileRetryConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.bind.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigValidationError::InvalidBind(self.server.bind.clone()));
        }

        if self.generation.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout {
                section: "generation",
            });
        }
        if self.images.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout { section: "images" });
        }

        check_base_url("generation", &self.generation.base_url)?;
        check_base_url("images", &self.images.base_url)?;

        if self.retry.max_attempts == 0 {
            return Err(ConfigValidationError::ZeroAttempts);
        }

        Ok(())
    }

    /// Copy of this configuration with inline API keys masked
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.generation.api_key.is_some() {
            config.generation.api_key = Some(REDACTED.to_string());
        }
        if config.images.api_key.is_some() {
            config.images.api_key = Some(REDACTED.to_string());
        }
        config
    }
}

fn check_base_url(section: &'static str, value: &str) -> Result<(), ConfigValidationError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigValidationError::InvalidBaseUrl {
            section,
            value: value.to_string(),
        })
    }
}

/// Resolve a credential: a non-empty inline value wins over the environment.
pub(crate) fn resolve_secret(
    inline: Option<&str>,
    env_name: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    inline
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .or_else(|| {
            lookup(env_name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        })
}
