//! Image search configuration from TOML (`[images]` section)

use super::resolve_secret;
use serde::{Deserialize, Serialize};

/// Pexels image search settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileImagesConfig {
    /// Environment variable name for the API key (default: "PEXELS_API_KEY").
    pub api_key_env: String,
    /// Direct API key. Prefer the environment variable.
    pub api_key: Option<String>,
    /// Base URL for the Pexels API.
    pub base_url: String,
    /// Per-lookup timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for FileImagesConfig {
    fn default() -> Self {
        Self {
            api_key_env: "PEXELS_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.pexels.com".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl FileImagesConfig {
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_secret(self.api_key.as_deref(), &self.api_key_env, |name| {
            std::env::var(name).ok()
        })
    }
}
