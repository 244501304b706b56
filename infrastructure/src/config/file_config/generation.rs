//! Generation configuration from TOML (`[generation]` section)

use super::resolve_secret;
use serde::{Deserialize, Serialize};

/// Gemini generation service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key. Prefer the environment variable.
    pub api_key: Option<String>,
    /// Environment variable that overrides `model` (default: "GEMINI_MODEL").
    pub model_env: String,
    /// Model identifier used when the environment variable is unset.
    pub model: String,
    /// Base URL for the Gemini API.
    pub base_url: String,
    /// Ask the service for schema-constrained JSON output.
    pub structured_output: bool,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            model_env: "GEMINI_MODEL".to_string(),
            model: "gemini-2.5-flash-preview-09-2025".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            structured_output: true,
            timeout_seconds: 30,
        }
    }
}

impl FileGenerationConfig {
    /// API key from `api_key` or the `api_key_env` environment variable
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    pub fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        resolve_secret(self.api_key.as_deref(), &self.api_key_env, lookup)
    }

    /// Model from the `model_env` environment variable, falling back to `model`
    pub fn resolve_model(&self) -> Option<String> {
        self.resolve_model_with(|name| std::env::var(name).ok())
    }

    pub fn resolve_model_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        lookup(&self.model_env)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .or_else(|| Some(self.model.trim().to_string()).filter(|m| !m.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let config = FileGenerationConfig::default();
        assert_eq!(config.api_key_env, "GEMINI_API_KEY");
        assert!(config.structured_output);
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_model_env_overrides_file() {
        let config = FileGenerationConfig::default();
        let env = |name: &str| (name == "GEMINI_MODEL").then(|| "gemini-exp".to_string());

        assert_eq!(config.resolve_model_with(env).as_deref(), Some("gemini-exp"));
        assert_eq!(
            config.resolve_model_with(no_env).as_deref(),
            Some("gemini-2.5-flash-preview-09-2025")
        );
    }

    #[test]
    fn test_blank_model_is_missing() {
        let config = FileGenerationConfig {
            model: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_model_with(no_env), None);
    }

    #[test]
    fn test_api_key_from_custom_env() {
        let config = FileGenerationConfig {
            api_key_env: "QUIZ_KEY".to_string(),
            ..Default::default()
        };
        let env = |name: &str| (name == "QUIZ_KEY").then(|| "k-123".to_string());

        assert_eq!(config.resolve_api_key_with(env).as_deref(), Some("k-123"));
        assert_eq!(config.resolve_api_key_with(no_env), None);
    }
}
