//! Gemini implementation of [`QuizModelGateway`]

use super::protocol::{GenerateContentRequest, GenerateContentResponse};
use crate::config::FileGenerationConfig;
use async_trait::async_trait;
use quizgen_application::{GatewayError, QuizModelGateway};
use quizgen_domain::{QuizPrompt, truncate};
use std::time::Duration;
use tracing::{debug, warn};

/// Maximum bytes of an error body kept in [`GatewayError::HttpStatus`]
const ERROR_DETAIL_LEN: usize = 100;

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Resolved connection settings for [`GeminiGateway`]
#[derive(Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub structured_output: bool,
    pub timeout: Duration,
}

impl GeminiSettings {
    /// Resolve credentials and model from the `[generation]` section.
    ///
    /// Fails with [`GatewayError::MissingCredentials`] when the API key or
    /// the model identifier is unavailable.
    pub fn from_config(config: &FileGenerationConfig) -> Result<Self, GatewayError> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            GatewayError::MissingCredentials(format!("{} is not set", config.api_key_env))
        })?;
        let model = config.resolve_model().ok_or_else(|| {
            GatewayError::MissingCredentials(format!(
                "{} is not set and no model is configured",
                config.model_env
            ))
        })?;

        Ok(Self {
            api_key,
            model,
            base_url: config.base_url.clone(),
            structured_output: config.structured_output,
            timeout: Duration::from_secs(config.timeout_seconds),
        })
    }
}

/// Gateway that sends quiz prompts to Gemini
pub struct GeminiGateway {
    client: reqwest::Client,
    endpoint: String,
    settings: GeminiSettings,
}

impl GeminiGateway {
    pub fn new(settings: GeminiSettings) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("quizgen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::Other(format!("failed to build HTTP client: {}", e)))?;

        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            settings.base_url.trim_end_matches('/'),
            settings.model
        );

        Ok(Self {
            client,
            endpoint,
            settings,
        })
    }

    pub fn from_config(config: &FileGenerationConfig) -> Result<Self, GatewayError> {
        Self::new(GeminiSettings::from_config(config)?)
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }
}

#[async_trait]
impl QuizModelGateway for GeminiGateway {
    async fn generate(&self, prompt: &QuizPrompt) -> Result<String, GatewayError> {
        let body = GenerateContentRequest::from_prompt(prompt, self.settings.structured_output);

        debug!(
            "POST {} (structured_output: {})",
            self.endpoint, self.settings.structured_output
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.settings.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                detail: truncate(detail.trim(), ERROR_DETAIL_LEN),
            });
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidPayload(e.without_url().to_string()))?;

        match payload.first_text() {
            Some(text) => Ok(text.to_string()),
            None => {
                warn!(
                    "Gemini returned no content (finish reason: {})",
                    payload.finish_reason().unwrap_or("none")
                );
                Err(GatewayError::EmptyContent)
            }
        }
    }
}

fn map_transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Connection(error.without_url().to_string())
    }
}
