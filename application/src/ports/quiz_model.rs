//! Quiz model gateway port
//!
//! Defines the interface for communicating with the generation model.

use async_trait::async_trait;
use quizgen_domain::QuizPrompt;
use thiserror::Error;

/// Errors that can occur during a single generation call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("HTTP error: {status}. Detail: {detail}")]
    HttpStatus { status: u16, detail: String },

    #[error("Response missing content or candidate failed")]
    EmptyContent,

    #[error("Timeout")]
    Timeout,

    #[error("Invalid response payload: {0}")]
    InvalidPayload(String),

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Whether another attempt could succeed.
    ///
    /// Missing credentials are an operator problem; every other failure is
    /// treated as transient.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, GatewayError::MissingCredentials(_))
    }
}

/// Gateway for quiz generation
///
/// One call is one attempt: implementations do not retry. Retry, backoff and
/// validation live in
/// [`GenerateQuestionsUseCase`](crate::use_cases::generate_questions::GenerateQuestionsUseCase).
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait QuizModelGateway: Send + Sync {
    /// Send the prompt and return the model's raw text
    async fn generate(&self, prompt: &QuizPrompt) -> Result<String, GatewayError>;
}
