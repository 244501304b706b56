//! Generate Questions use case
//!
//! Obtains one validated [`QuestionBatch`] from the generation model, retrying
//! with exponential backoff when the call fails or the output does not
//! validate.
//!
//! # Attempt loop
//!
//! 1. Sleep for [`RetryPolicy::delay_before`] (zero for the first attempt)
//! 2. Call [`QuizModelGateway::generate`]
//! 3. Run [`validate`] on the returned text
//! 4. Return the first valid batch; otherwise record the failure in the
//!    [`RetryState`] handed to the next attempt
//!
//! Missing credentials short-circuit the loop: no further attempt can fix them.

use crate::config::RetryPolicy;
use crate::ports::quiz_model::{GatewayError, QuizModelGateway};
use quizgen_domain::{QuestionBatch, QuizPrompt, ValidationError, truncate, validate};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::run_pipeline::PipelineErrorKind;

/// Maximum bytes of failure detail carried out of the use case.
pub const MAX_DETAIL_LEN: usize = 200;

/// Why a single attempt did not produce a batch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttemptFailure {
    #[error("{0}")]
    Upstream(GatewayError),

    #[error("{0}")]
    Validation(ValidationError),
}

impl AttemptFailure {
    /// Classification of this failure.
    ///
    /// Upstream call failures are transient upstream errors; malformed output
    /// is a validation failure. Both escalate to
    /// [`PipelineErrorKind::UpstreamExhausted`] once the attempt budget is spent.
    pub fn kind(&self) -> PipelineErrorKind {
        match self {
            AttemptFailure::Upstream(_) => PipelineErrorKind::UpstreamExhausted,
            AttemptFailure::Validation(_) => PipelineErrorKind::ValidationFailed,
        }
    }

    /// Bounded, log-safe description of the failure
    pub fn detail(&self) -> String {
        truncate(&self.to_string(), MAX_DETAIL_LEN)
    }
}

/// Progress of the attempt loop, threaded by value from attempt to attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetryState {
    attempts: usize,
    last_failure: Option<AttemptFailure>,
}

impl RetryState {
    /// Number of attempts made so far
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Failure of the most recent attempt, if any
    pub fn last_failure(&self) -> Option<&AttemptFailure> {
        self.last_failure.as_ref()
    }

    /// State after one more failed attempt
    pub fn record(self, failure: AttemptFailure) -> Self {
        Self {
            attempts: self.attempts + 1,
            last_failure: Some(failure),
        }
    }
}

/// Errors surfaced once the attempt loop gives up
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("generation failed after {attempts} attempts: {}", .last.detail())]
    Exhausted {
        attempts: usize,
        last: AttemptFailure,
    },
}

/// Use case for generating a validated question batch
#[derive(Clone)]
pub struct GenerateQuestionsUseCase {
    gateway: Arc<dyn QuizModelGateway>,
    policy: RetryPolicy,
}

impl GenerateQuestionsUseCase {
    pub fn new(gateway: Arc<dyn QuizModelGateway>) -> Self {
        Self {
            gateway,
            policy: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Run the attempt loop until a batch validates or the budget is spent
    pub async fn execute(&self, prompt: &QuizPrompt) -> Result<QuestionBatch, GenerationError> {
        let mut state = RetryState::default();

        while state.attempts() < self.policy.max_attempts {
            let attempt = state.attempts() + 1;
            let delay = self.policy.delay_before(attempt);
            if !delay.is_zero() {
                debug!("Backing off {:?} before attempt {}", delay, attempt);
                tokio::time::sleep(delay).await;
            }

            state = match self.attempt(prompt).await {
                Ok(batch) => {
                    info!(
                        "Generated {} questions on attempt {}/{}",
                        batch.len(),
                        attempt,
                        self.policy.max_attempts
                    );
                    return Ok(batch);
                }
                Err(AttemptFailure::Upstream(e)) if !e.is_retryable() => {
                    error!("Generation cannot proceed: {}", e);
                    return Err(match e {
                        GatewayError::MissingCredentials(name) => {
                            GenerationError::MissingCredentials(name)
                        }
                        other => GenerationError::Exhausted {
                            attempts: attempt,
                            last: AttemptFailure::Upstream(other),
                        },
                    });
                }
                Err(failure) => {
                    warn!(
                        "Attempt {}/{} failed: {}",
                        attempt,
                        self.policy.max_attempts,
                        failure.detail()
                    );
                    state.record(failure)
                }
            };
        }

        let attempts = state.attempts();
        let last = state.last_failure.unwrap_or_else(|| {
            AttemptFailure::Upstream(GatewayError::Other("no attempt was made".to_string()))
        });
        error!(
            "Failed to generate quiz after {} attempts: {}",
            attempts,
            last.detail()
        );
        Err(GenerationError::Exhausted { attempts, last })
    }

    /// One gateway call followed by validation
    async fn attempt(&self, prompt: &QuizPrompt) -> Result<QuestionBatch, AttemptFailure> {
        let text = self
            .gateway
            .generate(prompt)
            .await
            .map_err(AttemptFailure::Upstream)?;
        validate(&text).map_err(AttemptFailure::Validation)
    }
}
