//! Run Pipeline use case
//!
//! Orchestrates one quiz generation run:
//!
//! 1. Validate the request (no network call on failure)
//! 2. Build the prompt
//! 3. Generate a validated batch ([`GenerateQuestionsUseCase`])
//! 4. Attach images ([`ResolveImagesUseCase`])
//!
//! Either a full batch of ten questions comes back or an error does; partial
//! batches never leave this use case.

use crate::config::RetryPolicy;
use crate::ports::image_search::ImageSearchPort;
use crate::ports::quiz_model::QuizModelGateway;
use crate::use_cases::generate_questions::{
    AttemptFailure, GenerateQuestionsUseCase, GenerationError,
};
use crate::use_cases::resolve_images::ResolveImagesUseCase;
use quizgen_domain::{
    BATCH_SIZE, DomainError, GenerationRequest, QuestionBatch, QuizPromptTemplate,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Error classification exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PipelineErrorKind {
    /// Caller-correctable input problem
    InvalidRequest,
    /// Operator-correctable configuration problem
    MissingCredentials,
    /// The attempt budget was spent without a valid batch
    UpstreamExhausted,
    /// The model answered with malformed output (attempt level)
    ValidationFailed,
}

/// Errors that can occur during a pipeline run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error(transparent)]
    InvalidRequest(#[from] DomainError),

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Failed to generate {} quiz questions after {attempts} attempts", BATCH_SIZE)]
    UpstreamExhausted {
        attempts: usize,
        last: AttemptFailure,
    },
}

impl PipelineError {
    pub fn kind(&self) -> PipelineErrorKind {
        match self {
            PipelineError::InvalidRequest(_) => PipelineErrorKind::InvalidRequest,
            PipelineError::MissingCredentials(_) => PipelineErrorKind::MissingCredentials,
            PipelineError::UpstreamExhausted { .. } => PipelineErrorKind::UpstreamExhausted,
        }
    }

    /// Bounded diagnostic detail suitable for returning to a caller
    pub fn detail(&self) -> Option<String> {
        match self {
            PipelineError::UpstreamExhausted { last, .. } => Some(last.detail()),
            _ => None,
        }
    }
}

impl From<GenerationError> for PipelineError {
    fn from(error: GenerationError) -> Self {
        match error {
            GenerationError::MissingCredentials(name) => PipelineError::MissingCredentials(name),
            GenerationError::Exhausted { attempts, last } => {
                PipelineError::UpstreamExhausted { attempts, last }
            }
        }
    }
}

/// Input for the RunPipeline use case, as received from the caller
#[derive(Debug, Clone)]
pub struct RunPipelineInput {
    pub category: String,
    pub countries: Vec<String>,
}

impl RunPipelineInput {
    pub fn new<I, S>(category: impl Into<String>, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category: category.into(),
            countries: countries.into_iter().map(Into::into).collect(),
        }
    }
}

/// Use case for running the quiz generation pipeline
#[derive(Clone)]
pub struct RunPipelineUseCase {
    generator: GenerateQuestionsUseCase,
    images: ResolveImagesUseCase,
}

impl RunPipelineUseCase {
    pub fn new(
        gateway: Arc<dyn QuizModelGateway>,
        image_search: Arc<dyn ImageSearchPort>,
    ) -> Self {
        Self {
            generator: GenerateQuestionsUseCase::new(gateway),
            images: ResolveImagesUseCase::new(image_search),
        }
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.generator = self.generator.with_retry_policy(policy);
        self
    }

    /// Execute the pipeline for raw caller input
    pub async fn execute(&self, input: RunPipelineInput) -> Result<QuestionBatch, PipelineError> {
        let request = GenerationRequest::try_new(input.category, input.countries)?;
        self.execute_request(&request).await
    }

    /// Execute the pipeline for an already validated request
    pub async fn execute_request(
        &self,
        request: &GenerationRequest,
    ) -> Result<QuestionBatch, PipelineError> {
        info!(
            "Starting quiz generation: category='{}', countries=[{}]",
            request.category(),
            request.countries().join(", ")
        );

        let prompt = QuizPromptTemplate::build(request);
        let batch = self.generator.execute(&prompt).await?;
        let batch = self.images.resolve_batch(batch).await;

        info!("Quiz generation complete: {} questions", batch.len());
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::image_search::ImageSearchError;
    use crate::ports::quiz_model::GatewayError;
    use async_trait::async_trait;
    use quizgen_domain::QuizPrompt;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    struct MockGateway {
        replies: Mutex<VecDeque<Result<String, GatewayError>>>,
        calls: AtomicUsize,
        prompts: Mutex<Vec<QuizPrompt>>,
    }

    impl MockGateway {
        fn new(replies: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                replies: Mutex::new(VecDeque::from(replies)),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl QuizModelGateway for MockGateway {
        async fn generate(&self, prompt: &QuizPrompt) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("No more replies".to_string())))
        }
    }

    struct MockImageSearch {
        failing_index: Option<usize>,
        calls: AtomicUsize,
    }

    impl MockImageSearch {
        fn new(failing_index: Option<usize>) -> Self {
            Self {
                failing_index,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ImageSearchPort for MockImageSearch {
        async fn search(&self, query: &str) -> Result<String, ImageSearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(index) = self.failing_index
                && query.ends_with(&format!("#{}", index))
            {
                return Err(ImageSearchError::NoResults);
            }
            Ok(format!("https://images.test/{}.jpg", query.replace(' ', "_")))
        }
    }

    fn capitals_batch_text() -> String {
        let capitals = [
            ("Paris", "France"),
            ("Tokyo", "Japan"),
            ("Brasilia", "Brazil"),
            ("Lyon", "France"),
            ("Osaka", "Japan"),
            ("Rio de Janeiro", "Brazil"),
            ("Marseille", "France"),
            ("Kyoto", "Japan"),
            ("Sao Paulo", "Brazil"),
            ("Nice", "France"),
        ];
        let items: Vec<_> = capitals
            .iter()
            .enumerate()
            .map(|(i, (city, country))| {
                json!({
                    "imageSearchQuery": format!("{} skyline #{}", city, i),
                    "questionText": format!("In which country is {}?", city),
                    "correctAnswer": country,
                    "options": ["France", "Japan", "Brazil"]
                })
            })
            .collect();
        serde_json::Value::Array(items).to_string()
    }

    fn use_case(gateway: Arc<MockGateway>, images: Arc<MockImageSearch>) -> RunPipelineUseCase {
        RunPipelineUseCase::new(gateway, images)
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_capitals_scenario() {
        let gateway = Arc::new(MockGateway::new(vec![Ok(capitals_batch_text())]));
        let images = Arc::new(MockImageSearch::new(None));
        let pipeline = use_case(gateway.clone(), images.clone());

        let batch = pipeline
            .execute(RunPipelineInput::new(
                "Capitals",
                ["France", "Japan", "Brazil"],
            ))
            .await
            .unwrap();

        assert_eq!(batch.len(), BATCH_SIZE);
        assert_eq!(gateway.calls(), 1);
        assert_eq!(images.calls.load(Ordering::SeqCst), BATCH_SIZE);
        for q in &batch {
            assert!(!q.question_text().is_empty());
            assert!(q.options().len() >= 2);
            assert!(q.options().iter().any(|o| o == q.correct_answer()));
            assert!(
                q.options()
                    .iter()
                    .all(|o| ["France", "Japan", "Brazil"].contains(&o.as_str()))
            );
            let expected = format!(
                "https://images.test/{}.jpg",
                q.image_search_query().replace(' ', "_")
            );
            assert_eq!(q.image_url(), Some(expected.as_str()));
        }
        assert_eq!(batch.questions()[1].correct_answer(), "Japan");

        let prompts = gateway.prompts.lock().unwrap();
        assert!(prompts[0].user.contains("Category: Capitals"));
    }

    #[tokio::test]
    async fn test_invalid_country_counts_make_no_calls() {
        let all = ["France", "Japan", "Brazil", "Kenya", "Peru", "Chile", "Nepal"];
        for n in [0usize, 1, 2, 6, 7] {
            let gateway = Arc::new(MockGateway::new(vec![Ok(capitals_batch_text())]));
            let images = Arc::new(MockImageSearch::new(None));
            let pipeline = use_case(gateway.clone(), images.clone());

            let err = pipeline
                .execute(RunPipelineInput::new("Capitals", all.iter().take(n).copied()))
                .await
                .unwrap_err();

            assert_eq!(err.kind(), PipelineErrorKind::InvalidRequest);
            assert_eq!(gateway.calls(), 0, "count {} made a model call", n);
            assert_eq!(images.calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn test_empty_category_makes_no_calls() {
        let gateway = Arc::new(MockGateway::new(vec![]));
        let pipeline = use_case(gateway.clone(), Arc::new(MockImageSearch::new(None)));

        let err = pipeline
            .execute(RunPipelineInput::new("", ["France", "Japan", "Brazil"]))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), PipelineErrorKind::InvalidRequest);
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_then_success() {
        let gateway = Arc::new(MockGateway::new(vec![
            Ok("I'm sorry, here is some prose".to_string()),
            Ok("[{\"questionText\": 1}]".to_string()),
            Ok(capitals_batch_text()),
        ]));
        let pipeline = use_case(gateway.clone(), Arc::new(MockImageSearch::new(None)));

        let batch = pipeline
            .execute(RunPipelineInput::new("Capitals", ["France", "Japan", "Brazil"]))
            .await
            .unwrap();

        assert_eq!(batch.len(), BATCH_SIZE);
        assert_eq!(gateway.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_returns_no_batch() {
        let gateway = Arc::new(MockGateway::new(vec![
            Ok("nope".to_string()),
            Ok("nope".to_string()),
            Ok("nope".to_string()),
        ]));
        let images = Arc::new(MockImageSearch::new(None));
        let pipeline = use_case(gateway.clone(), images.clone());

        let err = pipeline
            .execute(RunPipelineInput::new("Capitals", ["France", "Japan", "Brazil"]))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), PipelineErrorKind::UpstreamExhausted);
        assert_eq!(gateway.calls(), 3);
        assert_eq!(images.calls.load(Ordering::SeqCst), 0);
        let detail = err.detail().unwrap();
        assert!(detail.contains("invalid JSON"));
    }

    #[tokio::test]
    async fn test_image_failure_at_index_three() {
        let gateway = Arc::new(MockGateway::new(vec![Ok(capitals_batch_text())]));
        let pipeline = use_case(gateway, Arc::new(MockImageSearch::new(Some(3))));

        let batch = pipeline
            .execute(RunPipelineInput::new("Capitals", ["France", "Japan", "Brazil"]))
            .await
            .unwrap();

        assert_eq!(batch.len(), BATCH_SIZE);
        for (i, q) in batch.iter().enumerate() {
            if i == 3 {
                assert!(q.image_url().is_none());
            } else {
                assert!(q.image_url().is_some_and(|u| !u.is_empty()));
            }
        }
    }

    #[tokio::test]
    async fn test_missing_credentials_surface() {
        let gateway = Arc::new(MockGateway::new(vec![Err(
            GatewayError::MissingCredentials("GEMINI_API_KEY".to_string()),
        )]));
        let pipeline = use_case(gateway, Arc::new(MockImageSearch::new(None)));

        let err = pipeline
            .execute(RunPipelineInput::new("Capitals", ["France", "Japan", "Brazil"]))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), PipelineErrorKind::MissingCredentials);
        assert!(err.detail().is_none());
    }
}
