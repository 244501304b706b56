//! Application layer for quizgen
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::RetryPolicy;
pub use ports::{
    image_search::{ImageSearchError, ImageSearchPort},
    quiz_model::{GatewayError, QuizModelGateway},
};
pub use use_cases::generate_questions::{
    AttemptFailure, GenerateQuestionsUseCase, GenerationError, RetryState,
};
pub use use_cases::resolve_images::ResolveImagesUseCase;
pub use use_cases::run_pipeline::{
    PipelineError, PipelineErrorKind, RunPipelineInput, RunPipelineUseCase,
};
