//! Shared router state

use super::error::ApiError;
use quizgen_application::RunPipelineUseCase;
use std::sync::Arc;

/// State shared by all handlers.
///
/// Without generation credentials the server still starts; every quiz
/// request then fails with the stored reason and no upstream call is made.
#[derive(Clone)]
pub struct AppState {
    pipeline: Result<Arc<RunPipelineUseCase>, String>,
}

impl AppState {
    pub fn ready(pipeline: RunPipelineUseCase) -> Self {
        Self {
            pipeline: Ok(Arc::new(pipeline)),
        }
    }

    pub fn unconfigured(reason: impl Into<String>) -> Self {
        Self {
            pipeline: Err(reason.into()),
        }
    }

    pub fn pipeline(&self) -> Result<&RunPipelineUseCase, ApiError> {
        self.pipeline
            .as_deref()
            .map_err(|reason| ApiError::NotConfigured(reason.clone()))
    }
}
