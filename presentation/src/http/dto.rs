//! Request and response bodies

use quizgen_application::RunPipelineInput;
use serde::{Deserialize, Serialize};

/// `POST /api/quiz` body
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequestBody {
    pub category: String,
    pub countries: Vec<String>,
}

impl From<QuizRequestBody> for RunPipelineInput {
    fn from(body: QuizRequestBody) -> Self {
        RunPipelineInput::new(body.category, body.countries)
    }
}

/// Error body: `{"error": ...}` plus `detail` for upstream failures
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
}
