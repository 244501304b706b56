//! Mapping of pipeline failures to HTTP responses

use super::dto::ErrorBody;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quizgen_application::{PipelineError, PipelineErrorKind};
use tracing::{error, warn};

/// Message for request bodies that are not `{category, countries}`
pub const INVALID_INPUT: &str =
    "Invalid input. Requires a category string and an array of 3-5 countries.";

/// An error answered to the HTTP caller
#[derive(Debug)]
pub enum ApiError {
    /// Body could not be read as `{category: string, countries: string[]}`
    MalformedBody(String),
    /// Generation credentials were not available at startup
    NotConfigured(String),
    Pipeline(PipelineError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotConfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Pipeline(e) => match e.kind() {
                PipelineErrorKind::InvalidRequest => StatusCode::BAD_REQUEST,
                PipelineErrorKind::MissingCredentials
                | PipelineErrorKind::UpstreamExhausted
                | PipelineErrorKind::ValidationFailed => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            ApiError::MalformedBody(_) => ErrorBody {
                error: INVALID_INPUT.to_string(),
                detail: None,
            },
            ApiError::NotConfigured(reason) => ErrorBody {
                error: format!("Quiz generation is not configured: {}", reason),
                detail: None,
            },
            ApiError::Pipeline(e) => ErrorBody {
                error: e.to_string(),
                detail: e.detail(),
            },
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(error: PipelineError) -> Self {
        ApiError::Pipeline(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::MalformedBody(reason) => warn!("Rejected request body: {}", reason),
            ApiError::NotConfigured(reason) => error!("Quiz request refused: {}", reason),
            ApiError::Pipeline(e) if status.is_client_error() => warn!("Invalid quiz request: {}", e),
            ApiError::Pipeline(e) => error!("Quiz generation failed: {} ({:?})", e, e.detail()),
        }

        (status, Json(self.body())).into_response()
    }
}
