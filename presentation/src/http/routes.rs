//! Router and handlers

use super::dto::{HealthBody, QuizRequestBody};
use super::error::ApiError;
use super::state::AppState;
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use quizgen_domain::QuestionBatch;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/quiz", post(create_quiz))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// `POST /api/quiz`
async fn create_quiz(
    State(state): State<AppState>,
    body: Result<Json<QuizRequestBody>, JsonRejection>,
) -> Result<Json<QuestionBatch>, ApiError> {
    let pipeline = state.pipeline()?;
    let Json(body) = body?;

    info!(
        "Quiz requested: category '{}', {} countries",
        body.category,
        body.countries.len()
    );

    let batch = pipeline.execute(body.into()).await?;
    Ok(Json(batch))
}

/// `GET /health`
async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}
