//! Gemini adapter for the quiz model gateway
//!
//! Calls the `generateContent` endpoint of the Gemini API. One
//! [`QuizModelGateway::generate`](quizgen_application::QuizModelGateway::generate)
//! call is exactly one HTTP request; retries are the use case's job.

pub mod gateway;
pub mod protocol;

pub use gateway::{GeminiGateway, GeminiSettings};
