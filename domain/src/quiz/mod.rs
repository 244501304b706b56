//! Quiz subdomain
//!
//! - [`request::GenerationRequest`] - validated pipeline input
//! - [`question::QuizQuestion`] - one multiple-choice question
//! - [`batch::QuestionBatch`] - exactly ten questions, in generation order
//! - [`validation`] - raw model text → [`batch::QuestionBatch`]

pub mod batch;
pub mod question;
pub mod request;
pub mod validation;
