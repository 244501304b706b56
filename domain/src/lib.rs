//! Domain layer for quizgen
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Generation Request
//!
//! A validated category plus 3-5 distinct candidate countries. Only
//! [`GenerationRequest::try_new`] can build one, so every request that reaches
//! the pipeline is already well formed.
//!
//! ## Question Batch
//!
//! Exactly [`BATCH_SIZE`] multiple-choice questions in generation order. The
//! only way to obtain a [`QuestionBatch`] is through [`validate`], which turns
//! raw model text into a batch or a [`ValidationError`].
//!
//! ## Prompt
//!
//! [`QuizPromptTemplate`] turns a request into the instruction text, user text
//! and response schema sent to the generation model.

pub mod core;
pub mod prompt;
pub mod quiz;

// Re-export commonly used types
pub use core::{error::DomainError, string::truncate};
pub use prompt::{QuizPrompt, QuizPromptTemplate};
pub use quiz::{
    batch::{BATCH_SIZE, QuestionBatch},
    question::QuizQuestion,
    request::{GenerationRequest, MAX_COUNTRIES, MIN_COUNTRIES},
    validation::{ValidationError, strip_code_fences, validate},
};
