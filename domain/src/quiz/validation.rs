//! Response validation for generated quiz batches.
//!
//! Turns the raw text returned by the generation model into a
//! [`QuestionBatch`] or a [`ValidationError`] explaining what is wrong. Pure
//! domain logic: no I/O and no retry decisions (the caller treats every
//! [`ValidationError`] as a failed attempt).
//!
//! # Checks (in order)
//!
//! | Step | Check | Error |
//! |------|-------|-------|
//! | 0 | Strip Markdown code fences | - |
//! | 1 | Text parses as JSON | [`ValidationError::Syntax`] |
//! | 2 | Value is an array | [`ValidationError::NotASequence`] |
//! | 3 | Array has [`BATCH_SIZE`] elements | [`ValidationError::WrongLength`] |
//! | 4 | Each element has the four required fields with the right shapes | [`ValidationError::MissingField`], [`ValidationError::WrongShape`] |
//! | 5 | `options` contains `correctAnswer` | [`ValidationError::AnswerNotInOptions`] |
//!
//! Step 0 only matters for free-text responses; structured-output responses
//! pass through it unchanged.

use crate::core::string::truncate;
use crate::quiz::batch::{BATCH_SIZE, QuestionBatch};
use crate::quiz::question::QuizQuestion;
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

/// Maximum bytes of model text quoted back in a [`ValidationError::Syntax`].
const EXCERPT_LEN: usize = 200;

/// Minimum number of answer options per question.
const MIN_OPTIONS: usize = 2;

static OPENING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```[A-Za-z]*[ \t]*\r?\n?").expect("valid regex"));

static CLOSING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n?```$").expect("valid regex"));

/// Reasons a model response is not a usable batch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("model returned invalid JSON: {excerpt}")]
    Syntax { excerpt: String },

    #[error("model output is not a JSON array")]
    NotASequence,

    #[error("expected exactly {expected} questions, received {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("question {index} is not a JSON object")]
    NotAnObject { index: usize },

    #[error("question {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("question {index} field '{field}' must be {expected}")]
    WrongShape {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },

    #[error("question {index}: correct answer '{answer}' is not among its options")]
    AnswerNotInOptions { index: usize, answer: String },
}

/// Remove a surrounding Markdown code fence (```` ```json ... ``` ````).
///
/// Text without fences is returned trimmed and otherwise untouched.
pub fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    let without_open = OPENING_FENCE.replace(trimmed, "");
    let without_close = CLOSING_FENCE.replace(&without_open, "");
    without_close.trim().to_string()
}

/// Validate raw model text and build a [`QuestionBatch`].
///
/// Any `imageUrl` the model invents is ignored; images are attached later by
/// the image resolver.
pub fn validate(raw: &str) -> Result<QuestionBatch, ValidationError> {
    let cleaned = strip_code_fences(raw);

    let value: Value = serde_json::from_str(&cleaned).map_err(|_| ValidationError::Syntax {
        excerpt: truncate(&cleaned, EXCERPT_LEN),
    })?;

    let items = value.as_array().ok_or(ValidationError::NotASequence)?;

    if items.len() != BATCH_SIZE {
        return Err(ValidationError::WrongLength {
            expected: BATCH_SIZE,
            actual: items.len(),
        });
    }

    let questions = items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_question(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(QuestionBatch::from_validated(questions))
}

fn parse_question(index: usize, item: &Value) -> Result<QuizQuestion, ValidationError> {
    let object = item
        .as_object()
        .ok_or(ValidationError::NotAnObject { index })?;

    let image_search_query = required_string(object, index, "imageSearchQuery")?;
    let question_text = required_string(object, index, "questionText")?;
    let correct_answer = required_string(object, index, "correctAnswer")?;
    let options = required_options(object, index)?;

    let question = QuizQuestion::new(image_search_query, question_text, correct_answer, options);
    if !question.answer_in_options() {
        return Err(ValidationError::AnswerNotInOptions {
            index,
            answer: truncate(question.correct_answer(), 80),
        });
    }

    Ok(question)
}

fn required_string(
    object: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<String, ValidationError> {
    let value = object
        .get(field)
        .ok_or(ValidationError::MissingField { index, field })?;

    match value.as_str().map(str::trim) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(ValidationError::WrongShape {
            index,
            field,
            expected: "a non-empty string",
        }),
    }
}

fn required_options(
    object: &Map<String, Value>,
    index: usize,
) -> Result<Vec<String>, ValidationError> {
    const FIELD: &str = "options";
    const EXPECTED: &str = "an array of at least 2 distinct non-empty strings";

    let wrong_shape = || ValidationError::WrongShape {
        index,
        field: FIELD,
        expected: EXPECTED,
    };

    let values = object
        .get(FIELD)
        .ok_or(ValidationError::MissingField {
            index,
            field: FIELD,
        })?
        .as_array()
        .ok_or_else(wrong_shape)?;

    let options = values
        .iter()
        .map(|v| match v.as_str().map(str::trim) {
            Some(s) if !s.is_empty() => Ok(s.to_string()),
            _ => Err(wrong_shape()),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen = HashSet::new();
    if !options.iter().all(|o| seen.insert(o.to_lowercase())) {
        return Err(wrong_shape());
    }

    if seen.len() < MIN_OPTIONS {
        return Err(wrong_shape());
    }

    Ok(options)
}
