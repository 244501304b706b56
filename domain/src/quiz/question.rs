//! Quiz question entity

use serde::Serialize;

/// A single multiple-choice question
///
/// Built by the response validator without an image; the image resolver
/// attaches `image_url` afterwards. Serializes with the camelCase field names
/// the browser client expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    image_search_query: String,
    question_text: String,
    correct_answer: String,
    options: Vec<String>,
    image_url: Option<String>,
}

impl QuizQuestion {
    pub fn new(
        image_search_query: impl Into<String>,
        question_text: impl Into<String>,
        correct_answer: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            image_search_query: image_search_query.into(),
            question_text: question_text.into(),
            correct_answer: correct_answer.into(),
            options,
            image_url: None,
        }
    }

    pub fn image_search_query(&self) -> &str {
        &self.image_search_query
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Check whether `correct_answer` is one of `options`
    pub fn answer_in_options(&self) -> bool {
        self.options.iter().any(|o| o == &self.correct_answer)
    }

    pub(crate) fn set_image_url(&mut self, url: Option<String>) {
        self.image_url = url;
    }
}
