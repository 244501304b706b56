//! Question batch

use crate::quiz::question::QuizQuestion;
use serde::Serialize;

/// Number of questions in every batch.
pub const BATCH_SIZE: usize = 10;

/// Exactly [`BATCH_SIZE`] questions in generation order
///
/// Only [`validate`](crate::quiz::validation::validate) constructs batches, so
/// the length invariant holds for every value that exists. Serializes as a
/// plain JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionBatch {
    questions: Vec<QuizQuestion>,
}

impl QuestionBatch {
    pub(crate) fn from_validated(questions: Vec<QuizQuestion>) -> Self {
        debug_assert_eq!(questions.len(), BATCH_SIZE);
        Self { questions }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuizQuestion> {
        self.questions.iter()
    }

    /// Image search phrases, indexed like the questions
    pub fn search_queries(&self) -> Vec<String> {
        self.questions
            .iter()
            .map(|q| q.image_search_query().to_string())
            .collect()
    }

    /// Attach resolved image URLs by question index.
    ///
    /// `urls[i]` belongs to question `i`. Missing trailing entries leave the
    /// corresponding questions without an image; extra entries are ignored.
    pub fn with_image_urls(mut self, urls: Vec<Option<String>>) -> Self {
        let mut urls = urls.into_iter();
        for question in &mut self.questions {
            question.set_image_url(urls.next().flatten());
        }
        self
    }
}

impl<'a> IntoIterator for &'a QuestionBatch {
    type Item = &'a QuizQuestion;
    type IntoIter = std::slice::Iter<'a, QuizQuestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
