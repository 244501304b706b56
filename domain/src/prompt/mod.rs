//! Prompt domain
//!
//! Builds what the generation model receives for one quiz: an instruction
//! (system) text, a user text, and the JSON response schema.

mod template;

pub use template::{QuizPrompt, QuizPromptTemplate};
