//! Console output formatter for question batches

use crate::cli::commands::OutputFormat;
use quizgen_domain::QuestionBatch;

/// Formats question batches for stdout
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn format(batch: &QuestionBatch, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Json => Self::format_json(batch),
            OutputFormat::Text => Ok(Self::format_text(batch)),
        }
    }

    /// Same JSON array the HTTP endpoint returns
    pub fn format_json(batch: &QuestionBatch) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(batch)
    }

    /// Numbered questions with options, answer and image
    pub fn format_text(batch: &QuestionBatch) -> String {
        let mut output = String::new();

        for (i, question) in batch.iter().enumerate() {
            output.push_str(&format!("{:>2}. {}\n", i + 1, question.question_text()));
            for option in question.options() {
                let marker = if option == question.correct_answer() {
                    '*'
                } else {
                    ' '
                };
                output.push_str(&format!("    {} {}\n", marker, option));
            }
            output.push_str(&format!(
                "    image: {}\n\n",
                question.image_url().unwrap_or("(none)")
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizgen_domain::validate;
    use serde_json::{Value, json};

    fn batch() -> QuestionBatch {
        let items: Vec<Value> = (0..10)
            .map(|i| {
                json!({
                    "imageSearchQuery": format!("landmark {}", i),
                    "questionText": format!("Where is landmark {}?", i),
                    "correctAnswer": "Japan",
                    "options": ["France", "Japan", "Brazil"]
                })
            })
            .collect();
        validate(&Value::Array(items).to_string()).unwrap()
    }

    #[test]
    fn test_format_text_marks_answer() {
        let text = ConsoleFormatter::format_text(&batch());
        assert!(text.starts_with(" 1. Where is landmark 0?\n"));
        assert!(text.contains("    * Japan\n"));
        assert!(text.contains("      France\n"));
        assert!(text.contains("image: (none)"));
        assert!(text.contains("10. Where is landmark 9?"));
    }

    #[test]
    fn test_format_json_is_the_wire_array() {
        let json = ConsoleFormatter::format(&batch(), OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 10);
        assert_eq!(items[0]["correctAnswer"], "Japan");
        assert!(items[0]["imageUrl"].is_null());
    }
}
