//! Prompt templates for quiz generation

use crate::quiz::batch::BATCH_SIZE;
use crate::quiz::request::GenerationRequest;
use serde_json::{Value, json};

/// Everything sent to the generation model for one request
#[derive(Debug, Clone, PartialEq)]
pub struct QuizPrompt {
    /// Instruction text (system instruction)
    pub system: String,
    /// User message
    pub user: String,
    /// Response schema for structured-output mode
    pub response_schema: Value,
}

/// Templates for generating quiz prompts
pub struct QuizPromptTemplate;

impl QuizPromptTemplate {
    /// Build the full prompt for a request
    pub fn build(request: &GenerationRequest) -> QuizPrompt {
        let response_schema = Self::response_schema();
        QuizPrompt {
            system: Self::system_prompt(&response_schema),
            user: Self::user_prompt(request),
            response_schema,
        }
    }

    /// Schema of a single question (Gemini schema dialect)
    pub fn question_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "imageSearchQuery": { "type": "STRING" },
                "questionText": { "type": "STRING" },
                "correctAnswer": { "type": "STRING" },
                "options": { "type": "ARRAY", "items": { "type": "STRING" } }
            },
            "required": ["imageSearchQuery", "questionText", "correctAnswer", "options"]
        })
    }

    /// Schema of the whole response: an array of exactly `BATCH_SIZE` questions
    pub fn response_schema() -> Value {
        json!({
            "type": "ARRAY",
            "items": Self::question_schema(),
            "minItems": BATCH_SIZE,
            "maxItems": BATCH_SIZE
        })
    }

    /// System instruction, with the response schema embedded
    pub fn system_prompt(response_schema: &Value) -> String {
        let schema = serde_json::to_string_pretty(response_schema)
            .unwrap_or_else(|_| response_schema.to_string());

        format!(
            r#"You are a professional quiz generator.
Generate exactly {count} multiple-choice questions in JSON format.
Each question must relate to the given category and exactly one country from the provided list.
Each question object must include:
- imageSearchQuery: a concise phrase to search for a photo representing the correct answer.
- questionText: the question text.
- correctAnswer: the correct option.
- options: an array of countries from the provided list, including the correct answer.

The output MUST strictly follow this JSON schema:
{schema}

DO NOT include any extra text, explanation, or Markdown outside the JSON array."#,
            count = BATCH_SIZE,
            schema = schema,
        )
    }

    /// User message naming the category and candidate countries
    pub fn user_prompt(request: &GenerationRequest) -> String {
        format!(
            "Create {} quiz questions using:\n- Category: {}\n- Countries (Options): [{}]",
            BATCH_SIZE,
            request.category(),
            request.countries().join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest::try_new("Capitals", ["France", "Japan", "Brazil"]).unwrap()
    }

    #[test]
    fn test_user_prompt_format() {
        let prompt = QuizPromptTemplate::user_prompt(&request());
        assert!(prompt.contains("Category: Capitals"));
        assert!(prompt.contains("[France, Japan, Brazil]"));
        assert!(prompt.starts_with("Create 10 quiz questions"));
    }

    #[test]
    fn test_system_prompt_embeds_schema() {
        let prompt = QuizPromptTemplate::build(&request());
        assert!(prompt.system.contains("exactly 10 multiple-choice questions"));
        assert!(prompt.system.contains("\"imageSearchQuery\""));
        assert!(prompt.system.contains("DO NOT include any extra text"));
    }

    #[test]
    fn test_response_schema_shape() {
        let schema = QuizPromptTemplate::response_schema();
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(schema["minItems"], 10);
        assert_eq!(schema["maxItems"], 10);
        assert_eq!(schema["items"]["required"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn test_build_is_pure() {
        assert_eq!(
            QuizPromptTemplate::build(&request()),
            QuizPromptTemplate::build(&request())
        );
    }
}
