use serde_json::json;

use crate::application::ports::FunctionSchema;

pub const EXTRACTOR_FUNCTION_NAME: &str = "extractor";

/// The `extractor` function the model must call. Mirrors the shape of
/// [`crate::domain::GeneratedQuiz`].
pub fn quiz_extractor_schema() -> FunctionSchema {
    FunctionSchema {
        name: EXTRACTOR_FUNCTION_NAME.to_string(),
        description: "Extracts fields from the output/response".to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "quiz": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "description": { "type": "string" },
                        "questions": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "questionText": { "type": "string" },
                                    "answers": {
                                        "type": "array",
                                        "minItems": 1,
                                        "items": {
                                            "type": "object",
                                            "properties": {
                                                "answerText": { "type": "string" },
                                                "isCorrect": { "type": "boolean" }
                                            },
                                            "required": ["answerText", "isCorrect"]
                                        }
                                    }
                                },
                                "required": ["questionText", "answers"]
                            }
                        }
                    },
                    "required": ["name", "description", "questions"]
                }
            },
            "required": ["quiz"]
        }),
    }
}
