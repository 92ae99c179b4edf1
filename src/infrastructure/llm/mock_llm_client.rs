use serde_json::json;

use crate::application::ports::{FunctionSchema, StructuredGenerator, StructuredGeneratorError};

/// Returns the same one-question quiz for every prompt. Used in scaffold mode.
pub struct MockStructuredGenerator;

#[async_trait::async_trait]
impl StructuredGenerator for MockStructuredGenerator {
    async fn generate(
        &self,
        _prompt: &str,
        _schema: &FunctionSchema,
    ) -> Result<serde_json::Value, StructuredGeneratorError> {
        Ok(json!({
            "quiz": {
                "name": "Scaffold quiz",
                "description": "Generated without contacting a model",
                "questions": [{
                    "questionText": "Is this quiz generated by a mock?",
                    "answers": [
                        { "answerText": "Yes", "isCorrect": true },
                        { "answerText": "No", "isCorrect": false }
                    ]
                }]
            }
        }))
    }
}
