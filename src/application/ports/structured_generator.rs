use async_trait::async_trait;
use serde::Serialize;

/// A function declaration the model is forced to call. `parameters` is a JSON
/// schema object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionSchema {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// Produces a JSON value shaped by `schema` from a free-text prompt.
#[async_trait]
pub trait StructuredGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        schema: &FunctionSchema,
    ) -> Result<serde_json::Value, StructuredGeneratorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StructuredGeneratorError {
    #[error("OpenAI API key not provided")]
    MissingApiKey,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
