use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{FunctionSchema, StructuredGenerator, StructuredGeneratorError};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::config::LlmSettings;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Chat-completions client that forces the model to answer through a single
/// function call and returns the parsed call arguments.
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    tools: Vec<Tool<'a>>,
    tool_choice: ToolChoice<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
}

#[derive(Serialize)]
struct Tool<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    function: &'a FunctionSchema,
}

#[derive(Serialize)]
struct ToolChoice<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    function: ToolChoiceFunction<'a>,
}

#[derive(Serialize)]
struct ToolChoiceFunction<'a> {
    name: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    tool_calls: Option<Vec<ToolCall>>,
    #[serde(default)]
    function_call: Option<FunctionCall>,
}

#[derive(Deserialize)]
struct ToolCall {
    function: FunctionCall,
}

#[derive(Deserialize)]
struct FunctionCall {
    name: String,
    arguments: String,
}

impl OpenAiClient {
    pub fn with_base_url(api_key: Option<String>, model: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            temperature: None,
        }
    }

    pub fn from_settings(settings: &LlmSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: settings
                .base_url
                .as_deref()
                .unwrap_or(DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            api_key: settings.api_key.clone(),
            model: settings.chat_model.clone(),
            temperature: settings.temperature,
        })
    }

    fn api_key(&self) -> Result<&str, StructuredGeneratorError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(StructuredGeneratorError::MissingApiKey)
    }

    /// Builds the chat-completions request that forces a call to `schema`.
    pub fn build_request(
        &self,
        prompt: &str,
        schema: &FunctionSchema,
    ) -> Result<reqwest::Request, StructuredGeneratorError> {
        let api_key = self.api_key()?;

        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: vec![ContentPart::Text { text: prompt }],
            }],
            tools: vec![Tool {
                kind: "function",
                function: schema,
            }],
            tool_choice: ToolChoice {
                kind: "function",
                function: ToolChoiceFunction { name: &schema.name },
            },
            temperature: self.temperature,
        };

        self.client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request_body)
            .build()
            .map_err(|e| StructuredGeneratorError::ApiRequestFailed(e.to_string()))
    }
}

/// Pulls the arguments of the call to `function_name` out of the first choice
/// of a chat-completions response body.
pub fn parse_function_arguments(
    body: &str,
    function_name: &str,
) -> Result<serde_json::Value, StructuredGeneratorError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| StructuredGeneratorError::InvalidResponse(e.to_string()))?;

    let message = response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message)
        .ok_or_else(|| StructuredGeneratorError::InvalidResponse("empty choices".to_string()))?;

    let call = message
        .tool_calls
        .into_iter()
        .flatten()
        .map(|tc| tc.function)
        .chain(message.function_call)
        .find(|call| call.name == function_name)
        .ok_or_else(|| {
            StructuredGeneratorError::InvalidResponse(format!(
                "model did not call function '{function_name}'"
            ))
        })?;

    serde_json::from_str(&call.arguments).map_err(|e| {
        StructuredGeneratorError::InvalidResponse(format!(
            "function arguments are not valid JSON: {e}"
        ))
    })
}

#[async_trait]
impl StructuredGenerator for OpenAiClient {
    #[tracing::instrument(
        skip(self, prompt, schema),
        fields(model = %self.model, function = %schema.name)
    )]
    async fn generate(
        &self,
        prompt: &str,
        schema: &FunctionSchema,
    ) -> Result<serde_json::Value, StructuredGeneratorError> {
        let request = self.build_request(prompt, schema)?;

        tracing::debug!(prompt = %sanitize_prompt(prompt), "Requesting structured completion");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| StructuredGeneratorError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(StructuredGeneratorError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StructuredGeneratorError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| StructuredGeneratorError::InvalidResponse(e.to_string()))?;

        parse_function_arguments(&body, &schema.name)
    }
}
