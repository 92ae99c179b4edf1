mod mock_llm_client;
mod openai_client;

pub use mock_llm_client::MockStructuredGenerator;
pub use openai_client::{DEFAULT_BASE_URL, OpenAiClient, parse_function_arguments};
