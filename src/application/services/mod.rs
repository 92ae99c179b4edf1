mod prompt_builder;
mod quiz_generation_service;
mod quiz_schema;

pub use prompt_builder::{QUIZ_INSTRUCTION, build_prompt};
pub use quiz_generation_service::{QuizGenerationError, QuizGenerationService};
pub use quiz_schema::{EXTRACTOR_FUNCTION_NAME, quiz_extractor_schema};
