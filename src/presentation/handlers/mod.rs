mod generate_quiz;
mod health;
mod quiz_response;

pub use generate_quiz::{PDF_FIELD_NAME, generate_quiz_handler};
pub use health::health_handler;
pub use quiz_response::{ErrorResponse, QuizCreatedResponse, QuizResponse, QuizResponseBody};
