mod document;
mod document_id;
mod page_text;
mod quiz;
mod quiz_id;

pub use document::{ContentType, Document};
pub use document_id::DocumentId;
pub use page_text::PageText;
pub use quiz::{Answer, GeneratedQuiz, Question, Quiz, QuizValidationError};
pub use quiz_id::QuizId;
