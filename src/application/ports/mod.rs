mod file_loader;
mod quiz_repository;
mod repository_error;
mod structured_generator;

pub use file_loader::{FileLoader, FileLoaderError};
pub use quiz_repository::QuizRepository;
pub use repository_error::RepositoryError;
pub use structured_generator::{FunctionSchema, StructuredGenerator, StructuredGeneratorError};
