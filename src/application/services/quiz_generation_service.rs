use std::sync::Arc;

use crate::application::ports::{
    FileLoader, FileLoaderError, FunctionSchema, QuizRepository, RepositoryError,
    StructuredGenerator, StructuredGeneratorError,
};
use crate::domain::{Document, GeneratedQuiz, QuizId, QuizValidationError};

use super::prompt_builder::{QUIZ_INSTRUCTION, build_prompt};
use super::quiz_schema::quiz_extractor_schema;

/// Runs one upload through extraction, generation, validation and storage.
///
/// Every stage runs once and in order; the first failure ends the request.
pub struct QuizGenerationService {
    file_loader: Arc<dyn FileLoader>,
    generator: Arc<dyn StructuredGenerator>,
    repository: Arc<dyn QuizRepository>,
    schema: FunctionSchema,
}

impl QuizGenerationService {
    pub fn new(
        file_loader: Arc<dyn FileLoader>,
        generator: Arc<dyn StructuredGenerator>,
        repository: Arc<dyn QuizRepository>,
    ) -> Self {
        Self {
            file_loader,
            generator,
            repository,
            schema: quiz_extractor_schema(),
        }
    }

    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            size_bytes = document.size_bytes,
        )
    )]
    pub async fn generate(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<QuizId, QuizGenerationError> {
        let pages = self
            .file_loader
            .extract_pages(data, document)
            .await
            .map_err(QuizGenerationError::Extraction)?;

        let prompt = build_prompt(QUIZ_INSTRUCTION, &pages);
        tracing::debug!(
            page_count = pages.len(),
            prompt_chars = prompt.len(),
            "Prompt built"
        );

        let raw = self
            .generator
            .generate(&prompt, &self.schema)
            .await
            .map_err(QuizGenerationError::from_generator)?;

        let quiz = GeneratedQuiz::from_value(raw).map_err(QuizGenerationError::InvalidQuiz)?;
        tracing::debug!(
            question_count = quiz.questions.len(),
            answer_count = quiz.answer_count(),
            "Quiz validated"
        );

        let quiz_id = self
            .repository
            .save(&quiz)
            .await
            .map_err(QuizGenerationError::Persistence)?;

        tracing::info!(quiz_id = %quiz_id, name = %quiz.name, "Quiz generated");

        Ok(quiz_id)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QuizGenerationError {
    #[error("{0}")]
    Extraction(FileLoaderError),
    #[error("{0}")]
    Configuration(StructuredGeneratorError),
    #[error("generation failed: {0}")]
    Generation(StructuredGeneratorError),
    #[error("generation failed: {0}")]
    InvalidQuiz(QuizValidationError),
    #[error("persistence failed: {0}")]
    Persistence(RepositoryError),
}

impl QuizGenerationError {
    fn from_generator(err: StructuredGeneratorError) -> Self {
        match err {
            StructuredGeneratorError::MissingApiKey => Self::Configuration(err),
            other => Self::Generation(other),
        }
    }

    /// Stage that produced the error, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Extraction(_) => "extraction",
            Self::Configuration(_) => "configuration",
            Self::Generation(_) | Self::InvalidQuiz(_) => "generation",
            Self::Persistence(_) => "persistence",
        }
    }
}
