use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use quizgen::application::ports::{
    FileLoader, FileLoaderError, FunctionSchema, QuizRepository, RepositoryError,
    StructuredGenerator, StructuredGeneratorError,
};
use quizgen::application::services::{QUIZ_INSTRUCTION, QuizGenerationError, QuizGenerationService};
use quizgen::domain::{ContentType, Document, PageText, Quiz, QuizId};
use quizgen::presentation::handlers::QuizResponse;

struct FixedPages(Vec<PageText>);

#[async_trait::async_trait]
impl FileLoader for FixedPages {
    async fn extract_pages(
        &self,
        _data: &[u8],
        _document: &Document,
    ) -> Result<Vec<PageText>, FileLoaderError> {
        Ok(self.0.clone())
    }
}

struct FailingLoader;

#[async_trait::async_trait]
impl FileLoader for FailingLoader {
    async fn extract_pages(
        &self,
        _data: &[u8],
        _document: &Document,
    ) -> Result<Vec<PageText>, FileLoaderError> {
        Err(FileLoaderError::ExtractionFailed(
            "failed to parse PDF: bad xref".to_string(),
        ))
    }
}

struct RecordingGenerator {
    response: fn() -> Result<Value, StructuredGeneratorError>,
    prompts: Mutex<Vec<String>>,
}

impl RecordingGenerator {
    fn new(response: fn() -> Result<Value, StructuredGeneratorError>) -> Arc<Self> {
        Arc::new(Self {
            response,
            prompts: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait::async_trait]
impl StructuredGenerator for RecordingGenerator {
    async fn generate(
        &self,
        prompt: &str,
        _schema: &FunctionSchema,
    ) -> Result<Value, StructuredGeneratorError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        (self.response)()
    }
}

struct RecordingRepository {
    result: fn() -> Result<QuizId, RepositoryError>,
    saved: Mutex<Vec<Quiz>>,
}

impl RecordingRepository {
    fn new(result: fn() -> Result<QuizId, RepositoryError>) -> Arc<Self> {
        Arc::new(Self {
            result,
            saved: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait::async_trait]
impl QuizRepository for RecordingRepository {
    async fn save(&self, quiz: &Quiz) -> Result<QuizId, RepositoryError> {
        self.saved.lock().unwrap().push(quiz.clone());
        (self.result)()
    }
}

fn sample_quiz() -> Value {
    json!({
        "quiz": {
            "name": "Geo",
            "description": "d",
            "questions": [{
                "questionText": "Capital of France?",
                "answers": [
                    { "answerText": "Paris", "isCorrect": true },
                    { "answerText": "Lyon", "isCorrect": false }
                ]
            }]
        }
    })
}

fn document() -> Document {
    Document::new("doc.pdf".to_string(), ContentType::Pdf, 3)
}

#[tokio::test]
async fn given_multiple_pages_when_generating_then_prompt_joins_pages_in_order() {
    let loader = Arc::new(FixedPages(vec![
        PageText::new(1, "Page one."),
        PageText::new(2, "Page two."),
        PageText::new(4, "Page four."),
    ]));
    let generator = RecordingGenerator::new(|| Ok(sample_quiz()));
    let repository = RecordingRepository::new(|| Ok(QuizId::new("q-1")));
    let service = QuizGenerationService::new(loader, generator.clone(), repository);

    service.generate(b"pdf", &document()).await.unwrap();

    assert_eq!(
        generator.prompts.lock().unwrap()[0],
        format!("{QUIZ_INSTRUCTION}\nPage one.\nPage two.\nPage four.")
    );
    assert!(!generator.prompts.lock().unwrap()[0].contains("\n\n"));
}

#[tokio::test]
async fn given_valid_quiz_when_generating_then_persists_typed_quiz() {
    let generator = RecordingGenerator::new(|| Ok(sample_quiz()));
    let repository = RecordingRepository::new(|| Ok(QuizId::new("abc123")));
    let service = QuizGenerationService::new(
        Arc::new(FixedPages(vec![PageText::new(1, "The capital of France is Paris.")])),
        generator,
        repository.clone(),
    );

    let quiz_id = service.generate(b"pdf", &document()).await.unwrap();

    assert_eq!(quiz_id, QuizId::new("abc123"));
    let saved = repository.saved.lock().unwrap();
    assert_eq!(saved[0].name, "Geo");
    assert_eq!(saved[0].questions[0].answers[1].answer_text, "Lyon");
    assert!(!saved[0].questions[0].answers[1].is_correct);
}

#[tokio::test]
async fn given_sample_quiz_when_stored_and_formatted_then_returns_ok_with_stub_id() {
    let service = QuizGenerationService::new(
        Arc::new(FixedPages(vec![PageText::new(1, "Geography notes.")])),
        RecordingGenerator::new(|| Ok(sample_quiz())),
        RecordingRepository::new(|| Ok(QuizId::new("stub-7"))),
    );

    let response = QuizResponse::from(service.generate(b"pdf", &document()).await);

    assert_eq!(response.status.as_u16(), 200);
    assert_eq!(
        serde_json::to_value(&response.body).unwrap(),
        json!({ "quizID": "stub-7" })
    );
}

#[tokio::test]
async fn given_extraction_failure_when_generating_then_model_is_never_called() {
    let generator = RecordingGenerator::new(|| Ok(sample_quiz()));
    let service = QuizGenerationService::new(
        Arc::new(FailingLoader),
        generator.clone(),
        RecordingRepository::new(|| Ok(QuizId::new("unused"))),
    );

    let err = service.generate(b"pdf", &document()).await.unwrap_err();

    assert!(matches!(err, QuizGenerationError::Extraction(_)));
    assert_eq!(err.kind(), "extraction");
    assert_eq!(err.to_string(), "extraction failed: failed to parse PDF: bad xref");
    assert!(generator.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_missing_api_key_when_generating_then_returns_configuration_error() {
    let repository = RecordingRepository::new(|| Ok(QuizId::new("unused")));
    let service = QuizGenerationService::new(
        Arc::new(FixedPages(vec![PageText::new(1, "text")])),
        RecordingGenerator::new(|| Err(StructuredGeneratorError::MissingApiKey)),
        repository.clone(),
    );

    let err = service.generate(b"pdf", &document()).await.unwrap_err();

    assert_eq!(err.kind(), "configuration");
    assert_eq!(err.to_string(), "OpenAI API key not provided");
    assert!(repository.saved.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_rate_limited_provider_when_generating_then_returns_generation_error() {
    let service = QuizGenerationService::new(
        Arc::new(FixedPages(vec![PageText::new(1, "text")])),
        RecordingGenerator::new(|| Err(StructuredGeneratorError::RateLimited)),
        RecordingRepository::new(|| Ok(QuizId::new("unused"))),
    );

    let err = service.generate(b"pdf", &document()).await.unwrap_err();

    assert!(matches!(
        err,
        QuizGenerationError::Generation(StructuredGeneratorError::RateLimited)
    ));
    assert_eq!(err.to_string(), "generation failed: rate limited");
}

#[tokio::test]
async fn given_quiz_missing_questions_when_generating_then_rejected_before_persistence() {
    let repository = RecordingRepository::new(|| Ok(QuizId::new("unused")));
    let service = QuizGenerationService::new(
        Arc::new(FixedPages(vec![PageText::new(1, "text")])),
        RecordingGenerator::new(|| Ok(json!({ "quiz": { "name": "Geo", "description": "d" } }))),
        repository.clone(),
    );

    let err = service.generate(b"pdf", &document()).await.unwrap_err();

    assert!(matches!(err, QuizGenerationError::InvalidQuiz(_)));
    assert_eq!(err.kind(), "generation");
    assert!(repository.saved.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_question_without_answers_when_generating_then_rejected_before_persistence() {
    let repository = RecordingRepository::new(|| Ok(QuizId::new("unused")));
    let service = QuizGenerationService::new(
        Arc::new(FixedPages(vec![PageText::new(1, "text")])),
        RecordingGenerator::new(|| {
            Ok(json!({
                "quiz": {
                    "name": "Geo",
                    "description": "d",
                    "questions": [{ "questionText": "Capital of France?", "answers": [] }]
                }
            }))
        }),
        repository.clone(),
    );

    let err = service.generate(b"pdf", &document()).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "generation failed: question 0 has no answers"
    );
    assert!(repository.saved.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_repository_failure_when_generating_then_returns_persistence_error() {
    let service = QuizGenerationService::new(
        Arc::new(FixedPages(vec![PageText::new(1, "text")])),
        RecordingGenerator::new(|| Ok(sample_quiz())),
        RecordingRepository::new(|| Err(RepositoryError::QueryFailed("deadlock".to_string()))),
    );

    let err = service.generate(b"pdf", &document()).await.unwrap_err();

    assert_eq!(err.kind(), "persistence");
    assert_eq!(err.to_string(), "persistence failed: query failed: deadlock");
}
