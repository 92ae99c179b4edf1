use axum::http::StatusCode;
use serde_json::json;

use quizgen::application::ports::{RepositoryError, StructuredGeneratorError};
use quizgen::application::services::QuizGenerationError;
use quizgen::domain::QuizId;
use quizgen::presentation::handlers::{ErrorResponse, QuizResponse, QuizResponseBody};

#[test]
fn given_quiz_id_when_formatting_then_returns_ok_with_quiz_id() {
    let response = QuizResponse::from(Ok::<_, QuizGenerationError>(QuizId::new("abc123")));

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        serde_json::to_value(&response.body).unwrap(),
        json!({ "quizID": "abc123" })
    );
}

#[test]
fn given_missing_api_key_when_formatting_then_returns_500_without_quiz_id() {
    let outcome: Result<QuizId, _> = Err(QuizGenerationError::Configuration(
        StructuredGeneratorError::MissingApiKey,
    ));

    let response = QuizResponse::from(outcome);
    let body = serde_json::to_value(&response.body).unwrap();

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "OpenAI API key not provided" }));
    assert!(body.get("quizID").is_none());
}

#[test]
fn given_persistence_failure_when_formatting_then_returns_500_with_message() {
    let outcome: Result<QuizId, _> = Err(QuizGenerationError::Persistence(
        RepositoryError::ConnectionFailed("db down".to_string()),
    ));

    let response = QuizResponse::from(outcome);

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body,
        QuizResponseBody::Error(ErrorResponse {
            error: "persistence failed: connection failed: db down".to_string()
        })
    );
}
