use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::QuizGenerationError;
use crate::domain::QuizId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizCreatedResponse {
    #[serde(rename = "quizID")]
    pub quiz_id: QuizId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QuizResponseBody {
    Created(QuizCreatedResponse),
    Error(ErrorResponse),
}

/// Status and body sent back for a quiz generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizResponse {
    pub status: StatusCode,
    pub body: QuizResponseBody,
}

impl QuizResponse {
    pub fn created(quiz_id: QuizId) -> Self {
        Self {
            status: StatusCode::OK,
            body: QuizResponseBody::Created(QuizCreatedResponse { quiz_id }),
        }
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: QuizResponseBody::Error(ErrorResponse {
                error: message.into(),
            }),
        }
    }
}

impl From<Result<QuizId, QuizGenerationError>> for QuizResponse {
    /// Every pipeline failure maps to 500, whatever stage raised it.
    fn from(outcome: Result<QuizId, QuizGenerationError>) -> Self {
        match outcome {
            Ok(quiz_id) => Self::created(quiz_id),
            Err(e) => {
                tracing::error!(kind = e.kind(), error = %e, "Quiz generation failed");
                Self::error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }
}

impl IntoResponse for QuizResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
