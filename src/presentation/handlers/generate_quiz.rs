use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::{ContentType, Document};
use crate::presentation::state::AppState;

use super::quiz_response::QuizResponse;

pub const PDF_FIELD_NAME: &str = "pdf";

struct Upload {
    filename: String,
    content_type: Option<String>,
    data: axum::body::Bytes,
}

/// Finds the `pdf` field, skipping any other form fields.
async fn read_pdf_field(multipart: &mut Multipart) -> Result<Upload, QuizResponse> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => {
                tracing::warn!("Generate request without a pdf field");
                return Err(QuizResponse::error(
                    StatusCode::BAD_REQUEST,
                    format!("No '{PDF_FIELD_NAME}' file uploaded"),
                ));
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return Err(QuizResponse::error(
                    e.status(),
                    format!("Failed to read multipart: {}", e.body_text()),
                ));
            }
        };

        if field.name() != Some(PDF_FIELD_NAME) {
            tracing::debug!(field = ?field.name(), "Ignoring form field");
            continue;
        }

        let filename = field.file_name().unwrap_or("upload.pdf").to_string();
        let content_type = field.content_type().map(str::to_string);

        let data = field.bytes().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read file bytes");
            QuizResponse::error(e.status(), format!("Failed to read file: {}", e.body_text()))
        })?;

        return Ok(Upload {
            filename,
            content_type,
            data,
        });
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn generate_quiz_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    let upload = match read_pdf_field(&mut multipart).await {
        Ok(upload) => upload,
        Err(rejection) => return rejection.into_response(),
    };

    let content_type = ContentType::detect(upload.content_type.as_deref(), &upload.data);
    let document = Document::new(upload.filename, content_type, upload.data.len() as u64)
        .with_declared_mime(upload.content_type);

    tracing::debug!(
        filename = %document.filename,
        content_type = %content_type.as_mime(),
        bytes = document.size_bytes,
        "Processing quiz upload"
    );

    let outcome = state.quiz_service.generate(&upload.data, &document).await;

    QuizResponse::from(outcome).into_response()
}
