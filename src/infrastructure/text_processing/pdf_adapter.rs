use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document, PageText};

use super::text_sanitizer::sanitize_page_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_ITEM_SEPARATOR: &str = " ";

pub struct PdfAdapter {
    item_separator: String,
}

impl Default for PdfAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfAdapter {
    pub fn new() -> Self {
        Self::with_item_separator(DEFAULT_ITEM_SEPARATOR)
    }

    pub fn with_item_separator(separator: impl Into<String>) -> Self {
        Self {
            item_separator: separator.into(),
        }
    }

    fn extract_raw_pages(path: &std::path::Path) -> Result<Vec<PageText>, FileLoaderError> {
        let doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            // A page whose text cannot be read counts as having no text.
            match doc.extract_text(page_index) {
                Ok(text) => pages.push(PageText::new((page_index + 1) as u32, text)),
                Err(e) => tracing::warn!(page = page_index + 1, error = %e, "Skipping unreadable page"),
            }
        }

        Ok(pages)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_pages(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<Vec<PageText>, FileLoaderError> {
        if document.content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.mime().to_string(),
            ));
        }

        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        let temp_path = temp_file.path().to_path_buf();

        let raw_pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_raw_pages(&temp_path)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        let total_pages = raw_pages.len();

        let pages: Vec<PageText> = raw_pages
            .into_iter()
            .map(|p| {
                let text = sanitize_page_text(&p.text, &self.item_separator);
                PageText::new(p.page_number, text)
            })
            .filter(|p| !p.text.is_empty())
            .collect();

        tracing::info!(
            total_pages,
            text_pages = pages.len(),
            "PDF text extraction complete"
        );

        if pages.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(pages)
    }
}
