use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, PageText};

/// Treats the upload as UTF-8 text with pages separated by form feeds.
pub struct MockFileLoader;

#[async_trait::async_trait]
impl FileLoader for MockFileLoader {
    async fn extract_pages(
        &self,
        data: &[u8],
        _doc: &Document,
    ) -> Result<Vec<PageText>, FileLoaderError> {
        let text = std::str::from_utf8(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))?;

        Ok(text
            .split('\u{c}')
            .enumerate()
            .filter(|(_, page)| !page.trim().is_empty())
            .map(|(i, page)| PageText::new((i + 1) as u32, page.trim()))
            .collect())
    }
}
