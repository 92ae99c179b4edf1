use super::DocumentId;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// An uploaded document. Lives only for the duration of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub content_type: ContentType,
    /// MIME type the client sent with the upload, if any.
    pub declared_mime: Option<String>,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Unsupported,
}

impl ContentType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" | "application/x-pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// Browsers and CLI clients often upload files as `application/octet-stream`,
    /// so the declared type is trusted first and the magic bytes second.
    pub fn detect(mime: Option<&str>, data: &[u8]) -> Self {
        if let Some(ct) = mime.and_then(Self::from_mime) {
            return ct;
        }

        if data.starts_with(PDF_MAGIC) {
            Self::Pdf
        } else {
            Self::Unsupported
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Unsupported => "application/octet-stream",
        }
    }
}

impl Document {
    pub fn new(filename: String, content_type: ContentType, size_bytes: u64) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            content_type,
            declared_mime: None,
            size_bytes,
        }
    }

    pub fn with_declared_mime(mut self, mime: Option<String>) -> Self {
        self.declared_mime = mime.filter(|m| !m.trim().is_empty());
        self
    }

    /// The client's declared type when present, otherwise the detected one.
    pub fn mime(&self) -> &str {
        self.declared_mime
            .as_deref()
            .unwrap_or_else(|| self.content_type.as_mime())
    }
}
