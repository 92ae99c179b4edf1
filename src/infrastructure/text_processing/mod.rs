mod mock_file_loader;
mod pdf_adapter;
mod text_sanitizer;

pub use mock_file_loader::MockFileLoader;
pub use pdf_adapter::{DEFAULT_ITEM_SEPARATOR, PdfAdapter};
pub use text_sanitizer::sanitize_page_text;
