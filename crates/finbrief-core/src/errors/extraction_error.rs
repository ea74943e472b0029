/// Document extraction errors.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("document not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to read document {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("document has no pages: {path}")]
    NoPages { path: String },

    #[error("page {page} yielded no text")]
    EmptyPage { page: u32 },

    #[error("failed to extract text from page {page}: {reason}")]
    PageUnreadable { page: u32, reason: String },
}
