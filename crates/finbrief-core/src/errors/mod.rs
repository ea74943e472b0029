//! Error taxonomy. Each stage has its own enum; `FinbriefError` aggregates them.

mod config_error;
mod embedding_error;
mod extraction_error;
mod generation_error;
mod index_error;
mod retrieval_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use extraction_error::ExtractionError;
pub use generation_error::GenerationError;
pub use index_error::IndexError;
pub use retrieval_error::RetrievalError;

/// Result alias used across the workspace.
pub type FinbriefResult<T> = Result<T, FinbriefError>;

/// Top-level error for every pipeline stage.
#[derive(Debug, thiserror::Error)]
pub enum FinbriefError {
    #[error("extraction error: {0}")]
    ExtractionError(#[from] ExtractionError),

    #[error("no usable content after {stage}")]
    EmptyContent { stage: String },

    #[error("index error: {0}")]
    IndexError(#[from] IndexError),

    #[error("retrieval error: {0}")]
    RetrievalError(#[from] RetrievalError),

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("generation error: {0}")]
    GenerationError(#[from] GenerationError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
