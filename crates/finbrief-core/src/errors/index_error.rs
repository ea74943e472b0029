/// Vector index errors.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("cannot build index: {reason}")]
    Construction { reason: String },

    #[error("index query failed: {reason}")]
    Query { reason: String },
}
