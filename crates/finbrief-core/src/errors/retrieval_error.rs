/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("retrieval attempted before the vector index was built")]
    UninitializedIndex,
}
