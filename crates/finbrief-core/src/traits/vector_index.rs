use crate::errors::FinbriefResult;
use crate::models::Passage;

/// Read-only nearest-neighbor lookup over embedded passages.
///
/// Implementations are built once from the full passage sequence and never
/// mutated afterwards, so `query` may be called any number of times.
pub trait IVectorIndex {
    /// Up to `k` passages most similar to `text`, most similar first.
    fn query(&self, text: &str, k: usize) -> FinbriefResult<Vec<(Passage, f32)>>;

    /// Number of indexed passages.
    fn len(&self) -> usize;

    /// Whether the index holds no passages.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dimensionality of the stored vectors.
    fn dimensions(&self) -> usize;
}
