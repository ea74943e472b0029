//! Exact nearest-neighbor index over passage embeddings.
//!
//! Every query is compared against every stored vector. Report-sized inputs
//! produce a few hundred passages, so a flat scan is exact and fast enough.

use std::cmp::Ordering;

use finbrief_core::errors::{EmbeddingError, FinbriefResult, IndexError};
use finbrief_core::models::Passage;
use finbrief_core::traits::{IEmbeddingProvider, IVectorIndex};
use finbrief_observability::events;
use tracing::debug;

/// Immutable passage index. Built once, queried any number of times.
pub struct FlatVectorIndex {
    provider: Box<dyn IEmbeddingProvider>,
    passages: Vec<Passage>,
    vectors: Vec<Vec<f32>>,
}

impl FlatVectorIndex {
    /// Embed `passages` in batches of `batch_size` and index them in order.
    pub fn build(
        provider: Box<dyn IEmbeddingProvider>,
        passages: Vec<Passage>,
        batch_size: usize,
    ) -> FinbriefResult<Self> {
        if passages.is_empty() {
            return Err(IndexError::Construction {
                reason: "no passages to index".to_string(),
            }
            .into());
        }

        let dims = provider.dimensions();
        let mut vectors = Vec::with_capacity(passages.len());
        for batch in passages.chunks(batch_size.max(1)) {
            let texts: Vec<String> = batch.iter().map(|p| p.text.clone()).collect();
            let embedded = provider.embed_batch(&texts)?;
            if embedded.len() != texts.len() {
                return Err(IndexError::Construction {
                    reason: format!(
                        "provider returned {} embeddings for {} passages",
                        embedded.len(),
                        texts.len()
                    ),
                }
                .into());
            }
            for vector in embedded {
                check_dimensions(dims, &vector)?;
                vectors.push(vector);
            }
            debug!(embedded = vectors.len(), total = passages.len(), "embedding passages");
        }

        events::index_built(passages.len(), dims, provider.name());
        Ok(Self {
            provider,
            passages,
            vectors,
        })
    }

    /// Indexed passages in document order.
    pub fn passages(&self) -> &[Passage] {
        &self.passages
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }
}

impl IVectorIndex for FlatVectorIndex {
    fn query(&self, text: &str, k: usize) -> FinbriefResult<Vec<(Passage, f32)>> {
        if k == 0 {
            return Ok(Vec::new());
        }
        if text.trim().is_empty() {
            return Err(IndexError::Query {
                reason: "query text is empty".to_string(),
            }
            .into());
        }
        let query = self.provider.embed(text)?;
        check_dimensions(self.dimensions(), &query)?;

        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(i, v)| (i, cosine_similarity(&query, v)))
            .collect();

        // Stable: equal similarities keep insertion order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored.truncate(k);

        Ok(scored
            .into_iter()
            .map(|(i, sim)| (self.passages[i].clone(), sim))
            .collect())
    }

    fn len(&self) -> usize {
        self.passages.len()
    }

    fn dimensions(&self) -> usize {
        self.provider.dimensions()
    }
}

fn check_dimensions(expected: usize, vector: &[f32]) -> FinbriefResult<()> {
    if vector.len() != expected {
        return Err(EmbeddingError::DimensionMismatch {
            expected,
            actual: vector.len(),
        }
        .into());
    }
    Ok(())
}

/// Cosine similarity of two equal-length vectors. Zero if either has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom <= f32::EPSILON {
        return 0.0;
    }
    dot / denom
}
