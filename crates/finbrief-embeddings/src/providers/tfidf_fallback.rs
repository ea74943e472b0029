//! Hashed term-frequency embedding provider.
//!
//! Terms are hashed into fixed-dimension buckets with FNV-1a and weighted by
//! term frequency times a length-based IDF approximation. No model files and
//! no network, so it is always available and fully deterministic.

use std::collections::HashMap;

use finbrief_core::errors::FinbriefResult;
use finbrief_core::traits::IEmbeddingProvider;
use rayon::prelude::*;

pub struct TfIdfFallback {
    dimensions: usize,
}

impl TfIdfFallback {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// Hash a term into a bucket index using FNV-1a.
    fn hash_term(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    /// Lowercase alphanumeric terms of two or more characters. Currency signs
    /// and `%` are kept as their own terms since they carry meaning in reports.
    fn tokenize(text: &str) -> Vec<String> {
        let mut terms = Vec::new();
        for raw in text.split(|c: char| !c.is_alphanumeric()) {
            if raw.chars().count() >= 2 {
                terms.push(raw.to_lowercase());
            }
        }
        for c in text.chars().filter(|c| matches!(c, '€' | '$' | '£' | '%')) {
            terms.push(c.to_string());
        }
        terms
    }

    fn tf_vector(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        let mut vec = vec![0.0f32; self.dimensions];
        if tokens.is_empty() {
            return vec;
        }

        let mut tf: HashMap<&str, f32> = HashMap::new();
        for tok in &tokens {
            *tf.entry(tok.as_str()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        for (term, count) in &tf {
            let freq = count / total;
            // Short terms are mostly stopwords.
            let idf = 1.0 + (term.chars().count() as f32).ln();
            vec[Self::hash_term(term, self.dimensions)] += freq * idf;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for TfIdfFallback {
    fn embed(&self, text: &str) -> FinbriefResult<Vec<f32>> {
        Ok(self.tf_vector(text))
    }

    fn embed_batch(&self, texts: &[String]) -> FinbriefResult<Vec<Vec<f32>>> {
        Ok(texts.par_iter().map(|t| self.tf_vector(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "tfidf"
    }

    fn is_available(&self) -> bool {
        true
    }
}
