//! EmbeddingEngine: the run's single provider behind a content cache.

use std::collections::HashMap;

use finbrief_core::config::EmbeddingConfig;
use finbrief_core::errors::{EmbeddingError, FinbriefResult};
use finbrief_core::traits::IEmbeddingProvider;
use finbrief_observability::events;

use crate::cache::{content_key, CacheStats, EmbeddingCache};
use crate::providers;

/// Caching wrapper around one embedding provider.
///
/// Implements `IEmbeddingProvider` itself, so it can be handed to the index in
/// place of the raw provider.
pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    cache: EmbeddingCache,
}

impl EmbeddingEngine {
    /// Create the configured provider (with TF-IDF fallback) and an empty cache.
    pub fn new(config: &EmbeddingConfig) -> Self {
        Self::with_provider(providers::create_provider(config), config.l1_cache_size)
    }

    pub fn with_provider(provider: Box<dyn IEmbeddingProvider>, cache_size: u64) -> Self {
        Self {
            provider,
            cache: EmbeddingCache::new(cache_size),
        }
    }

    /// Name of the provider actually in use.
    pub fn active_provider(&self) -> &str {
        self.provider.name()
    }

    /// Number of cached embeddings.
    pub fn cached_entries(&self) -> u64 {
        self.cache.len()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> FinbriefResult<Vec<f32>> {
        let key = content_key(text);
        if let Some(hit) = self.cache.lookup(&key) {
            return Ok(hit);
        }
        let embedding = self.provider.embed(text)?;
        self.cache.store(key, embedding.clone());
        Ok(embedding)
    }

    /// Embeds each distinct uncached text once, even when it repeats within
    /// `texts`.
    fn embed_batch(&self, texts: &[String]) -> FinbriefResult<Vec<Vec<f32>>> {
        let keys: Vec<blake3::Hash> = texts.iter().map(|t| content_key(t)).collect();
        let mut results: Vec<Option<Vec<f32>>> = Vec::with_capacity(texts.len());

        // First position of every distinct missing text, in order.
        let mut pending: HashMap<blake3::Hash, usize> = HashMap::new();
        let mut to_embed: Vec<String> = Vec::new();
        let mut duplicates = 0usize;
        for (text, key) in texts.iter().zip(&keys) {
            if pending.contains_key(key) {
                duplicates += 1;
                results.push(None);
                continue;
            }
            let hit = self.cache.lookup(key);
            if hit.is_none() {
                pending.insert(*key, to_embed.len());
                to_embed.push(text.clone());
            }
            results.push(hit);
        }

        if !to_embed.is_empty() {
            let embedded = self.provider.embed_batch(&to_embed)?;
            if embedded.len() != to_embed.len() {
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!(
                        "provider returned {} embeddings for {} texts",
                        embedded.len(),
                        to_embed.len()
                    ),
                }
                .into());
            }
            for (key, slot) in keys.iter().zip(results.iter_mut()) {
                if slot.is_none() {
                    if let Some(&pos) = pending.get(key) {
                        *slot = Some(embedded[pos].clone());
                    }
                }
            }
            for (key, pos) in pending {
                self.cache.store(key, embedded[pos].clone());
            }
        }

        let stats = self.cache.stats();
        events::embedding_cache_stats(stats.hits, stats.misses, duplicates);
        Ok(results.into_iter().flatten().collect())
    }

    fn dimensions(&self) -> usize {
        self.provider.dimensions()
    }

    fn name(&self) -> &str {
        self.provider.name()
    }

    fn is_available(&self) -> bool {
        self.provider.is_available()
    }
}
