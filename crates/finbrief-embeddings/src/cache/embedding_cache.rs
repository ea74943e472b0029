//! Bounded run-scoped embedding cache.

use std::sync::atomic::{AtomicU64, Ordering};

use moka::sync::Cache;
use serde::Serialize;

/// Lookup counters for one cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    /// Fraction of lookups served from the cache, `0.0` before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Embedding vectors keyed by the blake3 hash of the embedded text.
///
/// Entries leave only through capacity eviction since the cache lives for
/// a single run.
pub struct EmbeddingCache {
    vectors: Cache<blake3::Hash, Vec<f32>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl EmbeddingCache {
    pub fn new(max_entries: u64) -> Self {
        Self {
            vectors: Cache::builder().max_capacity(max_entries).build(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up `key`, counting the hit or miss.
    pub fn lookup(&self, key: &blake3::Hash) -> Option<Vec<f32>> {
        let found = self.vectors.get(key);
        let counter = if found.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    pub fn store(&self, key: blake3::Hash, vector: Vec<f32>) {
        self.vectors.insert(key, vector);
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Approximate number of cached vectors.
    pub fn len(&self) -> u64 {
        self.vectors.run_pending_tasks();
        self.vectors.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
