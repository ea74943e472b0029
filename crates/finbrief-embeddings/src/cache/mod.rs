//! Embedding cache keyed by passage content.
//!
//! Annual reports repeat passages verbatim (disclaimers, segment boilerplate,
//! recurring table captions). Each distinct text is embedded once per run, and
//! a query that repeats an earlier query or a passage is served from here.

pub mod embedding_cache;

pub use embedding_cache::{CacheStats, EmbeddingCache};

/// Content key for a text.
pub fn content_key(text: &str) -> blake3::Hash {
    blake3::hash(text.as_bytes())
}
