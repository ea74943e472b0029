//! # finbrief-embeddings
//!
//! Embedding generation and nearest-neighbor lookup over passages.
//! The provider is chosen once per run so passages and queries always share
//! one embedding space.
//!
//! ## Architecture
//!
//! ```text
//! FlatVectorIndex (exact cosine similarity, stable ties)
//! └── EmbeddingEngine
//!     ├── Provider (selected once by create_provider)
//!     │   ├── TfIdfFallback (always available, final fallback)
//!     │   ├── FastEmbedProvider (default, feature "local-model")
//!     │   └── ApiProvider (OpenAI-compatible /v1/embeddings)
//!     └── EmbeddingCache (moka, blake3 content keys, hit/miss counters)
//! ```

pub mod cache;
pub mod engine;
pub mod index;
pub mod providers;

pub use cache::{CacheStats, EmbeddingCache};
pub use engine::EmbeddingEngine;
pub use index::{cosine_similarity, FlatVectorIndex};
#[cfg(feature = "local-model")]
pub use providers::FastEmbedProvider;
pub use providers::{create_provider, ApiProvider, TfIdfFallback};
