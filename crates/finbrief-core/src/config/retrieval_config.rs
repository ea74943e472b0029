use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of passages returned by the financial retriever.
    pub top_k: usize,
    /// Semantic candidates fetched per returned passage.
    pub over_fetch_factor: usize,
    /// Financial query issued against the index.
    pub query: String,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            over_fetch_factor: defaults::DEFAULT_OVER_FETCH_FACTOR,
            query: defaults::DEFAULT_FINANCIAL_QUERY.to_string(),
        }
    }
}
