use serde::{Deserialize, Serialize};

use super::defaults;

/// Executive filter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutiveConfig {
    /// Passages scoring below this are dropped.
    pub min_score: i32,
    /// Upper bound on selected passages.
    pub max_chunks: usize,
    /// Passages taken from the unfiltered input when nothing qualifies.
    pub fallback_count: usize,
    /// Regex for a year-over-year financial table row.
    pub table_pattern: String,
    /// Header fragment that marks a passage as carrying leftover boilerplate.
    pub header_penalty: String,
}

impl Default for ExecutiveConfig {
    fn default() -> Self {
        Self {
            min_score: defaults::DEFAULT_MIN_EXECUTIVE_SCORE,
            max_chunks: defaults::DEFAULT_MAX_EXECUTIVE_CHUNKS,
            fallback_count: defaults::DEFAULT_FALLBACK_COUNT,
            table_pattern: defaults::DEFAULT_TABLE_PATTERN.to_string(),
            header_penalty: defaults::DEFAULT_HEADER_PENALTY.to_string(),
        }
    }
}
