//! Configuration for every pipeline stage.
//!
//! Loaded from TOML with per-section defaults; any section or field may be omitted.
//!
//! # Examples
//!
//! ```
//! use finbrief_core::config::FinbriefConfig;
//!
//! let config = FinbriefConfig::from_toml("[ingest]\nchunk_size = 2000").unwrap();
//! assert_eq!(config.ingest.chunk_size, 2000);
//! assert_eq!(config.ingest.chunk_overlap, 500);
//! ```

pub mod defaults;
pub mod embedding_config;
pub mod executive_config;
pub mod generation_config;
pub mod ingest_config;
pub mod observability_config;
pub mod output_config;
pub mod retrieval_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use embedding_config::EmbeddingConfig;
pub use executive_config::ExecutiveConfig;
pub use generation_config::GenerationConfig;
pub use ingest_config::IngestConfig;
pub use observability_config::ObservabilityConfig;
pub use output_config::OutputConfig;
pub use retrieval_config::RetrievalConfig;

use crate::errors::{ConfigError, FinbriefResult};

/// Top-level configuration, one field per section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinbriefConfig {
    pub ingest: IngestConfig,
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
    pub executive: ExecutiveConfig,
    pub generation: GenerationConfig,
    pub output: OutputConfig,
    pub observability: ObservabilityConfig,
}

impl FinbriefConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(source: &str) -> FinbriefResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> FinbriefResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&source)
    }

    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> FinbriefResult<()> {
        if self.ingest.chunk_size == 0 {
            return Err(invalid("ingest.chunk_size", "must be greater than zero"));
        }
        if self.ingest.chunk_overlap > self.ingest.chunk_size {
            return Err(invalid(
                "ingest.chunk_overlap",
                format!(
                    "overlap {} is larger than chunk size {}",
                    self.ingest.chunk_overlap, self.ingest.chunk_size
                ),
            ));
        }
        if self.embedding.dimensions == 0 {
            return Err(invalid("embedding.dimensions", "must be greater than zero"));
        }
        if self.embedding.batch_size == 0 {
            return Err(invalid("embedding.batch_size", "must be greater than zero"));
        }
        if self.retrieval.top_k == 0 {
            return Err(invalid("retrieval.top_k", "must be greater than zero"));
        }
        if self.retrieval.query.trim().is_empty() {
            return Err(invalid("retrieval.query", "must not be blank"));
        }
        if self.retrieval.over_fetch_factor == 0 {
            return Err(invalid(
                "retrieval.over_fetch_factor",
                "must be greater than zero",
            ));
        }
        if self.executive.max_chunks == 0 {
            return Err(invalid("executive.max_chunks", "must be greater than zero"));
        }
        if let Err(e) = regex::Regex::new(&self.executive.table_pattern) {
            return Err(invalid("executive.table_pattern", e.to_string()));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> crate::errors::FinbriefError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason: reason.into(),
    }
    .into()
}
