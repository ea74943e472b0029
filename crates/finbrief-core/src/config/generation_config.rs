use serde::{Deserialize, Serialize};

use super::defaults;

/// Summary generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// OpenAI-compatible chat completions endpoint.
    pub endpoint: String,
    /// Primary chat model.
    pub model: String,
    /// Model used when the primary is reported unavailable.
    pub fallback_model: Option<String>,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum completion tokens.
    pub max_tokens: usize,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::DEFAULT_GENERATION_ENDPOINT.to_string(),
            model: defaults::DEFAULT_GENERATION_MODEL.to_string(),
            fallback_model: Some(defaults::DEFAULT_FALLBACK_MODEL.to_string()),
            temperature: defaults::DEFAULT_TEMPERATURE,
            max_tokens: defaults::DEFAULT_MAX_TOKENS,
            api_key_env: defaults::DEFAULT_GENERATION_API_KEY_ENV.to_string(),
            timeout_secs: defaults::DEFAULT_TIMEOUT_SECS,
        }
    }
}
