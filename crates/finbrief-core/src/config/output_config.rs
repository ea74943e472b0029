use serde::{Deserialize, Serialize};

use super::defaults;

/// Output artifact configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Summary file path. Overwritten on every run.
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}
