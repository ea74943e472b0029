use serde::{Deserialize, Serialize};

use super::defaults;

/// Extraction, cleaning, and chunking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Maximum passage length in characters.
    pub chunk_size: usize,
    /// Maximum characters shared by consecutive passages.
    pub chunk_overlap: usize,
    /// Lines must be strictly longer than this to survive cleaning.
    pub min_line_chars: usize,
    /// Repeated report headers, compared after whitespace normalization.
    pub header_lines: Vec<String>,
    /// Repeated section banners, compared exactly.
    pub banner_lines: Vec<String>,
    /// Skip pages with no extractable text instead of failing.
    pub skip_blank_pages: bool,
    /// Cleaned text shorter than this triggers a warning.
    pub short_text_warning_chars: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            chunk_size: defaults::DEFAULT_CHUNK_SIZE,
            chunk_overlap: defaults::DEFAULT_CHUNK_OVERLAP,
            min_line_chars: defaults::DEFAULT_MIN_LINE_CHARS,
            header_lines: vec![defaults::DEFAULT_HEADER_LINE.to_string()],
            banner_lines: vec![defaults::DEFAULT_BANNER_LINE.to_string()],
            skip_blank_pages: defaults::DEFAULT_SKIP_BLANK_PAGES,
            short_text_warning_chars: defaults::DEFAULT_SHORT_TEXT_WARNING_CHARS,
        }
    }
}
