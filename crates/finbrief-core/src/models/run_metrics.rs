use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Counters collected over one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetrics {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    /// Characters in the extracted text.
    pub raw_chars: usize,
    /// Characters left after cleaning.
    pub cleaned_chars: usize,
    /// Passages produced by the chunker.
    pub passages: usize,
    /// Passages returned by the financial retriever.
    pub retrieved: usize,
    /// Passages handed to the summary generator.
    pub executive: usize,
    /// Whether the executive filter fell back to the unfiltered head.
    pub fallback_used: bool,
}

impl RunMetrics {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            raw_chars: 0,
            cleaned_chars: 0,
            passages: 0,
            retrieved: 0,
            executive: 0,
            fallback_used: false,
        }
    }

    /// Characters removed by cleaning.
    pub fn chars_removed(&self) -> usize {
        self.raw_chars.saturating_sub(self.cleaned_chars)
    }

    /// Share of the raw text removed by cleaning, in percent. Zero for empty input.
    pub fn reduction_percent(&self) -> f64 {
        if self.raw_chars == 0 {
            return 0.0;
        }
        self.chars_removed() as f64 / self.raw_chars as f64 * 100.0
    }
}

impl Default for RunMetrics {
    fn default() -> Self {
        Self::new()
    }
}
