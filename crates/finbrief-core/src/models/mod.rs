mod passage;
mod run_metrics;

pub use passage::{Passage, ScoredPassage};
pub use run_metrics::RunMetrics;
