//! # finbrief-core
//!
//! Foundation crate for the finbrief pipeline.
//! Defines the passage model, traits at the component seams, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::FinbriefConfig;
pub use errors::{FinbriefError, FinbriefResult};
pub use models::{Passage, RunMetrics, ScoredPassage};
