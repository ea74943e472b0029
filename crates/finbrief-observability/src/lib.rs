//! # finbrief-observability
//!
//! Structured tracing for the pipeline: subscriber setup and one event helper per
//! stage so field names stay consistent across crates.

pub mod tracing_setup;

pub use tracing_setup::events;
pub use tracing_setup::{init_tracing, init_tracing_with_filter, LOG_ENV_VAR};
