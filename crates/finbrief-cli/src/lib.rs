//! # finbrief-cli
//!
//! Sequential orchestration of the summary pipeline plus the console report
//! and output artifact. The `finbrief` binary is a thin clap wrapper.
//!
//! ## Architecture
//!
//! ```text
//! Pipeline
//! ├── prepare   PdfExtractor → TextCleaner → RecursiveChunker
//! ├── select    FlatVectorIndex → FinancialRetriever → ExecutiveFilter
//! └── generate  ISummaryGenerator (skipped on dry runs)
//! report        console banners, filter diagnostics, PROCESS METRICS
//! output        summary artifact file
//! ```

pub mod output;
pub mod pipeline;
pub mod report;

pub use pipeline::{Pipeline, PipelineRun, PreparedText};
