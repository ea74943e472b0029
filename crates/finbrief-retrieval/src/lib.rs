//! # finbrief-retrieval
//!
//! Two ranking passes over passages, each with its own heuristic score.
//!
//! ## Architecture
//!
//! ```text
//! FinancialRetriever
//! ├── IVectorIndex::query (over-fetch × top_k semantic candidates)
//! └── scoring::financial_score (keywords + number/currency/percent patterns)
//!     ↓ top_k passage texts
//! ExecutiveFilter
//! ├── executive_score (table rows, € amounts, percentages, header penalty)
//! ├── threshold + cap
//! └── fallback to the leading passages when nothing qualifies
//! ```

pub mod executive;
pub mod retriever;
pub mod scoring;

pub use executive::{ExecutiveFilter, ExecutiveSelection};
pub use retriever::FinancialRetriever;
pub use scoring::{financial_score, FINANCIAL_KEYWORDS};
