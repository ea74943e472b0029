//! # finbrief-ingest
//!
//! Turns a paginated PDF into an ordered passage sequence.
//!
//! ## Architecture
//!
//! ```text
//! PdfExtractor   (lopdf, per-page text, "\n\n" after every page)
//!     ↓ RawText
//! TextCleaner    (header / banner / digit-run / short-line removal)
//!     ↓ CleanedText
//! RecursiveChunker ("\n\n" → "\n" → " " → "" with overlap)
//!     ↓ Vec<Passage>
//! ```

pub mod chunker;
pub mod cleaner;
pub mod extractor;

pub use chunker::RecursiveChunker;
pub use cleaner::{BoilerplatePatterns, TextCleaner};
pub use extractor::{assemble_pages, ExtractedDocument, PdfExtractor};
