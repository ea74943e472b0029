/// finbrief version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Separator placed after every extracted page.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Separator between passages in the generation context.
pub const CONTEXT_SEPARATOR: &str = "\n\n---\n\n";

/// Chunker separators, highest priority first. The empty separator splits into characters.
pub const CHUNK_SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

/// Title written into the output artifact banner.
pub const SUMMARY_TITLE: &str = "FINANCIAL EXECUTIVE SUMMARY";

/// Width of the `=` rule around banners.
pub const BANNER_WIDTH: usize = 60;

/// Number of raw executive scores reported in diagnostics.
pub const EXECUTIVE_DIAGNOSTIC_SCORES: usize = 3;
