//! The summary artifact written at the end of a run.

use std::fs;
use std::path::Path;

use finbrief_core::constants::{BANNER_WIDTH, SUMMARY_TITLE};
use finbrief_core::errors::FinbriefResult;
use tracing::info;

/// Rule, title, rule, blank line, then the summary verbatim.
pub fn render_artifact(summary: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("{rule}\n{SUMMARY_TITLE}\n{rule}\n\n{summary}")
}

/// Write the artifact to `path` as UTF-8, replacing any existing file.
pub fn write_summary(path: impl AsRef<Path>, summary: &str) -> FinbriefResult<()> {
    let path = path.as_ref();
    fs::write(path, render_artifact(summary))?;
    info!(path = %path.display(), "summary saved");
    Ok(())
}
