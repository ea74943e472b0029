//! Console report lines printed by the `finbrief` binary.

use finbrief_core::constants::BANNER_WIDTH;
use finbrief_core::models::RunMetrics;
use finbrief_retrieval::ExecutiveSelection;

use crate::pipeline::PreparedText;

/// A title between two `=` rules.
pub fn banner(title: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("{rule}\n{title}\n{rule}")
}

/// Extraction, cleaning and chunking counters, plus a warning when the
/// cleaned text is shorter than `short_text_chars`.
pub fn ingest_summary(prepared: &PreparedText, short_text_chars: usize) -> String {
    let mut lines = Vec::new();
    if let Some(pages) = prepared.pages {
        lines.push(format!("[INFO] Pages with text: {pages}"));
    }
    lines.push(format!(
        "[INFO] Extracted text: {} characters",
        thousands(prepared.raw_chars)
    ));
    lines.push(format!(
        "[INFO] Cleaned text: {} characters",
        thousands(prepared.cleaned_chars)
    ));
    lines.push(format!(
        "[INFO] Reduction: {} characters removed",
        thousands(prepared.raw_chars.saturating_sub(prepared.cleaned_chars))
    ));
    if prepared.is_short(short_text_chars) {
        lines.push("[WARNING] Cleaned text is very short. Verify cleaning process.".to_string());
    }
    lines.push(format!(
        "[INFO] Text split into {} chunks.",
        prepared.passages.len()
    ));
    lines.join("\n")
}

/// Executive filter diagnostics: best raw scores and how many passages survived.
pub fn filter_diagnostics(selection: &ExecutiveSelection, retrieved: usize) -> String {
    let scores = selection
        .top_scores
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let mut lines = vec![format!(
        "[FILTER] Top {} scores: [{scores}]",
        selection.top_scores.len()
    )];
    if selection.fallback_used {
        lines.push(format!(
            "[FILTER] No chunk reached the threshold, using the first {} retrieved",
            selection.passages.len()
        ));
    } else {
        lines.push(format!(
            "[FILTER] {}/{retrieved} chunks selected",
            selection.passages.len()
        ));
    }
    lines.join("\n")
}

/// The closing PROCESS METRICS block.
pub fn process_metrics(metrics: &RunMetrics) -> String {
    let lines = [
        banner("PROCESS METRICS"),
        format!("• Original text: {} characters", thousands(metrics.raw_chars)),
        format!("• Cleaned text: {} characters", thousands(metrics.cleaned_chars)),
        format!("• Generated chunks: {}", metrics.passages),
        format!("• Retrieved financial chunks: {}", metrics.retrieved),
        format!("• Executive chunks: {}", metrics.executive),
        format!("• Data reduction: {:.1}%", metrics.reduction_percent()),
    ];
    lines.join("\n")
}

/// `1234567` → `1,234,567`.
pub fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
