//! End-to-end runs over the annual report excerpt with a stub generator.

use std::cell::RefCell;

use finbrief_cli::{output, Pipeline};
use finbrief_core::config::FinbriefConfig;
use finbrief_core::traits::ISummaryGenerator;
use finbrief_core::FinbriefResult;
use test_fixtures::{load_text, ANNUAL_REPORT_EXCERPT};

/// Echoes a fixed summary and records the passages it was given.
#[derive(Default)]
struct RecordingGenerator {
    seen: RefCell<Vec<String>>,
}

impl ISummaryGenerator for RecordingGenerator {
    fn generate(&self, passages: &[String]) -> FinbriefResult<String> {
        self.seen.borrow_mut().extend(passages.iter().cloned());
        Ok("🎯 KEY RESULTS (TOP 5)\n• Revenue: € 23,683 million (+11%)".to_string())
    }

    fn model(&self) -> &str {
        "stub"
    }
}

/// TF-IDF embeddings keep these runs deterministic and offline.
fn offline_config() -> FinbriefConfig {
    let mut config = FinbriefConfig::default();
    config.embedding.provider = "tfidf".to_string();
    config
}

#[test]
fn excerpt_runs_end_to_end() {
    let pipeline = Pipeline::new(offline_config()).unwrap();
    let generator = RecordingGenerator::default();

    let raw = load_text(ANNUAL_REPORT_EXCERPT);
    let run = pipeline.run_text(&raw, Some(&generator)).unwrap();

    assert_eq!(run.metrics.raw_chars, raw.chars().count());
    assert!(run.metrics.cleaned_chars < run.metrics.raw_chars);
    assert_eq!(run.metrics.passages, 1);
    assert_eq!(run.metrics.retrieved, 1);
    assert_eq!(run.metrics.executive, 1);
    assert!(!run.metrics.fallback_used);
    assert_eq!(run.provider, "tfidf");

    // Table row, euro amount with decimals and percentages; header cleaned away.
    assert_eq!(run.selection.top_scores, vec![100]);
    assert_eq!(*generator.seen.borrow(), run.selection.passages);
    assert!(run.summary.unwrap().starts_with("🎯 KEY RESULTS"));
}

#[test]
fn small_chunks_respect_retrieval_and_selection_limits() {
    let mut config = offline_config();
    config.ingest.chunk_size = 200;
    config.ingest.chunk_overlap = 50;
    config.retrieval.top_k = 4;
    config.executive.max_chunks = 2;
    let pipeline = Pipeline::new(config).unwrap();

    let prepared = pipeline.prepare_text(&load_text(ANNUAL_REPORT_EXCERPT)).unwrap();
    let passages = prepared.passages.len();
    assert!(passages > 1);
    assert!(prepared.passages.iter().all(|p| p.char_len() <= 200));

    let run = pipeline.run(prepared, None).unwrap();
    assert_eq!(run.metrics.passages, passages);
    assert_eq!(run.metrics.retrieved, 4.min(passages));
    assert!(run.metrics.executive <= 2);
    assert!(run.summary.is_none());
    for selected in &run.selection.passages {
        assert!(run.retrieved.contains(selected));
    }
}

#[test]
fn nothing_qualifying_falls_back_to_leading_retrieved() {
    let mut config = offline_config();
    config.executive.min_score = 1_000;
    let pipeline = Pipeline::new(config).unwrap();

    let run = pipeline
        .run_text(&load_text(ANNUAL_REPORT_EXCERPT), None)
        .unwrap();
    assert!(run.metrics.fallback_used);
    assert_eq!(run.selection.passages, run.retrieved);
}

#[test]
fn summary_artifact_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("executive_summary.txt");

    output::write_summary(&path, "• Net income: € 824 million").unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        format!(
            "{rule}\nFINANCIAL EXECUTIVE SUMMARY\n{rule}\n\n• Net income: € 824 million",
            rule = "=".repeat(60)
        )
    );
}

#[test]
fn missing_pdf_is_an_extraction_error() {
    let pipeline = Pipeline::new(offline_config()).unwrap();
    assert!(pipeline
        .run_document("/nonexistent/annual-report.pdf", None)
        .is_err());
}
