//! Integration tests for cleaning and chunking a realistic report excerpt.

use finbrief_core::config::IngestConfig;
use finbrief_ingest::{BoilerplatePatterns, RecursiveChunker, TextCleaner};
use test_fixtures::{load_text, ANNUAL_REPORT_EXCERPT};

fn default_cleaner() -> TextCleaner {
    TextCleaner::new(BoilerplatePatterns::from_config(&IngestConfig::default()))
}

#[test]
fn excerpt_boilerplate_is_removed() {
    let raw = load_text(ANNUAL_REPORT_EXCERPT);
    let cleaned = default_cleaner().clean(&raw);
    let lines: Vec<&str> = cleaned.lines().collect();

    assert_eq!(lines.len(), 9, "unexpected cleaned lines: {lines:#?}");
    assert!(lines[0].starts_with("Group sales increased 11%"));
    assert!(lines[8].starts_with("Risks mentioned"));
    assert!(!cleaned.contains("GROUP MANAGEMENT REPORT"));
    assert!(!cleaned.contains("SUSTAINABILITY STATEMENT"));
    assert!(!cleaned.contains("Page 4"));
    assert!(!cleaned.contains("Short line"));
}

#[test]
fn excerpt_lines_are_trimmed_and_long_enough() {
    let raw = load_text(ANNUAL_REPORT_EXCERPT);
    let cleaned = default_cleaner().clean(&raw);
    for line in cleaned.lines() {
        assert_eq!(line, line.trim());
        assert!(line.chars().count() > 20, "short line kept: {line:?}");
    }
    assert!(cleaned.contains("Net income from continuing operations improved to € 824 million."));
}

#[test]
fn cleaning_twice_changes_nothing() {
    let raw = load_text(ANNUAL_REPORT_EXCERPT);
    let cleaner = default_cleaner();
    let once = cleaner.clean(&raw);
    assert_eq!(cleaner.clean(&once), once);
}

#[test]
fn three_short_paragraphs_stay_one_passage() {
    let text = "Group revenue increased in all reporting segments.\n\n\
                Operating margin improved by almost three percentage points.\n\n\
                The dividend proposal reflects the strong cash generation.";
    let chunker = RecursiveChunker::from_config(&IngestConfig::default()).unwrap();
    let passages = chunker.split(text);
    assert_eq!(passages.len(), 1);
    assert_eq!(passages[0].text, text);
}

#[test]
fn empty_text_gives_no_passages() {
    let chunker = RecursiveChunker::from_config(&IngestConfig::default()).unwrap();
    assert!(chunker.split("").is_empty());
}

#[test]
fn cleaned_excerpt_chunks_in_document_order() {
    let raw = load_text(ANNUAL_REPORT_EXCERPT);
    let cleaned = default_cleaner().clean(&raw);
    let chunker = RecursiveChunker::new(200, 50).unwrap();
    let passages = chunker.split(&cleaned);

    assert!(passages.len() > 1);
    for (i, passage) in passages.iter().enumerate() {
        assert_eq!(passage.id, i);
        assert!(passage.char_len() <= 200);
        assert!(cleaned.contains(&passage.text));
    }
    assert!(passages[0].text.starts_with("Group sales"));
    assert!(passages.last().unwrap().text.ends_with("Asia-Pacific."));
}

#[test]
fn invalid_chunk_settings_are_rejected() {
    let config = IngestConfig {
        chunk_size: 100,
        chunk_overlap: 200,
        ..Default::default()
    };
    let err = RecursiveChunker::from_config(&config).unwrap_err();
    assert!(err.to_string().contains("chunk_overlap"));
}
