//! Test fixture loader for finbrief sample reports and golden scoring datasets.
//!
//! Fixture files live next to this crate's manifest and are shared by the tests
//! and benches of every crate in the workspace.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Raw extracted text of a short annual-report excerpt, boilerplate included.
pub const ANNUAL_REPORT_EXCERPT: &str = "reports/annual_report_excerpt.txt";

/// Golden financial and executive scores.
pub const GOLDEN_SCORES: &str = "scoring/golden_scores.json";

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a text fixture verbatim.
pub fn load_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// One entry of the golden scoring dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenPassage {
    pub name: String,
    pub text: String,
    pub financial_score: i32,
    pub executive_score: i32,
}

#[derive(Debug, Deserialize)]
struct GoldenScores {
    passages: Vec<GoldenPassage>,
}

/// Load the golden scoring dataset.
pub fn golden_passages() -> Vec<GoldenPassage> {
    load_fixture::<GoldenScores>(GOLDEN_SCORES).passages
}

/// The annual-report excerpt repeated `times`, as a larger benchmark input.
pub fn report_corpus(times: usize) -> String {
    let excerpt = load_text(ANNUAL_REPORT_EXCERPT);
    let mut corpus = String::with_capacity(excerpt.len() * times);
    for _ in 0..times {
        corpus.push_str(&excerpt);
        corpus.push('\n');
    }
    corpus
}
