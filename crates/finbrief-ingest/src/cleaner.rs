//! Boilerplate line removal.
//!
//! Rules, applied in order to every trimmed line:
//! 1. drop repeated report headers (compared after whitespace normalization)
//! 2. drop repeated section banners (exact match)
//! 3. drop runs of whitespace-separated single digits (page-number artifacts)
//! 4. keep only lines longer than `min_line_chars` characters

use std::sync::LazyLock;

use finbrief_core::config::IngestConfig;
use regex::Regex;

/// A line made only of single digits separated by whitespace, e.g. `1 2 3`.
static DIGIT_RUN_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d\s+)+\d$").ok());

/// Document-specific boilerplate strings.
#[derive(Debug, Clone)]
pub struct BoilerplatePatterns {
    /// Headers, stored whitespace-normalized.
    headers: Vec<String>,
    banners: Vec<String>,
    min_line_chars: usize,
}

impl BoilerplatePatterns {
    pub fn new(headers: &[String], banners: &[String], min_line_chars: usize) -> Self {
        Self {
            headers: headers.iter().map(|h| normalize_whitespace(h)).collect(),
            banners: banners.iter().map(|b| b.trim().to_string()).collect(),
            min_line_chars,
        }
    }

    pub fn from_config(config: &IngestConfig) -> Self {
        Self::new(
            &config.header_lines,
            &config.banner_lines,
            config.min_line_chars,
        )
    }

    fn is_header(&self, line: &str) -> bool {
        if self.headers.is_empty() {
            return false;
        }
        let normalized = normalize_whitespace(line);
        self.headers.iter().any(|h| *h == normalized)
    }

    fn is_banner(&self, line: &str) -> bool {
        self.banners.iter().any(|b| b == line)
    }
}

impl Default for BoilerplatePatterns {
    fn default() -> Self {
        Self::from_config(&IngestConfig::default())
    }
}

/// Stateless boilerplate cleaner.
#[derive(Debug, Clone, Default)]
pub struct TextCleaner {
    patterns: BoilerplatePatterns,
}

impl TextCleaner {
    pub fn new(patterns: BoilerplatePatterns) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &BoilerplatePatterns {
        &self.patterns
    }

    /// Remove boilerplate lines and rejoin the survivors with `\n`.
    pub fn clean(&self, raw: &str) -> String {
        raw.lines()
            .map(str::trim)
            .filter(|line| self.keep_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether a trimmed line survives cleaning.
    pub fn keep_line(&self, line: &str) -> bool {
        if self.patterns.is_header(line) || self.patterns.is_banner(line) {
            return false;
        }
        if DIGIT_RUN_RE.as_ref().is_some_and(|re| re.is_match(line)) {
            return false;
        }
        line.chars().count() > self.patterns.min_line_chars
    }
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
