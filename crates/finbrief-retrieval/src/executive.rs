//! Executive-value filter: the stricter second ranking pass.
//!
//! Scores reward year-over-year table rows, euro amounts with decimals, and
//! percentages, and penalize passages that still carry the report header.
//! Passages below the threshold are dropped and the rest capped. When nothing
//! survives, the leading passages of the input are used unfiltered.

use std::sync::LazyLock;

use finbrief_core::config::{defaults, ExecutiveConfig};
use finbrief_core::constants::EXECUTIVE_DIAGNOSTIC_SCORES;
use finbrief_core::errors::{ConfigError, FinbriefResult};
use finbrief_core::models::ScoredPassage;
use finbrief_observability::events;
use regex::Regex;
use serde::Serialize;

use crate::scoring::pattern_matches;

static EURO_AMOUNT_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"€\s*\d+[.,]\d+").ok());
static DEFAULT_TABLE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(defaults::DEFAULT_TABLE_PATTERN).ok());
static PERCENTAGE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\d+\.?\d*\s*%").ok());

const TABLE_POINTS: i32 = 50;
const EURO_POINTS: i32 = 30;
const PERCENT_POINTS: i32 = 20;
const HEADER_PENALTY_POINTS: i32 = 40;

/// Result of [`ExecutiveFilter::select`].
#[derive(Debug, Clone, Serialize)]
pub struct ExecutiveSelection {
    /// Passages to hand to the summary generator, in rank order.
    pub passages: Vec<String>,
    /// Highest raw scores over all input passages, best first.
    pub top_scores: Vec<i32>,
    /// Whether no passage qualified and the leading inputs were used instead.
    pub fallback_used: bool,
}

#[derive(Debug, Clone)]
pub struct ExecutiveFilter {
    table_re: Option<Regex>,
    header_penalty: String,
    fallback_count: usize,
}

impl ExecutiveFilter {
    pub fn new(config: &ExecutiveConfig) -> FinbriefResult<Self> {
        let table_re = Regex::new(&config.table_pattern).map_err(|e| ConfigError::Invalid {
            field: "executive.table_pattern".to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            table_re: Some(table_re),
            header_penalty: config.header_penalty.clone(),
            fallback_count: config.fallback_count,
        })
    }

    /// Executive-value score of one passage. May be negative.
    pub fn executive_score(&self, text: &str) -> i32 {
        let mut score = 0;
        if self.table_re.as_ref().is_some_and(|re| re.is_match(text)) {
            score += TABLE_POINTS;
        }
        if pattern_matches(&EURO_AMOUNT_RE, text) {
            score += EURO_POINTS;
        }
        if pattern_matches(&PERCENTAGE_RE, text) {
            score += PERCENT_POINTS;
        }
        if !self.header_penalty.is_empty() && text.contains(&self.header_penalty) {
            score -= HEADER_PENALTY_POINTS;
        }
        score
    }

    /// Score all passages, keep those at or above `min_score`, best first, at
    /// most `max_chunks`.
    pub fn filter_executive(
        &self,
        passages: &[String],
        min_score: i32,
        max_chunks: usize,
    ) -> Vec<ScoredPassage> {
        self.rank_and_filter(passages, min_score, max_chunks).1
    }

    /// [`filter_executive`](Self::filter_executive), falling back to the first
    /// `fallback_count` input passages in input order when nothing qualifies.
    pub fn select(
        &self,
        passages: &[String],
        min_score: i32,
        max_chunks: usize,
    ) -> ExecutiveSelection {
        let (top_scores, selected) = self.rank_and_filter(passages, min_score, max_chunks);

        if selected.is_empty() {
            events::executive_fallback(min_score, self.fallback_count);
            return ExecutiveSelection {
                passages: passages.iter().take(self.fallback_count).cloned().collect(),
                top_scores,
                fallback_used: true,
            };
        }

        ExecutiveSelection {
            passages: selected.into_iter().map(|s| s.text).collect(),
            top_scores,
            fallback_used: false,
        }
    }

    /// The highest raw scores, and the thresholded, capped passages best first.
    fn rank_and_filter(
        &self,
        passages: &[String],
        min_score: i32,
        max_chunks: usize,
    ) -> (Vec<i32>, Vec<ScoredPassage>) {
        let mut ranked: Vec<ScoredPassage> = passages
            .iter()
            .map(|p| ScoredPassage::new(self.executive_score(p), p.clone()))
            .collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        let top: Vec<i32> = ranked
            .iter()
            .take(EXECUTIVE_DIAGNOSTIC_SCORES)
            .map(|s| s.score)
            .collect();

        let selected: Vec<ScoredPassage> = ranked
            .into_iter()
            .filter(|s| s.score >= min_score)
            .take(max_chunks)
            .collect();
        events::executive_filter_applied(&top, selected.len(), passages.len());

        (top, selected)
    }
}

impl Default for ExecutiveFilter {
    fn default() -> Self {
        Self {
            table_re: DEFAULT_TABLE_RE.clone(),
            header_penalty: defaults::DEFAULT_HEADER_PENALTY.to_string(),
            fallback_count: defaults::DEFAULT_FALLBACK_COUNT,
        }
    }
}
