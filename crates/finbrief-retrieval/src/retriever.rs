//! Hybrid financial retrieval: semantic over-fetch, then keyword re-rank.

use finbrief_core::config::RetrievalConfig;
use finbrief_core::errors::{FinbriefResult, RetrievalError};
use finbrief_core::models::ScoredPassage;
use finbrief_core::traits::IVectorIndex;
use finbrief_observability::events;
use tracing::debug;

use crate::scoring::financial_score;

/// Re-ranks nearest-neighbor candidates by [`financial_score`].
pub struct FinancialRetriever<'a> {
    index: Option<&'a dyn IVectorIndex>,
    over_fetch_factor: usize,
}

impl<'a> FinancialRetriever<'a> {
    pub fn new(index: Option<&'a dyn IVectorIndex>, config: &RetrievalConfig) -> Self {
        Self {
            index,
            over_fetch_factor: config.over_fetch_factor,
        }
    }

    /// Every semantic candidate for `query`, scored and sorted best first.
    ///
    /// Fetches `over_fetch_factor × top_k` candidates. Equal scores keep the
    /// similarity order of the index.
    pub fn score_candidates(
        &self,
        query: &str,
        top_k: usize,
    ) -> FinbriefResult<Vec<ScoredPassage>> {
        let index = self.index.ok_or(RetrievalError::UninitializedIndex)?;
        let fetch = top_k.saturating_mul(self.over_fetch_factor);
        let candidates = index.query(query, fetch)?;
        debug!(requested = fetch, found = candidates.len(), "semantic candidates");

        let mut scored: Vec<ScoredPassage> = candidates
            .into_iter()
            .map(|(passage, _)| {
                ScoredPassage::new(financial_score(&passage.text), passage.text)
            })
            .collect();
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(scored)
    }

    /// The `top_k` most financially relevant passage texts for `query`.
    pub fn retrieve_financial(&self, query: &str, top_k: usize) -> FinbriefResult<Vec<String>> {
        let scored = self.score_candidates(query, top_k)?;
        let candidates = scored.len();
        let best = scored.first().map(|s| s.score);

        let texts: Vec<String> = scored.into_iter().take(top_k).map(|s| s.text).collect();
        events::candidates_rescored(candidates, texts.len(), best);
        Ok(texts)
    }
}
