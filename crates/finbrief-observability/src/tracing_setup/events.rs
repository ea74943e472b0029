//! Structured log events for key pipeline operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a finished document extraction.
pub fn text_extracted(path: &str, pages: usize, chars: usize) {
    tracing::info!(
        event = "text_extracted",
        path = %path,
        pages = pages,
        chars = chars,
        "document text extracted"
    );
}

/// Log the outcome of boilerplate cleaning.
pub fn text_cleaned(raw_chars: usize, cleaned_chars: usize) {
    tracing::info!(
        event = "text_cleaned",
        raw_chars = raw_chars,
        cleaned_chars = cleaned_chars,
        removed = raw_chars.saturating_sub(cleaned_chars),
        "text cleaned"
    );
}

/// Log a chunking pass.
pub fn passages_chunked(passages: usize, chunk_size: usize, chunk_overlap: usize) {
    tracing::info!(
        event = "passages_chunked",
        passages = passages,
        chunk_size = chunk_size,
        chunk_overlap = chunk_overlap,
        "text split into passages"
    );
}

/// Log a completed index build.
pub fn index_built(passages: usize, dimensions: usize, provider: &str) {
    tracing::info!(
        event = "index_built",
        passages = passages,
        dimensions = dimensions,
        provider = %provider,
        "vector index built"
    );
}

/// Log embedding cache effectiveness after a batch.
pub fn embedding_cache_stats(hits: u64, misses: u64, batch_duplicates: usize) {
    tracing::debug!(
        event = "embedding_cache_stats",
        hits = hits,
        misses = misses,
        batch_duplicates = batch_duplicates,
        "embedding cache consulted"
    );
}

/// Log an embedding provider substitution.
pub fn provider_fallback(requested: &str, fallback: &str, reason: &str) {
    tracing::warn!(
        event = "provider_fallback",
        requested = %requested,
        fallback = %fallback,
        reason = %reason,
        "embedding provider unavailable, using fallback"
    );
}

/// Log the keyword re-rank of semantic candidates.
pub fn candidates_rescored(candidates: usize, returned: usize, best_score: Option<i32>) {
    tracing::info!(
        event = "candidates_rescored",
        candidates = candidates,
        returned = returned,
        best_score = ?best_score,
        "financial candidates re-ranked"
    );
}

/// Log the executive filter's top raw scores and selection count.
pub fn executive_filter_applied(top_scores: &[i32], selected: usize, total: usize) {
    tracing::info!(
        event = "executive_filter_applied",
        top_scores = ?top_scores,
        selected = selected,
        total = total,
        "executive filter applied"
    );
}

/// Log that no passage reached the executive threshold.
pub fn executive_fallback(min_score: i32, fallback_count: usize) {
    tracing::warn!(
        event = "executive_fallback",
        min_score = min_score,
        fallback_count = fallback_count,
        "executive filter too strict, using leading passages"
    );
}

/// Log a switch to the fallback generation model.
pub fn generation_model_fallback(primary: &str, fallback: &str, reason: &str) {
    tracing::warn!(
        event = "generation_model_fallback",
        primary = %primary,
        fallback = %fallback,
        reason = %reason,
        "primary model unavailable, trying fallback model"
    );
}

/// Log a generated summary.
pub fn summary_generated(model: &str, passages: usize, chars: usize) {
    tracing::info!(
        event = "summary_generated",
        model = %model,
        passages = passages,
        chars = chars,
        "executive summary generated"
    );
}
