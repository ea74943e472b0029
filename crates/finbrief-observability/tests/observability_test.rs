use finbrief_core::config::ObservabilityConfig;
use finbrief_observability::{events, init_tracing, init_tracing_with_filter};

#[test]
fn init_is_safe_to_call_twice() {
    init_tracing(&ObservabilityConfig::default());
    init_tracing_with_filter("debug");
    init_tracing(&ObservabilityConfig {
        log_level: "warn".into(),
        json: true,
    });
}

#[test]
fn events_emit_without_panicking() {
    init_tracing_with_filter("trace");
    events::text_extracted("report.pdf", 3, 12_000);
    events::text_cleaned(12_000, 9_500);
    events::passages_chunked(4, 4000, 500);
    events::index_built(4, 384, "tfidf-fallback");
    events::provider_fallback("fastembed", "tfidf-fallback", "feature disabled");
    events::candidates_rescored(8, 4, Some(12));
    events::candidates_rescored(0, 0, None);
    events::executive_filter_applied(&[100, 50, 20], 3, 4);
    events::executive_fallback(20, 3);
    events::generation_model_fallback("primary", "secondary", "decommissioned");
    events::summary_generated("llama-3.3-70b-versatile", 3, 1_800);
}
