use finbrief_core::config::FinbriefConfig;
use finbrief_core::models::RunMetrics;
use proptest::prelude::*;

proptest! {
    #[test]
    fn reduction_percent_stays_within_bounds(raw in 0usize..2_000_000, kept in 0usize..2_000_000) {
        let mut metrics = RunMetrics::new();
        metrics.raw_chars = raw;
        metrics.cleaned_chars = kept.min(raw);

        let pct = metrics.reduction_percent();
        prop_assert!((0.0..=100.0).contains(&pct));
        prop_assert_eq!(metrics.chars_removed(), raw - metrics.cleaned_chars);
    }

    #[test]
    fn overlap_up_to_chunk_size_is_valid(size in 1usize..10_000, overlap_seed in 0usize..10_000) {
        let mut config = FinbriefConfig::default();
        config.ingest.chunk_size = size;
        config.ingest.chunk_overlap = overlap_seed % (size + 1);
        prop_assert!(config.validate().is_ok());

        config.ingest.chunk_overlap = size + 1 + overlap_seed;
        prop_assert!(config.validate().is_err());
    }
}
