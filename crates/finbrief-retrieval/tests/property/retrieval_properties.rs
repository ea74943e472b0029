use finbrief_retrieval::{financial_score, ExecutiveFilter};
use proptest::prelude::*;

proptest! {
    #[test]
    fn financial_score_is_deterministic_and_non_negative(s in ".{0,200}") {
        let a = financial_score(&s);
        prop_assert_eq!(a, financial_score(&s));
        prop_assert!(a >= 0);
    }

    #[test]
    fn appending_text_never_lowers_financial_score(a in ".{0,120}", b in ".{0,120}") {
        let combined = format!("{a} {b}");
        prop_assert!(financial_score(&combined) >= financial_score(&a));
    }

    #[test]
    fn appending_text_never_lowers_executive_score_without_header(
        a in "[a-z0-9 %€.,]{0,80}",
        b in "[a-z0-9 %€.,]{0,80}",
    ) {
        let filter = ExecutiveFilter::default();
        let combined = format!("{a} {b}");
        prop_assert!(filter.executive_score(&combined) >= filter.executive_score(&a));
    }

    #[test]
    fn selection_respects_threshold_and_cap(
        passages in prop::collection::vec("[a-z0-9 %€.,]{0,60}", 0..15),
        min_score in -50i32..120,
        max_chunks in 1usize..8,
    ) {
        let filter = ExecutiveFilter::default();
        let kept = filter.filter_executive(&passages, min_score, max_chunks);
        prop_assert!(kept.len() <= max_chunks);
        prop_assert!(kept.iter().all(|s| s.score >= min_score));
        prop_assert!(kept.windows(2).all(|w| w[0].score >= w[1].score));

        let selection = filter.select(&passages, min_score, max_chunks);
        if selection.fallback_used {
            prop_assert!(kept.is_empty());
            let expected: Vec<String> = passages.iter().take(3).cloned().collect();
            prop_assert_eq!(selection.passages, expected);
        } else {
            prop_assert_eq!(selection.passages.len(), kept.len());
        }
    }
}
