use finbrief_core::models::Passage;
use finbrief_core::traits::{IEmbeddingProvider, IVectorIndex};
use finbrief_embeddings::{cosine_similarity, FlatVectorIndex, TfIdfFallback};
use proptest::prelude::*;

proptest! {
    #[test]
    fn tfidf_vectors_are_unit_or_zero(s in ".{0,200}") {
        let v = TfIdfFallback::new(64).embed(&s).unwrap();
        prop_assert_eq!(v.len(), 64);
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        prop_assert!(norm == 0.0 || (norm - 1.0).abs() < 1e-4, "norm = {}", norm);
    }

    #[test]
    fn cosine_is_symmetric_and_bounded(
        a in prop::collection::vec(-10.0f32..10.0, 8),
        b in prop::collection::vec(-10.0f32..10.0, 8),
    ) {
        let ab = cosine_similarity(&a, &b);
        let ba = cosine_similarity(&b, &a);
        prop_assert!((ab - ba).abs() < 1e-5);
        prop_assert!((-1.0001..=1.0001).contains(&ab));
    }

    #[test]
    fn query_returns_min_of_k_and_len_sorted(
        texts in prop::collection::vec("[a-z ]{1,40}", 1..20),
        k in 0usize..30,
    ) {
        let passages: Vec<Passage> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Passage::new(i, t.clone()))
            .collect();
        let n = passages.len();
        let index = FlatVectorIndex::build(Box::new(TfIdfFallback::new(32)), passages, 4).unwrap();
        let hits = index.query("revenue growth", k).unwrap();
        prop_assert_eq!(hits.len(), k.min(n));
        prop_assert!(hits.windows(2).all(|w| w[0].1 >= w[1].1));
    }
}
