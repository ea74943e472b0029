use finbrief_ingest::{RecursiveChunker, TextCleaner};
use proptest::prelude::*;

/// Longest `k` such that the last `k` chars of `a` equal the first `k` chars of `b`.
fn shared_boundary(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    (1..=a.len().min(b.len()))
        .rev()
        .find(|&k| a[a.len() - k..] == b[..k])
        .unwrap_or(0)
}

proptest! {
    #[test]
    fn cleaning_is_idempotent(s in "[ -~\n]{0,400}") {
        let cleaner = TextCleaner::default();
        let once = cleaner.clean(&s);
        prop_assert_eq!(cleaner.clean(&once), once);
    }

    #[test]
    fn cleaned_lines_exceed_minimum(s in "[ -~\n]{0,400}") {
        let cleaned = TextCleaner::default().clean(&s);
        for line in cleaned.lines() {
            prop_assert!(line.chars().count() > 20);
        }
    }

    #[test]
    fn passages_never_exceed_chunk_size(
        s in "[a-z \n]{0,600}",
        size in 1usize..120,
        overlap_pct in 0usize..=100,
    ) {
        let overlap = size * overlap_pct / 100;
        let chunker = RecursiveChunker::new(size, overlap).unwrap();
        for passage in chunker.split(&s) {
            prop_assert!(passage.char_len() <= size, "{} > {}", passage.char_len(), size);
            prop_assert!(!passage.text.is_empty());
            prop_assert_eq!(passage.text.trim(), passage.text.as_str());
            prop_assert!(s.contains(&passage.text));
        }
    }

    #[test]
    fn consecutive_passages_share_at_most_overlap(
        words in 1usize..200,
        size in 20usize..100,
        overlap_pct in 0usize..=60,
    ) {
        // Fixed-width unique tokens so any shared boundary is a real overlap.
        let text = (0..words).map(|i| format!("w{i:04}")).collect::<Vec<_>>().join(" ");
        let overlap = size * overlap_pct / 100;
        let passages = RecursiveChunker::new(size, overlap).unwrap().split(&text);
        for pair in passages.windows(2) {
            let shared = shared_boundary(&pair[0].text, &pair[1].text);
            prop_assert!(shared <= overlap, "shared {} > overlap {}", shared, overlap);
        }
    }

    #[test]
    fn chunking_is_deterministic(s in "[a-z \n]{0,300}", size in 5usize..60) {
        let chunker = RecursiveChunker::new(size, size / 4).unwrap();
        prop_assert_eq!(chunker.split(&s), chunker.split(&s));
    }
}
