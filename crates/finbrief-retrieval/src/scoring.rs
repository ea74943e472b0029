//! Financial relevance score used by the retriever's re-rank.

use std::sync::LazyLock;

use regex::Regex;

/// Terms counted once each when found as a case-insensitive substring.
pub const FINANCIAL_KEYWORDS: [&str; 21] = [
    "revenue",
    "income",
    "profit",
    "ebitda",
    "margin",
    "cash flow",
    "balance sheet",
    "financial statement",
    "euro",
    "million",
    "billion",
    "%",
    "growth",
    "sales",
    "net income",
    "operating",
    "segment",
    "quarter",
    "annual",
    "forecast",
    "guidance",
];

static DECIMAL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\d+[.,]\d+").ok());
static CURRENCY_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[€$£]").ok());
static PERCENT_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\d+\s*%").ok());

const DECIMAL_POINTS: i32 = 2;
const CURRENCY_POINTS: i32 = 3;
const PERCENT_POINTS: i32 = 2;

/// Keyword and pattern score of a passage. Pure and non-negative.
pub fn financial_score(text: &str) -> i32 {
    let lower = text.to_lowercase();
    let mut score = FINANCIAL_KEYWORDS
        .iter()
        .filter(|kw| lower.contains(**kw))
        .count() as i32;

    if pattern_matches(&DECIMAL_RE, text) {
        score += DECIMAL_POINTS;
    }
    if pattern_matches(&CURRENCY_RE, text) {
        score += CURRENCY_POINTS;
    }
    if pattern_matches(&PERCENT_RE, text) {
        score += PERCENT_POINTS;
    }
    score
}

/// A pattern that failed to compile never matches.
pub(crate) fn pattern_matches(regex: &LazyLock<Option<Regex>>, text: &str) -> bool {
    regex.as_ref().is_some_and(|re| re.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_patterns_compile() {
        assert!(DECIMAL_RE.is_some());
        assert!(CURRENCY_RE.is_some());
        assert!(PERCENT_RE.is_some());
    }

    #[test]
    fn worked_example_scores_ten() {
        // revenue, million, % (3) + decimal (2) + € (3) + percent (2)
        assert_eq!(
            financial_score("Revenue grew 12.5% to €1,234.5 million in 2024 2023 2022 2021"),
            10
        );
    }

    #[test]
    fn plain_prose_scores_zero() {
        assert_eq!(financial_score("The weather was pleasant all week long."), 0);
    }

    #[test]
    fn keywords_are_case_insensitive_and_counted_once() {
        assert_eq!(financial_score("SALES sales Sales"), 1);
        // "net income" also contains "income".
        assert_eq!(financial_score("net income"), 2);
    }

    #[test]
    fn each_pattern_adds_its_points() {
        assert_eq!(financial_score("1,5"), 2);
        assert_eq!(financial_score("$"), 3);
        assert_eq!(financial_score("7 %"), 2 + 1);
        assert_eq!(financial_score("£"), 3);
    }
}
