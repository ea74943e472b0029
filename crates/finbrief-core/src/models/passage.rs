use serde::{Deserialize, Serialize};

/// A bounded slice of cleaned document text, the unit of retrieval and ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    /// Position in document order.
    pub id: usize,
    pub text: String,
}

impl Passage {
    pub fn new(id: usize, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    /// Length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A passage paired with a heuristic integer score from one ranking pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredPassage {
    pub score: i32,
    pub text: String,
}

impl ScoredPassage {
    pub fn new(score: i32, text: impl Into<String>) -> Self {
        Self {
            score,
            text: text.into(),
        }
    }
}
