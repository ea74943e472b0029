//! Recursive separator splitter with bounded overlap.
//!
//! Splits on the highest-priority separator present in the text, merges the
//! pieces greedily up to `chunk_size` characters, and recurses with the next
//! separator into any piece that is still too long. Separators stay attached to
//! the start of the piece that follows them, so merged pieces reproduce the
//! original text exactly before trimming.

use std::collections::VecDeque;

use finbrief_core::config::IngestConfig;
use finbrief_core::constants::CHUNK_SEPARATORS;
use finbrief_core::errors::{ConfigError, FinbriefResult};
use finbrief_core::models::Passage;
use finbrief_observability::events;

/// Splits cleaned text into overlapping passages of bounded length.
#[derive(Debug, Clone)]
pub struct RecursiveChunker {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl RecursiveChunker {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> FinbriefResult<Self> {
        if chunk_size == 0 {
            return Err(ConfigError::Invalid {
                field: "chunk_size".to_string(),
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }
        if chunk_overlap > chunk_size {
            return Err(ConfigError::Invalid {
                field: "chunk_overlap".to_string(),
                reason: format!("overlap {chunk_overlap} is larger than chunk size {chunk_size}"),
            }
            .into());
        }
        Ok(Self {
            chunk_size,
            chunk_overlap,
        })
    }

    pub fn from_config(config: &IngestConfig) -> FinbriefResult<Self> {
        Self::new(config.chunk_size, config.chunk_overlap)
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// Split `text` into passages numbered in document order.
    pub fn split(&self, text: &str) -> Vec<Passage> {
        if text.is_empty() {
            return Vec::new();
        }

        let passages: Vec<Passage> = self
            .split_recursive(text, &CHUNK_SEPARATORS)
            .into_iter()
            .enumerate()
            .map(|(id, chunk)| Passage::new(id, chunk))
            .collect();

        events::passages_chunked(passages.len(), self.chunk_size, self.chunk_overlap);
        passages
    }

    fn split_recursive(&self, text: &str, separators: &[&str]) -> Vec<String> {
        // Pick the first separator that occurs; the empty separator always does.
        let mut separator = separators.last().copied().unwrap_or("");
        let mut lower: &[&str] = &[];
        for (i, candidate) in separators.iter().enumerate() {
            if candidate.is_empty() {
                separator = candidate;
                break;
            }
            if text.contains(candidate) {
                separator = candidate;
                lower = &separators[i + 1..];
                break;
            }
        }

        let mut chunks = Vec::new();
        let mut fitting: Vec<&str> = Vec::new();
        for piece in split_keeping_separator(text, separator) {
            if char_len(piece) < self.chunk_size {
                fitting.push(piece);
                continue;
            }
            if !fitting.is_empty() {
                chunks.extend(self.merge(&fitting));
                fitting.clear();
            }
            if lower.is_empty() {
                chunks.extend(join_trimmed(&[piece]));
            } else {
                chunks.extend(self.split_recursive(piece, lower));
            }
        }
        if !fitting.is_empty() {
            chunks.extend(self.merge(&fitting));
        }
        chunks
    }

    /// Greedily merge pieces into chunks, carrying at most `chunk_overlap`
    /// characters of tail into the next chunk.
    fn merge(&self, pieces: &[&str]) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut window: VecDeque<&str> = VecDeque::new();
        let mut total = 0usize;

        for piece in pieces {
            let len = char_len(piece);
            if total + len > self.chunk_size && !window.is_empty() {
                chunks.extend(join_trimmed(window.make_contiguous()));
                while total > self.chunk_overlap || (total + len > self.chunk_size && total > 0) {
                    match window.pop_front() {
                        Some(front) => total -= char_len(front),
                        None => break,
                    }
                }
            }
            window.push_back(piece);
            total += len;
        }

        chunks.extend(join_trimmed(window.make_contiguous()));
        chunks
    }
}

impl Default for RecursiveChunker {
    fn default() -> Self {
        let config = IngestConfig::default();
        Self {
            chunk_size: config.chunk_size,
            chunk_overlap: config.chunk_overlap,
        }
    }
}

/// Split on `separator`, keeping each separator at the start of the following
/// piece. Empty pieces are dropped; the empty separator yields characters.
fn split_keeping_separator<'t>(text: &'t str, separator: &str) -> Vec<&'t str> {
    if separator.is_empty() {
        return text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect();
    }

    let mut pieces = Vec::new();
    let mut start = 0;
    for (idx, _) in text.match_indices(separator) {
        if idx > start {
            pieces.push(&text[start..idx]);
        }
        start = idx;
    }
    if start < text.len() {
        pieces.push(&text[start..]);
    }
    pieces
}

fn join_trimmed(pieces: &[&str]) -> Option<String> {
    let joined = pieces.concat();
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
