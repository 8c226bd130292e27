// src/core/count.rs
use std::collections::HashMap;

use crate::models::WordCount;

/// Occurrence counts for a token sequence, remembering first-seen order so
/// that ranking ties resolve by first appearance in the input.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    order: Vec<String>,
}

impl FrequencyTable {
    /// Builds a table by tallying every token in the sequence, including
    /// tokens that normalized down to the empty string.
    #[must_use]
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts: HashMap<String, u64> = HashMap::new();
        let mut order = Vec::new();

        for token in tokens {
            if let Some(count) = counts.get_mut(&token) {
                *count += 1;
            } else {
                counts.insert(token.clone(), 1);
                order.push(token);
            }
        }

        Self { counts, order }
    }

    /// Total number of tokens tallied (the sum of all counts).
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// Returns (token, count) pairs sorted by descending count. Ties keep
    /// first-appearance order (stable sort over insertion order).
    #[must_use]
    pub fn ranked(&self) -> Vec<WordCount> {
        let mut entries: Vec<WordCount> = self
            .order
            .iter()
            .map(|word| WordCount {
                word: word.clone(),
                count: self.counts.get(word).copied().unwrap_or(0),
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }

    /// Ranked entries truncated to the top `n`; unlimited when `n` is `None`.
    #[must_use]
    pub fn top(&self, n: Option<usize>) -> Vec<WordCount> {
        let mut entries = self.ranked();
        if let Some(limit) = n {
            entries.truncate(limit);
        }
        entries
    }
}
