// src/models.rs

/// One ranked entry: a normalized word and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}
