// src/core/filter.rs
use std::collections::HashSet;

use crate::models::WordCount;

/// Average length over a set of distinct words. Defined as 0.0 for an empty
/// population so that empty inputs never divide by zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_word_length<'a, I>(words: I) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    let mut total_len: usize = 0;
    let mut population: usize = 0;
    for word in words {
        total_len += word.len();
        population += 1;
    }
    if population == 0 {
        return 0.0;
    }
    total_len as f64 / population as f64
}

/// Filters a ranked sequence in rank order: entries whose token is in the
/// ignore set are dropped; with `above_average` enabled, entries strictly
/// shorter than the average length of the distinct tokens in the incoming
/// sequence are also dropped (equal-to-average entries survive).
///
/// The average is computed once, over the distinct tokens of the ranked
/// input, before any ignore filtering. It is not weighted by frequency.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn apply(
    ranked: Vec<WordCount>,
    ignore: &HashSet<String>,
    above_average: bool,
) -> Vec<WordCount> {
    let average = if above_average {
        average_word_length(ranked.iter().map(|e| e.word.as_str()))
    } else {
        0.0
    };

    ranked
        .into_iter()
        .filter(|entry| !ignore.contains(&entry.word))
        .filter(|entry| !above_average || entry.word.len() as f64 >= average)
        .collect()
}
