// src/core/learn.rs
use anyhow::{Context as _, Result};
use std::io::{self, Write as _};

use crate::core::filter::average_word_length;
use crate::models::WordCount;

/// Yes/no confirmation for a single candidate word. Production sessions
/// prompt on the terminal; tests script the answers.
pub trait ConfirmWord {
    /// Returns `Ok(true)` when the operator wants the word ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the response cannot be read.
    fn confirm(&mut self, word: &str) -> Result<bool>;
}

/// Terminal-backed confirmation: prints the prompt to stdout and reads one
/// line from stdin. Only `y`/`Y` accepts; anything else, including an empty
/// line, declines.
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl ConfirmWord for StdinConfirm {
    fn confirm(&mut self, word: &str) -> Result<bool> {
        println!("Ignore word: {word}? (y/n, default no)");
        io::stdout().flush().context("Failed to flush prompt")?;
        let mut line = String::new();
        io::stdin()
            .read_line(&mut line)
            .context("Failed to read response")?;
        Ok(line.trim().eq_ignore_ascii_case("y"))
    }
}

/// Walks ranked tokens in rank order and grows the ignore accumulator by
/// operator confirmation. Exactly `limit` candidates are presented and
/// answered; silent skips do not count toward the limit.
///
/// Skipped without prompting:
/// - words already in the accumulator;
/// - with `above_average` set, words strictly shorter than the average
///   length of the distinct ranked tokens (same population as the
///   reporting filter).
///
/// Returns the number of candidates reviewed.
///
/// # Errors
///
/// Returns an error if a confirmation cannot be obtained.
#[allow(clippy::cast_precision_loss)]
pub fn review_candidates(
    ranked: &[WordCount],
    ignore: &mut Vec<String>,
    limit: usize,
    above_average: bool,
    confirm: &mut dyn ConfirmWord,
) -> Result<usize> {
    let average = if above_average {
        average_word_length(ranked.iter().map(|e| e.word.as_str()))
    } else {
        0.0
    };

    let mut reviewed = 0;
    for entry in ranked {
        if reviewed >= limit {
            break;
        }
        if ignore.contains(&entry.word) {
            continue;
        }
        if above_average && (entry.word.len() as f64) < average {
            continue;
        }
        if confirm.confirm(&entry.word)? {
            ignore.push(entry.word.clone());
        }
        reviewed += 1;
    }

    log::debug!("reviewed {reviewed} candidates, ignore list now {} words", ignore.len());
    Ok(reviewed)
}
