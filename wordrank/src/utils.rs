// src/utils.rs
use crate::models::WordCount;

/// Renders ranked entries as plain text, one line per entry. With
/// `show_numbers` each line is `word count`, otherwise just `word`.
#[must_use]
pub fn plain_report(entries: &[WordCount], show_numbers: bool) -> String {
    let mut output = String::new();
    for entry in entries {
        if show_numbers {
            output.push_str(&format!("{} {}\n", entry.word, entry.count));
        } else {
            output.push_str(&entry.word);
            output.push('\n');
        }
    }
    output
}
