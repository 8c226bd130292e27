// src/core/tokenize.rs

/// Normalizes a single word into a token: lowercase, strip every character
/// outside `[a-zA-Z-]`, then trim leading and trailing hyphens.
///
/// The result may be the empty string (e.g. for an all-numeric or
/// all-punctuation word). Callers count empty tokens like any other.
#[must_use]
pub fn normalize(word: &str) -> String {
    let stripped: String = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == '-')
        .collect();
    stripped.trim_matches('-').to_owned()
}

/// Splits raw text on whitespace and normalizes each word.
///
/// Pure function of the input text; reading the file is the caller's job.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(normalize).collect()
}
