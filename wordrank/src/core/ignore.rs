// src/core/ignore.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::io::{self, Write as _};
use std::path::Path;

/// Loads ignore words from a flat whitespace-separated file.
///
/// An absent file is not an error: it degrades to an empty list so that a
/// fresh setup works without creating the file first.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_ignore_words(path: &Path) -> Result<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content.split_whitespace().map(str::to_owned).collect()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e).with_context(|| format!("Failed to read ignore file: {}", path.display())),
    }
}

/// Appends a word list to the ignore file, space-separated with a trailing
/// space. The file is opened in append mode; prior content is preserved.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or written.
pub fn append_ignore_words(path: &Path, words: &[String]) -> Result<()> {
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open ignore file for append: {}", path.display()))?;
    write!(file, "{} ", words.join(" "))
        .with_context(|| format!("Failed to write ignore file: {}", path.display()))?;
    Ok(())
}
