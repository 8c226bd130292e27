// src/lib.rs
//
// HTML rendering for wordrank frequency reports. Consumes the filtered,
// ranked (word, count) pairs produced by the core pipeline and a JSON site
// configuration, and emits a self-contained HTML fragment: one search link
// per configured site plus a word cloud scaled by relative frequency.

use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Search-link template for one site. The `seperator` spelling is part of
/// the established config file format.
#[derive(Deserialize, Debug, Clone)]
pub struct SiteSearch {
    pub prefix: String,
    pub postfix: String,
    pub seperator: String,
    pub max_words: usize,
}

/// Site configuration: `words` caps how many ranked entries the page shows,
/// `sites` maps a display name to its search-link template. Sites render in
/// name order.
#[derive(Deserialize, Debug, Clone)]
pub struct HtmlConfig {
    pub words: usize,
    pub sites: BTreeMap<String, SiteSearch>,
}

/// Loads the site configuration from a JSON file.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or not valid JSON
/// for the expected shape.
pub fn load_config(path: &Path) -> Result<HtmlConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("HTML mode needs a config file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Malformed HTML config: {}", path.display()))
}

/// Builds the `<h1>` page title from an input file name: basename with any
/// `.txt` suffix removed, underscores turned into spaces, uppercased.
#[must_use]
pub fn page_header(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = name.trim_end_matches(".txt").replace('_', " ").to_uppercase();
    format!("<h1>{name}</h1>")
}

/// Renders ranked (word, count) pairs as an HTML fragment: a `<h2>` block of
/// search links, one inline word element per entry with a font size scaled
/// between 0.8em and 4.8em by count relative to the top word, and a closing
/// `<hr>`. Empty input renders the links and rule only.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn render_page(config: &HtmlConfig, entries: &[(String, u64)]) -> String {
    let shown = &entries[..entries.len().min(config.words)];
    let mut output = String::new();

    output.push_str("<h2>");
    for (site, search) in &config.sites {
        let keywords: Vec<&str> = shown
            .iter()
            .take(search.max_words)
            .map(|(word, _)| word.as_str())
            .collect();
        let query = format!(
            "{}{}{}",
            search.prefix,
            keywords.join(&search.seperator),
            search.postfix
        );
        output.push_str(&format!("<a href='{query}'>{site}</a>\n"));
    }
    output.push_str("</h2>");

    if let Some((_, top_count)) = shown.first() {
        let max_count = *top_count as f64;
        for (word, count) in shown {
            let size = *count as f64 / max_count * 4.0 + 0.8;
            output.push_str(&format!(
                "<p style='font-size:{size}em;display:inline-block;line-height:1.8em;margin:0;'>| {word} </p>\n"
            ));
        }
    }

    output.push_str("<hr>");
    output
}
