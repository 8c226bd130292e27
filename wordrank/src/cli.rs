// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::count::FrequencyTable;
use crate::core::filter;
use crate::core::ignore::{append_ignore_words, load_ignore_words};
use crate::core::learn::{review_candidates, ConfirmWord, StdinConfirm};
use crate::core::tokenize::tokenize;
use crate::models::WordCount;
use crate::utils::plain_report;

/// Default ignore file appended to by learning sessions when no `--ignore`
/// path is given.
const DEFAULT_IGNORE_FILE: &str = "ignore.txt";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input text file(s) to analyze
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// File with whitespace-separated words to ignore
    #[arg(short, long)]
    pub ignore: Option<PathBuf>,

    /// Interactively learn words to ignore, reviewing N candidates per file
    #[arg(short, long)]
    pub learn: Option<usize>,

    /// Show number of word occurrences
    #[arg(short = 'n', long)]
    pub show_numbers: bool,

    /// Only report words at or above the average word length
    #[arg(short, long)]
    pub above_average: bool,

    /// Render results as HTML with search-engine links
    #[arg(short = 'H', long)]
    pub html: bool,

    /// Site configuration file for HTML mode
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,
}

/// Reads one input file and runs it through the counting and filtering
/// pipeline, returning the surviving ranked entries.
///
/// # Errors
///
/// Returns an error if the input file is missing or unreadable.
pub fn report_file(
    path: &Path,
    ignore: &HashSet<String>,
    above_average: bool,
) -> Result<Vec<WordCount>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    let table = FrequencyTable::from_tokens(tokenize(&content));
    log::debug!(
        "{}: {} tokens, {} distinct",
        path.display(),
        table.total(),
        table.distinct()
    );
    Ok(filter::apply(table.ranked(), ignore, above_average))
}

pub fn run(args: Args) -> Result<()> {
    let ignore_words = match args.ignore.as_deref() {
        Some(path) => load_ignore_words(path)?,
        None => Vec::new(),
    };

    if let Some(limit) = args.learn {
        let mut confirm = StdinConfirm;
        return run_learn(&args, ignore_words, limit, &mut confirm);
    }

    let ignore_set: HashSet<String> = ignore_words.into_iter().collect();

    if args.html {
        return run_html(&args, &ignore_set);
    }

    let mut output = String::new();
    for path in &args.files {
        let entries = report_file(path, &ignore_set, args.above_average)?;
        output.push_str(&plain_report(&entries, args.show_numbers));
    }
    print!("{output}");

    Ok(())
}

/// Learning mode: review top-ranked candidates per file, threading the
/// growing ignore list across files, then append the full accumulated list
/// (initial words included) to the ignore file once.
fn run_learn(
    args: &Args,
    mut ignore: Vec<String>,
    limit: usize,
    confirm: &mut dyn ConfirmWord,
) -> Result<()> {
    for path in &args.files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        let table = FrequencyTable::from_tokens(tokenize(&content));
        review_candidates(&table.ranked(), &mut ignore, limit, args.above_average, confirm)?;
    }

    let store = args
        .ignore
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_IGNORE_FILE));
    append_ignore_words(&store, &ignore)?;
    log::info!("appended {} ignore words to {}", ignore.len(), store.display());
    Ok(())
}

#[cfg(feature = "html")]
fn run_html(args: &Args, ignore_set: &HashSet<String>) -> Result<()> {
    let config = wordrank_html::load_config(&args.config)?;
    for path in &args.files {
        let entries = report_file(path, ignore_set, args.above_average)?;
        let pairs: Vec<(String, u64)> = entries
            .into_iter()
            .map(|entry| (entry.word, entry.count))
            .collect();
        let mut page = wordrank_html::page_header(path);
        page.push('\n');
        page.push_str(&wordrank_html::render_page(&config, &pairs));
        println!("{page}");
    }
    Ok(())
}

#[cfg(not(feature = "html"))]
fn run_html(_args: &Args, _ignore_set: &HashSet<String>) -> Result<()> {
    anyhow::bail!("this build of wordrank does not include HTML support")
}
