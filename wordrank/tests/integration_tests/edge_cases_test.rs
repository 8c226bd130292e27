// tests/integration_tests/edge_cases_test.rs
use super::common::{create_test_file, report_lines};
use anyhow::Result;
use std::collections::HashSet;
use tempfile::TempDir;
use wordrank::{plain_report, report_file};

#[test]
fn test_empty_input_produces_empty_output() -> Result<()> {
    let dir = TempDir::new()?;
    let path = create_test_file(&dir, "empty.txt", "")?;

    let output = report_lines(&path, &HashSet::new(), true)?;
    assert_eq!(output, "");

    // Above-average mode on an empty file must not divide by zero.
    let entries = report_file(&path, &HashSet::new(), true)?;
    assert!(entries.is_empty());

    Ok(())
}

#[test]
fn test_all_punctuation_words_collapse_to_one_empty_token() -> Result<()> {
    let dir = TempDir::new()?;
    let path = create_test_file(&dir, "noise.txt", "123 ?! ... 456")?;

    let entries = report_file(&path, &HashSet::new(), false)?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].word, "");
    assert_eq!(entries[0].count, 4);

    Ok(())
}

#[test]
fn test_empty_token_can_be_ignored() -> Result<()> {
    let dir = TempDir::new()?;
    let path = create_test_file(&dir, "noise.txt", "123 word 456")?;

    let ignore: HashSet<String> = [String::new()].into_iter().collect();
    let output = report_lines(&path, &ignore, true)?;
    assert_eq!(output, "word 1\n");

    Ok(())
}

#[test]
fn test_whitespace_only_input() -> Result<()> {
    let dir = TempDir::new()?;
    let path = create_test_file(&dir, "blank.txt", "  \n\t \n")?;

    let entries = report_file(&path, &HashSet::new(), true)?;
    assert_eq!(plain_report(&entries, true), "");

    Ok(())
}

#[test]
fn test_hyphenated_words_keep_internal_hyphen() -> Result<()> {
    let dir = TempDir::new()?;
    let path = create_test_file(&dir, "hyphens.txt", "well-known --well-known-- plain")?;

    let output = report_lines(&path, &HashSet::new(), true)?;
    assert_eq!(output, "well-known 2\nplain 1\n");

    Ok(())
}
