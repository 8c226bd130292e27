// tests/integration_tests/report_test.rs
use super::common::{create_test_file, ignore_set, report_lines, write_ignore_file};
use anyhow::Result;
use std::collections::HashSet;
use tempfile::TempDir;
use wordrank::{load_ignore_words, plain_report, report_file};

#[test]
fn test_scenario_counts_and_ordering() -> Result<()> {
    let dir = TempDir::new()?;
    let path = create_test_file(&dir, "input.txt", "a a b b b c")?;

    let output = report_lines(&path, &HashSet::new(), true)?;
    assert_eq!(output, "b 3\na 2\nc 1\n");

    Ok(())
}

#[test]
fn test_scenario_ignore_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = create_test_file(&dir, "input.txt", "a a b b b c")?;
    let ignore_path = write_ignore_file(&dir, &["b"])?;

    let ignore: HashSet<String> = load_ignore_words(&ignore_path)?.into_iter().collect();

    let with_numbers = report_lines(&path, &ignore, true)?;
    assert_eq!(with_numbers, "a 2\nc 1\n");

    let without_numbers = report_lines(&path, &ignore, false)?;
    assert_eq!(without_numbers, "a\nc\n");

    Ok(())
}

#[test]
fn test_normalization_merges_word_forms() -> Result<()> {
    let dir = TempDir::new()?;
    let path = create_test_file(&dir, "input.txt", "Apple apple APPLE! -apple- pear")?;

    let output = report_lines(&path, &HashSet::new(), true)?;
    assert_eq!(output, "apple 4\npear 1\n");

    Ok(())
}

#[test]
fn test_above_average_report() -> Result<()> {
    let dir = TempDir::new()?;
    // Distinct tokens: longer (6), four (4), ab (2). Average 4.0; "four"
    // sits exactly on the average and must survive.
    let path = create_test_file(&dir, "input.txt", "longer longer four four ab")?;

    let entries = report_file(&path, &HashSet::new(), true)?;
    let output = plain_report(&entries, false);
    assert_eq!(output, "longer\nfour\n");

    Ok(())
}

#[test]
fn test_round_trip_to_empty_output() -> Result<()> {
    let dir = TempDir::new()?;
    let path = create_test_file(&dir, "input.txt", "sun moon sun star moon sun")?;

    let first = report_file(&path, &HashSet::new(), false)?;
    let survivors: Vec<&str> = first.iter().map(|e| e.word.as_str()).collect();
    let ignore = ignore_set(&survivors);

    let second = report_lines(&path, &ignore, true)?;
    assert_eq!(second, "", "Ignoring every survivor must empty the report");

    Ok(())
}

#[test]
fn test_missing_input_file_is_fatal() {
    let result = report_file(
        std::path::Path::new("/no/such/input.txt"),
        &HashSet::new(),
        false,
    );
    assert!(result.is_err());
}
