// src/lib.rs
pub mod cli;
pub mod core;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::cli::{report_file, run, Args};
pub use crate::core::count::FrequencyTable;
pub use crate::core::filter::{apply as apply_filters, average_word_length};
pub use crate::core::ignore::{append_ignore_words, load_ignore_words};
pub use crate::core::learn::{review_candidates, ConfirmWord, StdinConfirm};
pub use crate::core::tokenize::{normalize, tokenize};
pub use crate::models::WordCount;
pub use crate::utils::plain_report;
