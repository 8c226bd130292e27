// src/main.rs
use anyhow::Result;
use clap::Parser;

use wordrank::cli::{run, Args};
use wordrank::logging;

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();
    run(args)
}
