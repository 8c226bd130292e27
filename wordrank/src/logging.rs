// src/logging.rs
use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode};

/// Initializes the terminal logger. Diagnostics go to stderr so they never
/// mix with report output or the interactive prompts on stdout.
pub fn init() {
    let _ = TermLogger::init(
        LevelFilter::Info,
        build_config(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Error)
        .build()
}
