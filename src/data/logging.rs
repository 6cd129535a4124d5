use anyhow::Context;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Installs the terminal logger. Can only succeed once per process.
pub fn init(level: LevelFilter) -> anyhow::Result<()> {
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
        .context("Failed to initialize the logger")
}
