use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;

use crate::config::Config;

/// Install the global logger. The TUI owns the terminal, so in that mode
/// records are appended to the log file instead of stderr.
pub(crate) fn init(config: &Config) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(&config.log_filter);

    if config.is_tui() {
        let file = open_log_file(&config.log_path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    } else {
        builder.target(env_logger::Target::Stderr);
    }

    builder
        .try_init()
        .context("Failed to initialise logger")?;
    Ok(())
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}
