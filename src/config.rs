use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const SEED_ENV: &str = "LEDGERVIEW_SEED";
pub(crate) const LOG_ENV: &str = "LEDGERVIEW_LOG";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    /// CSV seed file. `None` means the built-in sample ledger.
    pub(crate) seed_path: Option<PathBuf>,
    pub(crate) log_path: PathBuf,
    pub(crate) log_filter: String,
    /// Arguments left after global flags; empty launches the TUI.
    pub(crate) command: Vec<String>,
}

impl Config {
    /// Resolve from the command line, then the environment, then defaults.
    pub(crate) fn resolve(args: &[String]) -> Result<Self> {
        let data_dir = get_data_dir()?;
        Self::from_parts(
            args,
            std::env::var(SEED_ENV).ok(),
            std::env::var(LOG_ENV).ok(),
            data_dir,
        )
    }

    fn from_parts(
        args: &[String],
        env_seed: Option<String>,
        env_log: Option<String>,
        data_dir: PathBuf,
    ) -> Result<Self> {
        let mut seed_path = env_seed.filter(|s| !s.trim().is_empty()).map(PathBuf::from);
        let mut command = Vec::new();

        // Skip the program name
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            if arg == "--seed" {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--seed requires a file path"))?;
                seed_path = Some(PathBuf::from(crate::run::shellexpand(path)));
            } else {
                command.push(arg.clone());
            }
        }

        Ok(Self {
            seed_path,
            log_path: data_dir.join("ledgerview.log"),
            log_filter: env_log.unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            command,
        })
    }

    pub(crate) fn is_tui(&self) -> bool {
        self.command.is_empty()
    }
}

fn get_data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "ledgerview", "LedgerView")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.to_path_buf())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
