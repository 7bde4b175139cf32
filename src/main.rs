mod config;
mod format;
mod input;
mod logging;
mod models;
mod projection;
mod run;
mod seed;
mod store;
mod ui;

use anyhow::{Context, Result};

use config::Config;
use store::TransactionStore;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = Config::resolve(&args)?;
    logging::init(&config)?;

    let mut store = load_store(&config)?;

    if config.is_tui() {
        run::as_tui(store)
    } else {
        run::as_cli(&config.command, &mut store)
    }
}

fn load_store(config: &Config) -> Result<TransactionStore> {
    let seed = match &config.seed_path {
        Some(path) => {
            log::info!("Loading seed file {}", path.display());
            seed::load_csv(path)?
        }
        None => seed::mock_data().context("Built-in sample ledger is invalid")?,
    };
    Ok(TransactionStore::from_seed(seed))
}
