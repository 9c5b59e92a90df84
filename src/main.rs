use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use duelcalc::config::{Config, ConfigStore};
use duelcalc::logging;
use duelcalc::ui::runtime;

/// Scorekeeping and arithmetic companion for tabletop card duels.
#[derive(Debug, Parser)]
#[command(name = "duelcalc", version, about)]
struct Cli {
    /// Path to the config file (defaults to the user config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tracing filter, e.g. `duelcalc=debug`.
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path).context("failed to load configuration")?;

    let filter = cli
        .log_filter
        .as_deref()
        .unwrap_or(&config.ui.log_filter)
        .to_string();
    logging::init(&filter)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %path.display(),
        "starting duelcalc"
    );

    let store = ConfigStore::new(config, path);
    runtime::run(store).context("terminal session failed")?;
    Ok(())
}
