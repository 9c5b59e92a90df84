//! Logging setup.
//!
//! The TUI owns stdout, so log lines go to a file under the user data dir.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Default log file location: `<data dir>/duelcalc/duelcalc.log`.
pub fn log_path() -> PathBuf {
    let data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    data_dir.join("duelcalc").join("duelcalc.log")
}

/// Install the global subscriber writing to the log file.
///
/// `filter` uses env-filter syntax; `RUST_LOG` takes precedence when set.
pub fn init(filter: &str) -> anyhow::Result<()> {
    let path = log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .context("invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
