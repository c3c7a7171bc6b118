//! File logging.
//!
//! The terminal is owned by the game while it runs, so log output goes to the
//! file named by `TETRIS_LOG_PATH`. Without it no logger is installed and the
//! `log` macros are no-ops.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// Install the global logger writing to `path`. Filter via `RUST_LOG`.
pub fn init(path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("installing logger")?;
    Ok(())
}
