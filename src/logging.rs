//! Log setup for the terminal binary.
//!
//! The game owns the terminal in raw mode, so logs never go to stdout/stderr.
//! They are written to the file named by `STACKER_LOG_PATH`, or dropped.

use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_PATH_VAR: &str = "STACKER_LOG_PATH";
pub const LOG_FILTER_VAR: &str = "STACKER_LOG";

/// Where logs should go, if anywhere.
pub fn log_path_from_env() -> Option<PathBuf> {
    env::var_os(LOG_PATH_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Install the global subscriber. Returns whether one was installed.
pub fn init() -> Result<bool> {
    let Some(path) = log_path_from_env() else {
        return Ok(false);
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_thread_names(true)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))?;
    Ok(true)
}
