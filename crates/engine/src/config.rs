//! Runtime scheduling settings

use std::time::Duration;

use crate::types::{DEBOUNCE_MS, INPUT_POLL_MS};

/// How the two game threads are scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Quiet period after each accepted commit.
    pub debounce: Duration,
    /// Longest single wait of the input thread; bounds shutdown latency.
    pub input_poll: Duration,
    /// Commands that may queue between frames.
    pub channel_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEBOUNCE_MS as u64),
            input_poll: Duration::from_millis(INPUT_POLL_MS as u64),
            channel_capacity: 16,
        }
    }
}

impl RuntimeConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();
        let debounce = env::var("STACKER_DEBOUNCE_MS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.debounce);

        Self {
            debounce,
            ..defaults
        }
    }
}
