//! Engine tuning
//!
//! Defaults come from [`crate::types`]; every knob can be overridden from the
//! environment.

use std::time::Duration;

use crate::error::EngineFault;
use crate::types::{
    BOARD_HEIGHT, BOARD_WIDTH, COMPACTION_ROWS, COMPACTION_STEP_MS, HARD_MODE_SCORE,
    INITIAL_INTERVAL_MS, INITIAL_LINE_LENGTH, MIN_INTERVAL_MS, SPEEDUP_FACTOR,
};

/// Difficulty and animation settings for a [`GameEngine`](crate::GameEngine).
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Seconds between ticks before the first commit.
    pub initial_interval: f64,
    /// Lower bound for the interval, in seconds.
    pub min_interval: f64,
    /// Multiplier applied to the interval per successful commit.
    pub speedup: f64,
    pub initial_length: u8,
    pub hard_mode: bool,
    pub hard_mode_score: u32,
    pub compaction_rows: u8,
    pub compaction_step: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_interval: INITIAL_INTERVAL_MS as f64 / 1000.0,
            min_interval: MIN_INTERVAL_MS as f64 / 1000.0,
            speedup: SPEEDUP_FACTOR,
            initial_length: INITIAL_LINE_LENGTH,
            hard_mode: true,
            hard_mode_score: HARD_MODE_SCORE,
            compaction_rows: COMPACTION_ROWS,
            compaction_step: Duration::from_millis(COMPACTION_STEP_MS as u64),
        }
    }
}

impl EngineConfig {
    /// Create from environment variables, falling back to defaults for anything
    /// missing or unparsable.
    pub fn from_env() -> Self {
        use std::env;

        fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
            env::var(key).ok().and_then(|s| s.trim().parse().ok())
        }

        let defaults = Self::default();

        let initial_interval = parsed::<u64>("STACKER_INTERVAL_MS")
            .map(|ms| ms as f64 / 1000.0)
            .unwrap_or(defaults.initial_interval);
        let min_interval = parsed::<u64>("STACKER_MIN_INTERVAL_MS")
            .map(|ms| ms as f64 / 1000.0)
            .unwrap_or(defaults.min_interval);
        let speedup = parsed::<f64>("STACKER_SPEEDUP").unwrap_or(defaults.speedup);
        let initial_length =
            parsed::<u8>("STACKER_LINE_LENGTH").unwrap_or(defaults.initial_length);
        let hard_mode_score =
            parsed::<u32>("STACKER_HARD_MODE_SCORE").unwrap_or(defaults.hard_mode_score);
        let hard_mode = env::var("STACKER_HARD_MODE")
            .map(|v| !(v == "0" || v.eq_ignore_ascii_case("false")))
            .unwrap_or(defaults.hard_mode);

        Self {
            initial_interval,
            min_interval,
            speedup,
            initial_length,
            hard_mode,
            hard_mode_score,
            ..defaults
        }
    }

    /// Reject settings the engine cannot run with.
    pub fn validate(&self) -> Result<(), EngineFault> {
        if !(self.min_interval > 0.0) {
            return Err(EngineFault::InvalidConfig(format!(
                "minimum interval must be positive, got {}s",
                self.min_interval
            )));
        }
        if self.initial_interval < self.min_interval {
            return Err(EngineFault::InvalidConfig(format!(
                "initial interval {}s is below the floor {}s",
                self.initial_interval, self.min_interval
            )));
        }
        if !(self.speedup > 0.0 && self.speedup <= 1.0) {
            return Err(EngineFault::InvalidConfig(format!(
                "speed-up factor must be in (0, 1], got {}",
                self.speedup
            )));
        }
        if self.initial_length == 0 || self.initial_length > BOARD_WIDTH {
            return Err(EngineFault::InvalidConfig(format!(
                "initial line length must be 1..={}, got {}",
                BOARD_WIDTH, self.initial_length
            )));
        }
        if self.compaction_rows == 0 || self.compaction_rows >= BOARD_HEIGHT {
            return Err(EngineFault::InvalidConfig(format!(
                "compaction must remove 1..{} rows, got {}",
                BOARD_HEIGHT, self.compaction_rows
            )));
        }
        Ok(())
    }

    /// Tick interval in seconds after `commits` successful commits.
    pub fn interval_after(&self, commits: u32) -> f64 {
        let exponent = commits.min(i32::MAX as u32) as i32;
        (self.initial_interval * self.speedup.powi(exponent)).max(self.min_interval)
    }

    /// Whether a commit made at `score` (before it is counted) rotates the display.
    pub fn rotates_at(&self, score: u32) -> bool {
        self.hard_mode && score >= self.hard_mode_score
    }
}
