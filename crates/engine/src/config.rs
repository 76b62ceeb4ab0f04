//! Match timing configuration.

use std::time::Duration;

use crate::types::{FALL_INTERVAL_MS, ROW_CLEAR_PAUSE_MS};

/// Timing knobs for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Time between forced downward steps.
    pub fall_interval_ms: u32,
    /// How long completed rows stay on screen before compaction.
    pub clear_pause_ms: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            fall_interval_ms: FALL_INTERVAL_MS,
            clear_pause_ms: ROW_CLEAR_PAUSE_MS,
        }
    }
}

impl MatchConfig {
    /// Create from environment variables.
    ///
    /// - `TETRIS_FALL_MS`: fall interval (default 400, minimum 1)
    /// - `TETRIS_CLEAR_PAUSE_MS`: completed-row pause (default 200)
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u32>().ok());

        Self {
            fall_interval_ms: parse("TETRIS_FALL_MS")
                .unwrap_or(defaults.fall_interval_ms)
                .max(1),
            clear_pause_ms: parse("TETRIS_CLEAR_PAUSE_MS").unwrap_or(defaults.clear_pause_ms),
        }
    }

    pub fn clear_pause(&self) -> Duration {
        Duration::from_millis(self.clear_pause_ms as u64)
    }
}
