//! Button pad timing configuration.

use std::time::Duration;

use crate::types::{BUTTON_SAMPLE_MS, DEBOUNCE_MS};

/// Default time a key press keeps its button held when the terminal sends no
/// release events.
pub const DEFAULT_KEY_HOLD_MS: u64 = 120;

/// Pad timing knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadConfig {
    /// A level must be stable this long before it is accepted.
    pub debounce_ms: u64,
    /// Period of the level sampler.
    pub sample_ms: u64,
    /// Synthetic hold time for keyboard presses.
    pub key_hold_ms: u64,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEBOUNCE_MS as u64,
            sample_ms: BUTTON_SAMPLE_MS as u64,
            key_hold_ms: DEFAULT_KEY_HOLD_MS,
        }
    }
}

impl PadConfig {
    /// Create from environment variables.
    ///
    /// - `TETRIS_DEBOUNCE_MS` (default 20)
    /// - `TETRIS_SAMPLE_MS` (default 10, minimum 1)
    /// - `TETRIS_KEY_HOLD_MS` (default 120)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());

        Self {
            debounce_ms: parse("TETRIS_DEBOUNCE_MS").unwrap_or(defaults.debounce_ms),
            sample_ms: parse("TETRIS_SAMPLE_MS").unwrap_or(defaults.sample_ms).max(1),
            key_hold_ms: parse("TETRIS_KEY_HOLD_MS").unwrap_or(defaults.key_hold_ms),
        }
    }

    pub fn sample_period(&self) -> Duration {
        Duration::from_millis(self.sample_ms.max(1))
    }

    pub fn key_hold(&self) -> Duration {
        Duration::from_millis(self.key_hold_ms)
    }
}
