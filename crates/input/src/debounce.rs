//! Contact debouncing for one button line.
//!
//! A mechanical button bounces for a few milliseconds after it is pressed or
//! released. The debouncer only accepts a new level once the raw signal has
//! held it for the whole window, and reports a press on the accepted rising
//! edge only.

/// Debounce state of a single button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    delay_ms: u64,
    raw: bool,
    stable: bool,
    changed_at: u64,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            raw: false,
            stable: false,
            changed_at: 0,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Feed the raw level sampled at `now_ms`.
    ///
    /// Returns true exactly once per accepted press.
    pub fn sample(&mut self, level: bool, now_ms: u64) -> bool {
        if level != self.raw {
            self.raw = level;
            self.changed_at = now_ms;
        }

        if self.raw != self.stable && now_ms.saturating_sub(self.changed_at) >= self.delay_ms {
            self.stable = self.raw;
            return self.stable;
        }
        false
    }

    /// Debounced level.
    pub fn is_pressed(&self) -> bool {
        self.stable
    }
}
