//! Debounced three-button pad.
//!
//! Raw button levels live in a [`LevelFeed`] (the stand-in for the GPIO input
//! register). A sampler task on a private tokio runtime polls the levels,
//! debounces each line and forwards accepted presses over a channel while the
//! pad is enabled. The game loop stays synchronous: [`ButtonPad`] blocks on the
//! channel with the fall budget as timeout.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, trace};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::config::PadConfig;
use crate::debounce::Debouncer;
use crate::engine::InputSource;
use crate::events::ButtonSet;
use crate::types::Button;

#[derive(Debug, Default)]
struct FeedInner {
    levels: [AtomicBool; 3],
    closed: AtomicBool,
}

/// Shared raw button levels.
///
/// Producers (a keyboard thread, a test) set levels; the pad samples them.
/// Closing the feed tells the pad that no press will ever come again.
#[derive(Debug, Clone, Default)]
pub struct LevelFeed {
    inner: Arc<FeedInner>,
}

impl LevelFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, button: Button, held: bool) {
        self.inner.levels[button as usize].store(held, Ordering::Release);
    }

    pub fn level(&self, button: Button) -> bool {
        self.inner.levels[button as usize].load(Ordering::Acquire)
    }

    pub fn close(&self) {
        self.inner.closed.store(true, Ordering::Release);
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }
}

/// Input source backed by a [`LevelFeed`].
pub struct ButtonPad {
    rt: Runtime,
    rx: mpsc::UnboundedReceiver<Button>,
    enabled: Arc<AtomicBool>,
    closed: bool,
}

impl ButtonPad {
    /// Start sampling `feed`. The pad starts disabled.
    pub fn start(feed: LevelFeed, config: PadConfig) -> Result<Self> {
        let rt = Runtime::new().context("failed to create tokio runtime")?;
        let (tx, rx) = mpsc::unbounded_channel::<Button>();
        let enabled = Arc::new(AtomicBool::new(false));

        rt.spawn(sample_levels(feed, Arc::clone(&enabled), tx, config));
        debug!(
            "button pad started (debounce {}ms, sample {}ms)",
            config.debounce_ms, config.sample_ms
        );

        Ok(Self {
            rt,
            rx,
            enabled,
            closed: false,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    fn discard_pending(&mut self) {
        while let Ok(button) = self.rx.try_recv() {
            trace!("discarded stale {:?}", button);
        }
    }
}

impl InputSource for ButtonPad {
    fn await_event(&mut self, timeout: Option<Duration>) -> Option<Button> {
        if self.closed {
            return None;
        }

        let rx = &mut self.rx;
        let first = match timeout {
            // The timer must be created inside the runtime.
            Some(limit) => match self
                .rt
                .block_on(async { tokio::time::timeout(limit, rx.recv()).await })
            {
                Ok(received) => received,
                Err(_elapsed) => return None,
            },
            None => self.rt.block_on(rx.recv()),
        };

        let Some(first) = first else {
            debug!("button feed closed");
            self.closed = true;
            return None;
        };

        let mut pending = ButtonSet::from(first);
        while let Ok(button) = self.rx.try_recv() {
            pending |= ButtonSet::from(button);
        }
        trace!("pending presses {:?}", pending);
        pending.priority()
    }

    fn enable(&mut self) {
        self.discard_pending();
        self.enabled.store(true, Ordering::Release);
    }

    fn disable(&mut self) {
        self.enabled.store(false, Ordering::Release);
        self.discard_pending();
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

async fn sample_levels(
    feed: LevelFeed,
    enabled: Arc<AtomicBool>,
    tx: mpsc::UnboundedSender<Button>,
    config: PadConfig,
) {
    let mut debouncers: [Debouncer; 3] = std::array::from_fn(|_| Debouncer::new(config.debounce_ms));
    let mut ticker = tokio::time::interval(config.sample_period());
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let origin = tokio::time::Instant::now();

    loop {
        ticker.tick().await;
        if feed.is_closed() {
            break;
        }

        let now_ms = origin.elapsed().as_millis() as u64;
        for button in Button::ALL {
            let pressed = debouncers[button as usize].sample(feed.level(button), now_ms);
            if pressed && enabled.load(Ordering::Acquire) && tx.send(button).is_err() {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> PadConfig {
        PadConfig {
            debounce_ms: 5,
            sample_ms: 1,
            key_hold_ms: 50,
        }
    }

    #[test]
    fn disabled_pad_drops_presses() {
        let feed = LevelFeed::new();
        let mut pad = ButtonPad::start(feed.clone(), fast()).unwrap();
        feed.set(Button::Left, true);
        assert_eq!(pad.await_event(Some(Duration::from_millis(60))), None);
        assert!(!pad.is_closed());
    }

    #[test]
    fn held_level_becomes_one_press() {
        let feed = LevelFeed::new();
        let mut pad = ButtonPad::start(feed.clone(), fast()).unwrap();
        pad.enable();
        feed.set(Button::Rotate, true);
        assert_eq!(
            pad.await_event(Some(Duration::from_millis(500))),
            Some(Button::Rotate)
        );
        // Still held: no repeat.
        assert_eq!(pad.await_event(Some(Duration::from_millis(60))), None);
    }

    #[test]
    fn closing_the_feed_closes_the_pad() {
        let feed = LevelFeed::new();
        let mut pad = ButtonPad::start(feed.clone(), fast()).unwrap();
        pad.enable();
        feed.close();
        assert_eq!(pad.await_event(None), None);
        assert!(pad.is_closed());
    }
}
