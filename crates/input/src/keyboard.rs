//! Keyboard imitation of the three physical buttons.
//!
//! A background thread reads crossterm key events and turns them into raw
//! levels on a [`LevelFeed`]. Many terminals never report key releases, so a
//! press holds its button for a fixed time unless a release arrives first.
//! Terminal auto-repeat extends the hold.

use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use log::{debug, warn};

use crate::map::{button_for_key, should_quit};
use crate::pad::LevelFeed;
use crate::types::Button;

const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Per-button release deadlines for key presses.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    hold: Duration,
    deadlines: [Option<Instant>; 3],
}

impl HeldKeys {
    pub fn new(hold: Duration) -> Self {
        Self {
            hold,
            deadlines: [None; 3],
        }
    }

    /// Apply one key event to `feed`.
    pub fn on_key(&mut self, key: KeyEvent, now: Instant, feed: &LevelFeed) {
        if key.kind != KeyEventKind::Release && should_quit(key) {
            debug!("quit key pressed");
            feed.close();
            return;
        }

        let Some(button) = button_for_key(key) else {
            return;
        };

        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.deadlines[button as usize] = Some(now + self.hold);
                feed.set(button, true);
            }
            KeyEventKind::Release => {
                self.deadlines[button as usize] = None;
                feed.set(button, false);
            }
        }
    }

    /// Release every button whose hold time ran out.
    pub fn release_expired(&mut self, now: Instant, feed: &LevelFeed) {
        for button in Button::ALL {
            let slot = &mut self.deadlines[button as usize];
            if slot.is_some_and(|deadline| now >= deadline) {
                *slot = None;
                feed.set(button, false);
            }
        }
    }
}

/// Background keyboard reader feeding a [`LevelFeed`].
///
/// Dropping it closes the feed and joins the thread.
pub struct KeyboardFeed {
    feed: LevelFeed,
    handle: Option<JoinHandle<()>>,
}

impl KeyboardFeed {
    pub fn spawn(feed: LevelFeed, hold: Duration) -> Result<Self> {
        let worker = feed.clone();
        let handle = std::thread::Builder::new()
            .name("keyboard".to_string())
            .spawn(move || read_keys(worker, hold))
            .context("failed to spawn keyboard thread")?;

        Ok(Self {
            feed,
            handle: Some(handle),
        })
    }

    pub fn feed(&self) -> &LevelFeed {
        &self.feed
    }
}

impl Drop for KeyboardFeed {
    fn drop(&mut self) {
        self.feed.close();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn read_keys(feed: LevelFeed, hold: Duration) {
    let mut held = HeldKeys::new(hold);

    while !feed.is_closed() {
        held.release_expired(Instant::now(), &feed);

        match event::poll(POLL_INTERVAL) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => held.on_key(key, Instant::now(), &feed),
                Ok(_) => {}
                Err(err) => {
                    warn!("keyboard read failed: {err}");
                    feed.close();
                }
            },
            Ok(false) => {}
            Err(err) => {
                warn!("keyboard poll failed: {err}");
                feed.close();
            }
        }
    }
}
