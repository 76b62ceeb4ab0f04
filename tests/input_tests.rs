//! Button pad tests - debounced presses, masking, priority and shutdown

use std::thread;
use std::time::Duration;

use pocket_tetris::engine::InputSource;
use pocket_tetris::input::{ButtonPad, ButtonSet, Debouncer, LevelFeed, PadConfig};
use pocket_tetris::types::Button;

fn fast() -> PadConfig {
    PadConfig {
        debounce_ms: 5,
        sample_ms: 1,
        key_hold_ms: 40,
    }
}

fn tap(feed: &LevelFeed, button: Button) {
    feed.set(button, true);
    thread::sleep(Duration::from_millis(30));
    feed.set(button, false);
}

#[test]
fn press_arrives_once_through_the_pad() {
    let feed = LevelFeed::new();
    let mut pad = ButtonPad::start(feed.clone(), fast()).unwrap();
    pad.enable();

    tap(&feed, Button::Left);
    assert_eq!(pad.await_event(Some(Duration::from_millis(500))), Some(Button::Left));
    assert_eq!(pad.await_event(Some(Duration::from_millis(50))), None);
}

#[test]
fn simultaneous_presses_resolve_by_priority() {
    let feed = LevelFeed::new();
    let mut pad = ButtonPad::start(feed.clone(), fast()).unwrap();
    pad.enable();

    feed.set(Button::Rotate, true);
    feed.set(Button::Right, true);
    thread::sleep(Duration::from_millis(40));

    // Both edges are queued; one event consumes them together.
    assert_eq!(pad.await_event(Some(Duration::from_millis(500))), Some(Button::Right));
    assert_eq!(pad.await_event(Some(Duration::from_millis(50))), None);
}

#[test]
fn presses_while_disabled_never_surface() {
    let feed = LevelFeed::new();
    let mut pad = ButtonPad::start(feed.clone(), fast()).unwrap();
    pad.enable();
    pad.disable();

    tap(&feed, Button::Rotate);
    pad.enable();
    assert_eq!(pad.await_event(Some(Duration::from_millis(50))), None);
}

#[test]
fn closed_feed_reports_closed_input() {
    let feed = LevelFeed::new();
    let mut pad = ButtonPad::start(feed.clone(), fast()).unwrap();
    pad.enable();
    feed.close();

    assert_eq!(pad.await_event(Some(Duration::from_secs(5))), None);
    assert!(pad.is_closed());
    assert_eq!(pad.await_event(None), None);
}

#[test]
fn bouncing_contact_counts_as_one_press() {
    let mut d = Debouncer::new(20);
    let mut presses = 0;
    let levels = [true, false, true, false, true, true, true, true, true];
    for (i, level) in levels.into_iter().enumerate() {
        if d.sample(level, i as u64 * 5) {
            presses += 1;
        }
    }
    assert_eq!(presses, 1);
}

#[test]
fn button_set_priority_is_left_right_rotate() {
    assert_eq!((ButtonSet::LEFT | ButtonSet::RIGHT).priority(), Some(Button::Left));
    assert_eq!((ButtonSet::RIGHT | ButtonSet::ROTATE).priority(), Some(Button::Right));
    assert_eq!(ButtonSet::ROTATE.priority(), Some(Button::Rotate));
}
