//! Pocket Tetris runner (default binary).
//!
//! The terminal stands in for the device: the screen imitates the monochrome
//! panel and the keyboard imitates the three buttons. The binary cycles
//! insert-coin, match and game-over screens until `q` or Ctrl-C.
//!
//! Environment:
//! - `TETRIS_SEED`: piece sequence seed (default: derived from the wall clock)
//! - `TETRIS_LOG_PATH`: write logs to this file (`RUST_LOG` filters, default `info`)
//! - `TETRIS_FALL_MS`, `TETRIS_CLEAR_PAUSE_MS`: match timing
//! - `TETRIS_DEBOUNCE_MS`, `TETRIS_SAMPLE_MS`, `TETRIS_KEY_HOLD_MS`: button pad timing

use std::fs::File;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use log::info;

use pocket_tetris::core::SimpleRng;
use pocket_tetris::engine::{Controller, MatchConfig, SystemClock};
use pocket_tetris::input::{ButtonPad, KeyboardFeed, LevelFeed, PadConfig};
use pocket_tetris::term::TermScreen;

fn main() -> Result<()> {
    init_logging()?;

    let mut screen = TermScreen::default();
    screen.enter()?;

    let result = run(&mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn init_logging() -> Result<()> {
    // The terminal is in raw mode while playing; logs only go to a file.
    let Ok(path) = std::env::var("TETRIS_LOG_PATH") else {
        return Ok(());
    };

    let file = File::create(&path).with_context(|| format!("cannot create log file {path}"))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn seed_from_env() -> u32 {
    if let Some(seed) = std::env::var("TETRIS_SEED")
        .ok()
        .and_then(|s| s.trim().parse::<u32>().ok())
    {
        return seed;
    }

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(screen: &mut TermScreen) -> Result<()> {
    let match_config = MatchConfig::from_env();
    let pad_config = PadConfig::from_env();
    let seed = seed_from_env();
    info!("seed {seed}, {match_config:?}, {pad_config:?}");

    let feed = LevelFeed::new();
    let _keyboard = KeyboardFeed::spawn(feed.clone(), pad_config.key_hold())?;
    let pad = ButtonPad::start(feed, pad_config)?;

    let mut controller = Controller::new(
        pad,
        screen,
        SystemClock::new(),
        SimpleRng::new(seed),
        match_config,
    );
    let matches = controller.run()?;
    info!("quit after {matches} matches");
    Ok(())
}
