//! Button input - debounced presses from three momentary buttons
//!
//! On the device each button is a GPIO line. Here a [`LevelFeed`] holds the
//! raw line levels, [`KeyboardFeed`] drives them from the terminal keyboard
//! and [`ButtonPad`] debounces them into the press events the match engine
//! consumes through [`engine::InputSource`].
//!
//! ```text
//! keyboard thread -> LevelFeed -> sampler task (debounce) -> channel -> ButtonPad
//! ```

pub mod config;
pub mod debounce;
pub mod events;
pub mod keyboard;
pub mod map;
pub mod pad;

pub use pocket_tetris_engine as engine;
pub use pocket_tetris_types as types;

pub use config::PadConfig;
pub use debounce::Debouncer;
pub use events::ButtonSet;
pub use keyboard::{HeldKeys, KeyboardFeed};
pub use map::{button_for_key, should_quit};
pub use pad::{ButtonPad, LevelFeed};
