//! Match engine - runs matches against injected collaborators
//!
//! The core crate decides what a button press or a timeout does to the board.
//! This crate decides *when* things happen: it waits on the input source with
//! the fall budget as timeout, charges waiting time, pauses on row clears and
//! tells the renderer to redraw after every visible change.
//!
//! # Collaborators
//!
//! - [`InputSource`]: debounced presses with a bounded wait
//! - [`Renderer`]: match frames and the two idle prompts
//! - [`Clock`]: monotonic milliseconds and sleep
//! - [`PieceSource`]: next piece kind (the core's [`SimpleRng`](crate::core::SimpleRng) implements it)
//!
//! # Host cycle
//!
//! ```text
//! wait_for_start -> play_match -> show_game_over -> wait_for_start ...
//! ```
//!
//! The cycle ends only when the input source reports it is closed.

pub mod config;
pub mod controller;
pub mod ports;

pub use pocket_tetris_core as core;
pub use pocket_tetris_types as types;

pub use config::MatchConfig;
pub use controller::{Controller, MatchEnd, MatchSummary};
pub use ports::{Clock, InputSource, PieceSource, Renderer, SystemClock};
