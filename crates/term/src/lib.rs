//! Terminal imitation of the device's monochrome display panel.
//!
//! Rendering is split the same way as on the device: a pure view fills a
//! framebuffer, and a thin renderer pushes the framebuffer to the terminal.
//!
//! - [`game_view`]: board, completed rows, active piece and drop guides as
//!   characters (row 0 at the bottom of the well)
//! - [`renderer`]: full and diff encoding through crossterm
//! - [`screen`]: [`engine::Renderer`] implementation used by the host binary

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screen;

pub use pocket_tetris_core as core;
pub use pocket_tetris_engine as engine;
pub use pocket_tetris_types as types;

pub use fb::{Cell, FrameBuffer, Ink};
pub use game_view::{GameView, Prompt, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::TermScreen;
