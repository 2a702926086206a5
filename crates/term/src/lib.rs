//! Terminal rendering for the game.
//!
//! A small, game-oriented rendering layer: [`GameView`] lays a
//! [`crate::core::GameSnapshot`] out into a [`FrameBuffer`], and
//! [`TerminalRenderer`] flushes that buffer to the terminal, writing only
//! what changed since the previous frame.
//!
//! Board cells are two terminal columns wide to keep them roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
