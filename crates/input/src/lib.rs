//! Terminal input.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. There is no
//! key-repeat handling here; the terminal's own repeat produces one press
//! event per step.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, should_quit};
