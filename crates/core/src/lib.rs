//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules, the placement engine and the session
//! controller. It has no dependencies on the terminal or any other I/O, so
//! the same seed always plays out the same game.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven-entry piece catalog and piece instances
//! - [`geometry`]: orientation sampling for square piece patterns
//! - [`pile`]: the 16x32 grid of settled cells
//! - [`place`]: collision, merge, resting position and row clears
//! - [`game_state`]: the controller (active/guide/next piece, score, gravity)
//! - [`rng`]: seeded piece and column selection
//! - [`scoring`]: row-clear rewards and the gravity schedule
//! - [`config`]: environment-driven settings
//! - [`snapshot`]: plain-data view of a game for rendering
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::GameState;
//! use tui_blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::ShiftRight);
//! game.apply_action(GameAction::RotateRight);
//! game.apply_action(GameAction::HardDrop);
//!
//! // One piece settled, the next one is falling.
//! assert_eq!(game.pieces_locked(), 1);
//! assert!(!game.game_over());
//! ```
//!
//! # Timing
//!
//! Gravity is driven by the caller: pass elapsed milliseconds to
//! [`GameState::advance`](game_state::GameState::advance) and it fires one
//! gravity step per full interval. The interval starts at 800ms and drops by
//! 50ms per 1000 points, down to 100ms.

pub mod config;
pub mod game_state;
pub mod geometry;
pub mod pieces;
pub mod pile;
pub mod place;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use game_state::GameState;
pub use pieces::{get_shape, piece_def, Piece, PieceDef};
pub use pile::Pile;
pub use place::{fits, merge, resting_position, scan_and_clear_rows, ClearReport};
pub use rng::{PieceSpawner, SimpleRng};
pub use scoring::{drop_interval_ms, line_clear_reward};
pub use snapshot::{GameSnapshot, PieceSnapshot};
