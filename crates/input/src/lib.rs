//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`]. Moves in 2048 are discrete, so
//! there is no auto-repeat handling: one key press is one move.

pub mod map;

pub use tui_2048_types as types;

pub use map::{action_for_event, handle_key_event, should_quit};
