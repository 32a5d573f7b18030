//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders into
//! a plain framebuffer that is then flushed to the terminal, instead of using
//! a widget toolkit.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so it can be checked cell by cell in tests
//! - Size tiles so numbers up to six digits stay legible

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
