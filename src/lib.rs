//! Terminal 2048 (workspace facade crate).
//!
//! The game rules live in dedicated crates under `crates/`; this package
//! re-exports them as `tui_2048::{core,input,term,types}` and adds the
//! host-side pieces the binary needs: env configuration, logging setup and
//! the end-of-session summary.

pub mod config;
pub mod logging;
pub mod session;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
