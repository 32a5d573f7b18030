//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the 2048 rules and session state. It has **zero
//! dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed and same moves produce the identical game
//! - **Testable**: Every rule is reachable without a terminal
//! - **Portable**: Can be driven by any host (terminal, GUI, scripts)
//! - **Allocation-free**: Moves and spawns work on fixed-size arrays
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 flat grid, transpose, empty-cell scan, terminal check
//! - [`slide`]: the single line-slide primitive and the per-direction shift
//! - [`rng`]: seedable tile RNG (position and 2/4 value)
//! - [`game_state`]: the engine holding grid, score and win/loss flags
//! - [`snapshot`]: plain-data copy of a session for renderers
//!
//! # Game Rules
//!
//! - **Slide**: tiles travel toward the chosen edge, filling gaps
//! - **Merge**: two equal neighbours merge once per move into their sum,
//!   which is added to the score; no chain merges
//! - **Spawn**: after every move that changes the grid, one 2 (90%) or
//!   4 (10%) appears on a random empty cell
//! - **Win**: a 2048 tile latches `won`; play may continue
//! - **Game over**: no empty cell and no equal neighbours
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, MoveOutcome};
//!
//! // Create and start a game
//! let mut game = GameState::new(12345);
//! game.start();
//! assert_eq!(game.grid().tile_count(), 2);
//!
//! // Moves that change nothing are reported, not committed
//! let mut any_moved = false;
//! for dir in Direction::ALL {
//!     if game.move_tiles(dir) != MoveOutcome::Unchanged {
//!         any_moved = true;
//!     }
//! }
//! assert!(any_moved);
//! assert!(game.grid().tile_count() >= 2);
//! ```

pub mod game_state;
pub mod grid;
pub mod rng;
pub mod slide;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use grid::{has_available_moves, Grid};
pub use rng::TileRng;
pub use slide::{shift, slide, Shift, SlideResult};
pub use snapshot::GameSnapshot;
