//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic, so they can be shared by the
//! core engine, the terminal view and the input mapping.
//!
//! # Grid Dimensions
//!
//! The playfield is a square of [`GRID_SIZE`] × [`GRID_SIZE`] cells, indexed
//! `(row, col)` from the top-left corner. An empty cell holds `0`; any other
//! cell holds a power of two starting at 2.
//!
//! # Spawn Odds
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_LOW_VALUE` | 2 | Common spawned tile |
//! | `SPAWN_HIGH_VALUE` | 4 | Rare spawned tile |
//! | `SPAWN_LOW_PROBABILITY` | 0.9 | Chance a spawn is a 2 |
//! | `INITIAL_TILES` | 2 | Tiles placed when a session starts |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GRID_SIZE, WIN_TILE};
//!
//! // Parse a direction (case-insensitive)
//! let dir = Direction::from_str("Left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.as_str(), "left");
//!
//! // Unknown names are rejected rather than guessed
//! assert_eq!(Direction::from_str("sideways"), None);
//!
//! // Actions wrap directions
//! assert_eq!(GameAction::from_str("up"), Some(GameAction::Move(Direction::Up)));
//!
//! assert_eq!(GRID_SIZE, 4);
//! assert_eq!(WIN_TILE, 2048);
//! ```

use serde::{Deserialize, Serialize};

/// Grid side length in cells (4x4)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Tile value that marks the session as won
pub const WIN_TILE: u32 = 2048;

/// Value of the common spawned tile
pub const SPAWN_LOW_VALUE: u32 = 2;

/// Value of the rare spawned tile
pub const SPAWN_HIGH_VALUE: u32 = 4;

/// Probability that a spawned tile is [`SPAWN_LOW_VALUE`]
pub const SPAWN_LOW_PROBABILITY: f64 = 0.9;

/// Number of tiles spawned on a fresh grid
pub const INITIAL_TILES: usize = 2;

/// Value of a single grid cell (`0` = empty)
pub type Cell = u32;

/// One row or column of the grid
pub type Line = [Cell; GRID_SIZE];

/// Row-major 2D view of the grid, as handed to renderers
pub type Rows = [Line; GRID_SIZE];

/// The four slide directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a stable order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("DOWN"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str(""), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Whether the slide runs along columns (needs a transpose)
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Whether tiles travel toward the high index end (needs a reverse)
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    /// Arrow glyph, used by the terminal view
    pub fn arrow(&self) -> char {
        match self {
            Direction::Up => '↑',
            Direction::Down => '↓',
            Direction::Left => '←',
            Direction::Right => '→',
        }
    }
}

/// Actions a host can apply to a running game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile toward one edge
    Move(Direction),
    /// Throw the current session away and start a new episode
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// Direction names map to [`GameAction::Move`]; `"restart"` maps to
    /// [`GameAction::Restart`].
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("right"), Some(GameAction::Move(Direction::Right)));
    /// assert_eq!(GameAction::from_str("Restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("undo"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("restart") {
            return Some(GameAction::Restart);
        }
        Direction::from_str(s).map(GameAction::Move)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Restart => "restart",
        }
    }
}

/// Result of asking the engine to move
///
/// No-op outcomes are values, not errors: a host can tell "nothing changed"
/// apart from "state changed" without inspecting the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The grid changed; `gained` is the score added by merges (may be 0)
    Moved { gained: u32 },
    /// No line changed in that direction; nothing was committed or spawned
    Unchanged,
    /// The session is already over; the move was ignored
    GameOver,
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// A tile placed by the spawner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpawnedTile {
    pub row: u8,
    pub col: u8,
    pub value: Cell,
}

/// Core-side event emitted after a committed move.
///
/// Consumed by the host (e.g. to flash the points just earned).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEvent {
    pub direction: Direction,
    pub gained: u32,
    pub merges: u32,
    pub spawned: Option<SpawnedTile>,
    pub won_now: bool,
    pub game_over_now: bool,
}
