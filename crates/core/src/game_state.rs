//! Game state module - the grid engine for one session
//!
//! This module ties together the grid, the slide primitive, the tile RNG and
//! the score. It owns all mutable session state and applies moves atomically:
//! a move either commits a new grid (then spawns and re-checks the terminal
//! condition) or leaves every field untouched.

use log::{debug, info};

use crate::snapshot::GameSnapshot;
use crate::{shift, Grid, TileRng};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    rng: TileRng,
    score: u32,
    /// Sticky: set when a 2048 tile appears, never cleared within an episode.
    won: bool,
    game_over: bool,
    started: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Moves that changed the grid in this episode.
    moves: u32,
    /// Last committed move in this episode.
    last_move: Option<MoveEvent>,
}

impl GameState {
    /// Create a new, unstarted game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self {
            grid: Grid::new(),
            rng: TileRng::new(seed),
            score: 0,
            won: false,
            game_over: false,
            started: false,
            episode_id: 0,
            moves: 0,
            last_move: None,
        }
    }

    /// Resume play from an arbitrary grid.
    ///
    /// Returns None if any cell is neither empty nor a power of two >= 2.
    /// The session counts as started. `won` and `game_over` are derived from
    /// the grid so the flags stay consistent with what is on the board.
    pub fn from_grid(seed: u64, grid: Grid) -> Option<Self> {
        if !grid.has_valid_tiles() {
            debug!("rejecting grid with invalid tiles: {:?}", grid.rows());
            return None;
        }
        let mut state = Self::new(seed);
        state.grid = grid;
        state.started = true;
        state.won = grid.contains(WIN_TILE);
        state.game_over = !grid.has_available_moves();
        Some(state)
    }

    /// Start the game: empty grid plus the opening tiles
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.initialize();
    }

    /// Reset the episode to a fresh grid and spawn the opening tiles.
    ///
    /// The RNG stream is not reset, so consecutive episodes differ while the
    /// whole run stays reproducible from the seed.
    pub fn initialize(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.won = false;
        self.game_over = false;
        self.moves = 0;
        self.last_move = None;
        self.started = true;

        for _ in 0..INITIAL_TILES {
            self.spawn_random_tile();
        }
        debug!(
            "episode {} initialized (seed {}): {:?}",
            self.episode_id,
            self.rng.seed(),
            self.grid.rows()
        );
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn max_tile(&self) -> Cell {
        self.grid.max_tile()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn last_move(&self) -> Option<MoveEvent> {
        self.last_move
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_rows(&mut out.grid);
        out.score = self.score;
        out.max_tile = self.grid.max_tile();
        out.moves = self.moves;
        out.won = self.won;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.seed = self.rng.seed();
        out.last_move = self.last_move;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
    ///
    /// A full grid is a normal path toward game over, so this is a silent
    /// no-op returning `None` there.
    pub fn spawn_random_tile(&mut self) -> Option<SpawnedTile> {
        let empty = self.grid.empty_cells();
        let idx = self.rng.pick_index(empty.len())?;
        let (row, col) = empty[idx];
        let value = self.rng.tile_value();
        self.grid.set(row as usize, col as usize, value);

        debug!("spawned {} at ({}, {})", value, row, col);
        Some(SpawnedTile { row, col, value })
    }

    /// Check whether any move could still change the current grid
    pub fn has_available_moves(&self) -> bool {
        self.grid.has_available_moves()
    }

    /// Slide all tiles in `direction`.
    ///
    /// Ignored once the game is over. If no line changes, nothing is
    /// committed and no tile spawns. Otherwise the new grid and score are
    /// committed, `won` is latched if a 2048 tile exists, one tile spawns,
    /// and `game_over` is set if the post-spawn grid has no moves left.
    pub fn move_tiles(&mut self, direction: Direction) -> MoveOutcome {
        if self.game_over {
            debug!("move {} ignored: game over", direction.as_str());
            return MoveOutcome::GameOver;
        }

        let shifted = shift(&self.grid, direction);
        if !shifted.moved {
            debug!("move {} ignored: nothing to slide", direction.as_str());
            return MoveOutcome::Unchanged;
        }

        self.grid = shifted.grid;
        self.score = self.score.saturating_add(shifted.gained);
        self.moves = self.moves.wrapping_add(1);

        let won_now = !self.won && self.grid.contains(WIN_TILE);
        if won_now {
            self.won = true;
            info!("reached {} after {} moves, score {}", WIN_TILE, self.moves, self.score);
        }

        let spawned = self.spawn_random_tile();

        let game_over_now = !self.grid.has_available_moves();
        if game_over_now {
            self.game_over = true;
            info!(
                "no moves left after {} moves, score {} (won: {})",
                self.moves, self.score, self.won
            );
        }

        debug!(
            "move {}: +{} ({} merges), score {}",
            direction.as_str(),
            shifted.gained,
            shifted.merges,
            self.score
        );

        let event = MoveEvent {
            direction,
            gained: shifted.gained,
            merges: shifted.merges,
            spawned,
            won_now,
            game_over_now,
        };
        self.last_move = Some(event);

        MoveOutcome::Moved {
            gained: shifted.gained,
        }
    }

    /// Apply a game action. Returns true if the state changed
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.move_tiles(direction).is_moved(),
            GameAction::Restart => {
                self.episode_id = self.episode_id.wrapping_add(1);
                debug!("restart: episode {}", self.episode_id);
                self.initialize();
                true
            }
        }
    }

    /// Apply an action by name (e.g. from a scripted host).
    ///
    /// Unknown names are ignored and report no change.
    pub fn apply_named(&mut self, name: &str) -> bool {
        match GameAction::from_str(name) {
            Some(action) => self.apply_action(action),
            None => {
                debug!("ignoring unknown action {:?}", name);
                false
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
