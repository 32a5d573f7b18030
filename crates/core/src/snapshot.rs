use serde::{Deserialize, Serialize};

use crate::types::{MoveEvent, Rows, GRID_SIZE};

/// Plain-data view of a session, handed to renderers and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub grid: Rows,
    pub score: u32,
    pub max_tile: u32,
    pub moves: u32,
    pub won: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub seed: u64,
    pub last_move: Option<MoveEvent>,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Session ended with the win tile on the board.
    pub fn finished_with_win(&self) -> bool {
        self.game_over && self.won
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0; GRID_SIZE]; GRID_SIZE],
            score: 0,
            max_tile: 0,
            moves: 0,
            won: false,
            game_over: false,
            episode_id: 0,
            seed: 0,
            last_move: None,
        }
    }
}
