//! End-of-session summary printed after the terminal is restored.

use serde::Serialize;

use crate::config::SummaryFormat;
use crate::core::GameSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub score: u32,
    pub max_tile: u32,
    pub moves: u32,
    pub won: bool,
    pub game_over: bool,
    pub episodes: u32,
    pub seed: u64,
}

impl SessionSummary {
    pub fn from_snapshot(snap: &GameSnapshot) -> Self {
        Self {
            score: snap.score,
            max_tile: snap.max_tile,
            moves: snap.moves,
            won: snap.won,
            game_over: snap.game_over,
            episodes: snap.episode_id + 1,
            seed: snap.seed,
        }
    }

    /// One-line brag suitable for pasting anywhere.
    pub fn share_text(&self) -> String {
        let outcome = match (self.won, self.game_over) {
            (true, true) => "You won! ",
            (false, true) => "Game over. ",
            (true, false) => "Reached 2048! ",
            (false, false) => "",
        };
        format!(
            "{}I scored {} points in 2048! (best tile {}, {} moves, seed {})",
            outcome, self.score, self.max_tile, self.moves, self.seed
        )
    }

    /// Render in the configured format; `None` when summaries are off.
    pub fn render(&self, format: SummaryFormat) -> serde_json::Result<Option<String>> {
        match format {
            SummaryFormat::Text => Ok(Some(self.share_text())),
            SummaryFormat::Json => serde_json::to_string(self).map(Some),
            SummaryFormat::Off => Ok(None),
        }
    }
}
