//! RNG module - seedable randomness for tile spawning
//!
//! All randomness in a session flows through one [`TileRng`], so a seed
//! fully determines the game for a given sequence of moves. Uses ChaCha8,
//! which is fast and produces the same stream on every platform.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::{Cell, SPAWN_HIGH_VALUE, SPAWN_LOW_PROBABILITY, SPAWN_LOW_VALUE};

/// Deterministic source for spawn positions and values
#[derive(Debug, Clone)]
pub struct TileRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl TileRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created with (for replaying a session)
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `[0, len)`. Returns None for an empty range
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.inner.gen_range(0..len))
    }

    /// Value for a freshly spawned tile: 2 at 90%, otherwise 4
    pub fn tile_value(&mut self) -> Cell {
        if self.inner.gen_bool(SPAWN_LOW_PROBABILITY) {
            SPAWN_LOW_VALUE
        } else {
            SPAWN_HIGH_VALUE
        }
    }
}

impl Default for TileRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = TileRng::new(12345);
        let mut rng2 = TileRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.pick_index(16), rng2.pick_index(16));
            assert_eq!(rng1.tile_value(), rng2.tile_value());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = TileRng::new(12345);
        let mut rng2 = TileRng::new(54321);

        let a: Vec<_> = (0..32).map(|_| rng1.pick_index(1000)).collect();
        let b: Vec<_> = (0..32).map(|_| rng2.pick_index(1000)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_pick_index_bounds() {
        let mut rng = TileRng::new(7);
        assert_eq!(rng.pick_index(0), None);
        assert_eq!(rng.pick_index(1), Some(0));
        for _ in 0..200 {
            let idx = rng.pick_index(5).unwrap();
            assert!(idx < 5);
        }
    }

    #[test]
    fn test_tile_value_distribution() {
        let mut rng = TileRng::new(42);
        let draws = 10_000;
        let fours = (0..draws).filter(|_| rng.tile_value() == 4).count();

        // Expect ~10% fours; allow a generous band.
        assert!(fours > 700 && fours < 1300, "fours = {}", fours);
    }

    #[test]
    fn test_tile_value_only_two_or_four() {
        let mut rng = TileRng::new(3);
        for _ in 0..500 {
            let v = rng.tile_value();
            assert!(v == 2 || v == 4);
        }
    }
}
