//! Slide module - compaction and merging of tile lines
//!
//! Every direction is handled by one canonical primitive, [`slide`], which
//! pushes a line toward index 0. The other directions are orientation
//! transforms applied before and after:
//!
//! | Direction | Before | After |
//! |-----------|--------|-------|
//! | Left | - | - |
//! | Right | reverse each row | reverse each row |
//! | Up | transpose | transpose |
//! | Down | transpose, reverse each row | reverse each row, transpose |
//!
//! Merging follows standard 2048 rules: each tile merges at most once per
//! move, and the scan restarts after a consumed pair, so `[2, 2, 2, 0]`
//! becomes `[4, 2, 0, 0]` rather than `[8, 0, 0, 0]` or `[2, 4, 0, 0]`.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{Cell, Direction, Line, GRID_SIZE};

/// Outcome of sliding a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideResult {
    pub line: Line,
    /// Sum of the merged (doubled) tile values
    pub gained: u32,
    pub merges: u32,
}

/// Slide a line toward index 0, merging equal neighbours once.
///
/// Zeros are removed first (gravity), then the packed tiles are scanned left
/// to right. An equal pair becomes one doubled tile and the scan skips past
/// both; the result is padded with zeros back to full length.
pub fn slide(line: Line) -> SlideResult {
    let packed: ArrayVec<Cell, GRID_SIZE> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut out = [0; GRID_SIZE];
    let mut write = 0usize;
    let mut gained = 0u32;
    let mut merges = 0u32;
    let mut i = 0usize;

    while i < packed.len() {
        let merged = (i + 1 < packed.len() && packed[i] == packed[i + 1])
            .then(|| packed[i].checked_mul(2))
            .flatten();
        if let Some(merged) = merged {
            out[write] = merged;
            gained = gained.saturating_add(merged);
            merges += 1;
            i += 2;
        } else {
            out[write] = packed[i];
            i += 1;
        }
        write += 1;
    }

    SlideResult {
        line: out,
        gained,
        merges,
    }
}

/// Outcome of shifting the whole grid in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    pub grid: Grid,
    pub gained: u32,
    pub merges: u32,
    /// True if at least one line differs from its pre-slide content
    pub moved: bool,
}

/// Shift every line of `grid` in `direction`. No randomness, no side effects.
pub fn shift(grid: &Grid, direction: Direction) -> Shift {
    let mut work = if direction.is_vertical() {
        grid.transpose()
    } else {
        *grid
    };

    let mut gained = 0u32;
    let mut merges = 0u32;
    let mut moved = false;

    let rows = work.rows();
    for (r, before) in rows.into_iter().enumerate() {
        let mut line = before;
        if direction.is_reversed() {
            line.reverse();
        }

        let result = slide(line);
        let mut updated = result.line;
        if direction.is_reversed() {
            updated.reverse();
        }

        if updated != before {
            moved = true;
        }
        gained = gained.saturating_add(result.gained);
        merges += result.merges;
        work.set_row(r, updated);
    }

    if direction.is_vertical() {
        work = work.transpose();
    }

    Shift {
        grid: work,
        gained,
        merges,
        moved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_compacts_gaps() {
        let r = slide([0, 2, 0, 4]);
        assert_eq!(r.line, [2, 4, 0, 0]);
        assert_eq!(r.gained, 0);
        assert_eq!(r.merges, 0);
    }

    #[test]
    fn test_slide_only_first_pair_of_three_merges() {
        let r = slide([2, 2, 2, 0]);
        assert_eq!(r.line, [4, 2, 0, 0]);
        assert_eq!(r.gained, 4);
        assert_eq!(r.merges, 1);
    }

    #[test]
    fn test_slide_two_pairs() {
        let r = slide([2, 2, 2, 2]);
        assert_eq!(r.line, [4, 4, 0, 0]);
        assert_eq!(r.gained, 8);
        assert_eq!(r.merges, 2);
    }

    #[test]
    fn test_slide_no_chain_merge() {
        // The freshly merged 8 must not absorb the existing 8.
        let r = slide([4, 4, 8, 0]);
        assert_eq!(r.line, [8, 8, 0, 0]);
        assert_eq!(r.gained, 8);
    }

    #[test]
    fn test_slide_refuses_overflowing_merge() {
        let top = 1u32 << 31;
        let r = slide([top, 0, top, 0]);
        assert_eq!(r.line, [top, top, 0, 0]);
        assert_eq!(r.gained, 0);
        assert_eq!(r.merges, 0);
    }

    #[test]
    fn test_slide_merges_across_gap() {
        let r = slide([8, 0, 0, 8]);
        assert_eq!(r.line, [16, 0, 0, 0]);
        assert_eq!(r.gained, 16);
    }

    #[test]
    fn test_slide_unequal_stays() {
        let r = slide([2, 4, 8, 16]);
        assert_eq!(r.line, [2, 4, 8, 16]);
        assert_eq!(r.merges, 0);
    }

    #[test]
    fn test_slide_empty_line() {
        assert_eq!(slide([0; GRID_SIZE]).line, [0; GRID_SIZE]);
    }

    #[test]
    fn test_shift_right_merges_toward_edge() {
        let grid = Grid::from_rows([[2, 2, 2, 0], [0; 4], [0; 4], [0; 4]]);
        let s = shift(&grid, Direction::Right);
        assert_eq!(s.grid.row(0), Some([0, 0, 2, 4]));
        assert_eq!(s.gained, 4);
        assert!(s.moved);
    }

    #[test]
    fn test_shift_up_and_down_columns() {
        let grid = Grid::from_rows([[2, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0], [0, 0, 0, 0]]);

        let up = shift(&grid, Direction::Up);
        assert_eq!(up.grid.rows(), [[4, 0, 0, 0], [4, 0, 0, 0], [0; 4], [0; 4]]);
        assert_eq!(up.gained, 4);

        let down = shift(&grid, Direction::Down);
        // Scanning from the bottom: 4 stays, then 2+2 merge.
        assert_eq!(down.grid.rows(), [[0; 4], [0; 4], [4, 0, 0, 0], [4, 0, 0, 0]]);
        assert_eq!(down.gained, 4);
    }

    #[test]
    fn test_shift_reports_unmoved() {
        let grid = Grid::from_rows([[2, 4, 0, 0], [8, 0, 0, 0], [0; 4], [0; 4]]);
        let s = shift(&grid, Direction::Left);
        assert!(!s.moved);
        assert_eq!(s.grid, grid);
        assert_eq!(s.gained, 0);

        assert!(shift(&grid, Direction::Right).moved);
    }
}
