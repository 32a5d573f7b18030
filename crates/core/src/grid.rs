//! Grid module - the 4x4 tile field
//!
//! Cells are stored in a flat row-major array for cache locality and so the
//! whole grid is `Copy`. Coordinates are `(row, col)`, both in `0..GRID_SIZE`,
//! with `(0, 0)` at the top-left corner. A cell value of `0` is empty.

use arrayvec::ArrayVec;

use crate::types::{Cell, Line, Rows, CELL_COUNT, GRID_SIZE};

/// Coordinates of every empty cell, in row-major order
pub type EmptyCells = ArrayVec<(u8, u8), CELL_COUNT>;

/// The game grid - 4 rows x 4 columns using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a grid from row-major nested arrays
    pub fn from_rows(rows: Rows) -> Self {
        let mut grid = Self::new();
        for (chunk, line) in grid.cells.chunks_exact_mut(GRID_SIZE).zip(rows.iter()) {
            chunk.copy_from_slice(line);
        }
        grid
    }

    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        GRID_SIZE
    }

    /// Get cell at (row, col). Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Copy out one row. Returns None if out of bounds
    pub fn row(&self, row: usize) -> Option<Line> {
        let start = Self::index(row, 0)?;
        let mut line = [0; GRID_SIZE];
        line.copy_from_slice(&self.cells[start..start + GRID_SIZE]);
        Some(line)
    }

    /// Overwrite one row. Returns false if out of bounds
    pub fn set_row(&mut self, row: usize, line: Line) -> bool {
        match Self::index(row, 0) {
            Some(start) => {
                self.cells[start..start + GRID_SIZE].copy_from_slice(&line);
                true
            }
            None => false,
        }
    }

    /// Return the transposed grid (rows become columns)
    pub fn transpose(&self) -> Self {
        let mut out = Self::new();
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                out.cells[c * GRID_SIZE + r] = self.cells[r * GRID_SIZE + c];
            }
        }
        out
    }

    /// Row-major nested copy of the cells
    pub fn rows(&self) -> Rows {
        let mut out = [[0; GRID_SIZE]; GRID_SIZE];
        self.write_rows(&mut out);
        out
    }

    /// Write the cells into an existing nested array (no allocation)
    pub fn write_rows(&self, out: &mut Rows) {
        for (line, chunk) in out.iter_mut().zip(self.cells.chunks_exact(GRID_SIZE)) {
            line.copy_from_slice(chunk);
        }
    }

    /// Collect the coordinates of every empty cell
    pub fn empty_cells(&self) -> EmptyCells {
        let mut out = ArrayVec::new();
        for (idx, &value) in self.cells.iter().enumerate() {
            if value == 0 {
                out.push(((idx / GRID_SIZE) as u8, (idx % GRID_SIZE) as u8));
            }
        }
        out
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Number of non-empty cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }

    /// Check if any cell holds `value`
    pub fn contains(&self, value: Cell) -> bool {
        self.cells.contains(&value)
    }

    /// Largest tile on the grid (0 for an empty grid)
    pub fn max_tile(&self) -> Cell {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// True when every cell is empty or a power of two no smaller than 2.
    pub fn has_valid_tiles(&self) -> bool {
        self.cells.iter().all(|&v| v == 0 || (v >= 2 && v.is_power_of_two()))
    }

    /// Check whether any move could still change the grid.
    ///
    /// True if an empty cell exists or two horizontally/vertically adjacent
    /// cells hold the same value.
    pub fn has_available_moves(&self) -> bool {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                let v = self.cells[r * GRID_SIZE + c];
                if v == 0 {
                    return true;
                }
                if c + 1 < GRID_SIZE && v == self.cells[r * GRID_SIZE + c + 1] {
                    return true;
                }
                if r + 1 < GRID_SIZE && v == self.cells[(r + 1) * GRID_SIZE + c] {
                    return true;
                }
            }
        }
        false
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Rows> for Grid {
    fn from(rows: Rows) -> Self {
        Self::from_rows(rows)
    }
}

/// Pure terminal-state predicate over a grid.
pub fn has_available_moves(grid: &Grid) -> bool {
    grid.has_available_moves()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(0, 3), Some(3));
        assert_eq!(Grid::index(1, 0), Some(4));
        assert_eq!(Grid::index(3, 3), Some(15));
        assert_eq!(Grid::index(4, 0), None);
        assert_eq!(Grid::index(0, 4), None);
    }

    #[test]
    fn test_grid_flat_array() {
        let mut grid = Grid::new();
        assert!(grid.set(0, 0, 2));
        assert!(grid.set(2, 1, 8));
        assert!(!grid.set(4, 0, 2));

        assert_eq!(grid.cells[0], 2);
        assert_eq!(grid.cells[2 * 4 + 1], 8);
        assert_eq!(grid.get(2, 1), Some(8));
        assert_eq!(grid.get(0, 9), None);
    }

    #[test]
    fn test_transpose_is_involution() {
        let grid = Grid::from_rows([[2, 4, 8, 16], [0, 2, 0, 4], [0, 0, 0, 0], [32, 0, 0, 2]]);
        let t = grid.transpose();

        assert_eq!(t.row(0), Some([2, 0, 0, 32]));
        assert_eq!(t.row(3), Some([16, 4, 0, 2]));
        assert_eq!(t.transpose(), grid);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let grid = Grid::from_rows([[2, 0, 2, 2], [2, 2, 2, 2], [2, 2, 2, 2], [2, 2, 2, 0]]);
        let empty = grid.empty_cells();
        assert_eq!(empty.as_slice(), &[(0, 1), (3, 3)]);
        assert!(!grid.is_full());
        assert_eq!(grid.tile_count(), 14);
    }

    #[test]
    fn test_has_available_moves_empty_cell() {
        let mut grid = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(!grid.has_available_moves());

        grid.set(1, 1, 0);
        assert!(grid.has_available_moves());
    }

    #[test]
    fn test_has_available_moves_adjacent_pairs() {
        // Horizontal pair in the last row.
        let horizontal = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 8]]);
        assert!(horizontal.has_available_moves());

        // Vertical pair in the last column.
        let vertical = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 16], [4, 2, 4, 16]]);
        assert!(vertical.has_available_moves());
    }

    #[test]
    fn test_max_tile_and_sum() {
        let grid = Grid::from_rows([[2, 0, 0, 0], [0, 128, 0, 0], [0, 0, 4, 0], [0, 0, 0, 0]]);
        assert_eq!(grid.max_tile(), 128);
        assert_eq!(grid.tile_sum(), 134);
        assert!(grid.contains(4));
        assert!(!grid.contains(2048));
        assert_eq!(Grid::new().max_tile(), 0);
    }

    #[test]
    fn test_row_access_is_bounds_checked() {
        let mut grid = Grid::new();
        assert_eq!(grid.row(GRID_SIZE), None);
        assert!(!grid.set_row(GRID_SIZE, [2; GRID_SIZE]));
        assert_eq!(grid, Grid::new());

        assert!(grid.set_row(3, [2, 4, 8, 16]));
        assert_eq!(grid.row(3), Some([2, 4, 8, 16]));
    }

    #[test]
    fn test_has_valid_tiles() {
        assert!(Grid::new().has_valid_tiles());
        assert!(Grid::from_rows([[2, 4, 0, 0], [0; 4], [0; 4], [0, 0, 0, 1 << 31]]).has_valid_tiles());
        assert!(!Grid::from_rows([[3, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).has_valid_tiles());
        assert!(!Grid::from_rows([[1, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).has_valid_tiles());
    }
}
