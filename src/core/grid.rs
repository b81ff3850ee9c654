//! Grid - fixed-size energy field
//!
//! One byte of energy ("heat") per LED, stored row-major in a single
//! contiguous Vec. Row 0 is the bottom of the lamp (the heat source), the
//! last row is the top.
//!
//! The grid is sized once from configuration and never resized; engines
//! that need a second generation allocate a second Grid of the same shape.

mod edges;
mod indexing;

pub use edges::EdgePolicy;

/// Row-major grid of 8-bit energy values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<u8>,
}

impl Grid {
    pub fn new(rows: u32, cols: u32) -> Self {
        let size = (rows as usize).saturating_mul(cols as usize);
        Self {
            rows,
            cols,
            cells: vec![0; size],
        }
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    // === Cell access ===

    #[inline]
    pub fn get(&self, row: u32, col: u32) -> u8 {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: u32, col: u32, value: u8) {
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// Mutable reference to one cell, for in-place saturating updates
    #[inline]
    pub fn cell_mut(&mut self, row: u32, col: u32) -> &mut u8 {
        let idx = self.index(row, col);
        &mut self.cells[idx]
    }

    /// One row, left to right
    pub fn row(&self, row: u32) -> &[u8] {
        let start = self.index(row, 0);
        &self.cells[start..start + self.cols as usize]
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    pub fn fill(&mut self, value: u8) {
        self.cells.fill(value);
    }

    pub fn clear(&mut self) {
        self.fill(0);
    }

    /// Largest energy in the grid (0 for an all-dark grid)
    pub fn max_energy(&self) -> u8 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Swap contents with a same-shaped grid (double buffering)
    pub fn swap_with(&mut self, other: &mut Grid) {
        debug_assert_eq!((self.rows, self.cols), (other.rows, other.cols));
        std::mem::swap(&mut self.cells, &mut other.cells);
    }
}
