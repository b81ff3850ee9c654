use super::Grid;

impl Grid {
    // === Indexing ===

    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        debug_assert!(row < self.rows && col < self.cols, "cell ({row}, {col}) out of bounds");
        (row * self.cols + col) as usize
    }

    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.rows as i32 && col >= 0 && col < self.cols as i32
    }

    /// Read with a signed coordinate; anything outside the grid reads as 0
    #[inline]
    pub fn get_or_zero(&self, row: i32, col: i32) -> u8 {
        if !self.in_bounds(row, col) {
            return 0;
        }
        self.cells[self.index(row as u32, col as u32)]
    }

    #[inline]
    pub fn is_top_row(&self, row: u32) -> bool {
        row + 1 == self.rows
    }
}
