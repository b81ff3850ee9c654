//! Serpentine layout - grid position to LED index
//!
//! The LED strip is strung column by column in a zig-zag: one column runs
//! up, the next runs down. LED index of `(row, col)` is therefore
//! `col * rows + r'`, where `r'` is the row counted along the strip
//! direction of that column.

/// Direction the strip runs through a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRun {
    /// First LED of the column sits at row 0 (bottom)
    BottomUp,
    /// First LED of the column sits at the top row
    TopDown,
}

impl ColumnRun {
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            ColumnRun::BottomUp => ColumnRun::TopDown,
            ColumnRun::TopDown => ColumnRun::BottomUp,
        }
    }
}

/// Physical wiring of a rows x cols matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerpentineLayout {
    pub rows: u32,
    pub cols: u32,
    /// Run direction of even columns; odd columns run the other way
    pub even_columns: ColumnRun,
    /// Mirror rows before wiring (upside-down mounting)
    pub flip_vertical: bool,
}

impl SerpentineLayout {
    pub fn new(rows: u32, cols: u32, even_columns: ColumnRun) -> Self {
        Self {
            rows,
            cols,
            even_columns,
            flip_vertical: false,
        }
    }

    pub fn flipped(mut self, flip_vertical: bool) -> Self {
        self.flip_vertical = flip_vertical;
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        (self.rows * self.cols) as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Strip direction of column `col`
    #[inline]
    pub fn column_run(&self, col: u32) -> ColumnRun {
        if col % 2 == 0 {
            self.even_columns
        } else {
            self.even_columns.reversed()
        }
    }

    /// LED index of grid cell `(row, col)`
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        let top = self.rows - 1;
        let row = if self.flip_vertical { top - row } else { row };
        let along = match self.column_run(col) {
            ColumnRun::BottomUp => row,
            ColumnRun::TopDown => top - row,
        };
        (col * self.rows + along) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_up_even_columns() {
        let layout = SerpentineLayout::new(3, 2, ColumnRun::BottomUp);
        // column 0 runs up, column 1 runs down
        assert_eq!(layout.index(0, 0), 0);
        assert_eq!(layout.index(2, 0), 2);
        assert_eq!(layout.index(2, 1), 3);
        assert_eq!(layout.index(0, 1), 5);
    }

    #[test]
    fn top_down_even_columns() {
        let layout = SerpentineLayout::new(3, 2, ColumnRun::TopDown);
        assert_eq!(layout.index(2, 0), 0);
        assert_eq!(layout.index(0, 0), 2);
        assert_eq!(layout.index(0, 1), 3);
        assert_eq!(layout.index(2, 1), 5);
    }

    #[test]
    fn flip_mirrors_rows() {
        let plain = SerpentineLayout::new(4, 3, ColumnRun::BottomUp);
        let flipped = plain.flipped(true);
        for col in 0..3 {
            for row in 0..4 {
                assert_eq!(flipped.index(row, col), plain.index(3 - row, col));
            }
        }
    }

    #[test]
    fn mapping_is_a_bijection() {
        for &(rows, cols) in &[(15, 15), (15, 10), (15, 14), (1, 1), (1, 7), (6, 1)] {
            for run in [ColumnRun::BottomUp, ColumnRun::TopDown] {
                for flip in [false, true] {
                    let layout = SerpentineLayout::new(rows, cols, run).flipped(flip);
                    let mut seen = vec![false; layout.len()];
                    for col in 0..cols {
                        for row in 0..rows {
                            let i = layout.index(row, col);
                            assert!(!seen[i], "index {i} produced twice");
                            seen[i] = true;
                        }
                    }
                    assert!(seen.iter().all(|s| *s));
                }
            }
        }
    }
}
