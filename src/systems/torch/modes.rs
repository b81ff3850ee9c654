//! Per-cell energy modes of the torch

/// How a torch cell computes its next energy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum EnergyMode {
    /// Environment: glows from nearby radiation
    #[default]
    Passive = 0,
    /// Not processed this tick (freshly injected heat source)
    Nop = 1,
    /// Loses energy upward, seeds the cell above
    Spark = 2,
    /// Drains the cell below until it is exhausted
    SparkFeeding = 3,
}

/// Mode tag for every cell, same shape as the energy grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeGrid {
    rows: u32,
    cols: u32,
    modes: Vec<EnergyMode>,
}

impl ModeGrid {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            modes: vec![EnergyMode::Passive; (rows * cols) as usize],
        }
    }

    #[inline]
    fn index(&self, row: u32, col: u32) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        (row * self.cols + col) as usize
    }

    #[inline]
    pub fn get(&self, row: u32, col: u32) -> EnergyMode {
        self.modes[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: u32, col: u32, mode: EnergyMode) {
        let idx = self.index(row, col);
        self.modes[idx] = mode;
    }

    pub fn reset(&mut self) {
        self.modes.fill(EnergyMode::Passive);
    }

    /// Number of cells currently in `mode`
    pub fn count(&self, mode: EnergyMode) -> usize {
        self.modes.iter().filter(|m| **m == mode).count()
    }
}
