//! Cooling-diffusion fire
//!
//! Classic heat-map fire in three passes per tick:
//! 1. every cell cools by a random amount scaled by `dissipation`
//! 2. heat drifts upward, each cell becoming a weighted average of the two
//!    cells below it
//! 3. random sparks ignite near the bottom
//!
//! The heat map is rendered through a 256-entry gradient palette. Even
//! columns of the strip are wired top-to-bottom.

use crate::core::grid::Grid;
use crate::core::utils::Rng;
use crate::domain::color::Rgb;
use crate::domain::config::FireConfig;
use crate::domain::palettes::{step_palette_index, PaletteSet};
use crate::spatial::{ColumnRun, SerpentineLayout};

use super::Effect;

/// Lowest row touched by the upward diffusion pass
const DIFFUSE_FROM_ROW: u32 = 3;

pub struct CoolingFire {
    heat: Grid,
    layout: SerpentineLayout,
    palettes: PaletteSet,
    palette: usize,
    dissipation: i32,
    sparking: u16,
    spark_rows: u32,
    spark_heat_min: u8,
    spark_heat_max: u8,
}

impl CoolingFire {
    pub fn new(rows: u32, cols: u32, config: &FireConfig) -> Self {
        let palettes = PaletteSet::builtin();
        let palette = config.palette % palettes.len();
        Self {
            heat: Grid::new(rows, cols),
            layout: SerpentineLayout::new(rows, cols, ColumnRun::TopDown),
            palettes,
            palette,
            dissipation: config.dissipation.max(1),
            sparking: config.sparking,
            spark_rows: config.spark_rows,
            spark_heat_min: config.spark_heat_min,
            spark_heat_max: config.spark_heat_max,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.heat
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.heat
    }

    pub fn layout(&self) -> &SerpentineLayout {
        &self.layout
    }

    // === Parameters ===

    pub fn dissipation(&self) -> i32 {
        self.dissipation
    }

    /// Set dissipation, floored at 1
    pub fn set_dissipation(&mut self, dissipation: i32) {
        self.dissipation = dissipation.max(1);
    }

    pub fn adjust_dissipation(&mut self, amount: i32) {
        self.set_dissipation(self.dissipation.saturating_add(amount));
    }

    pub fn palette_index(&self) -> usize {
        self.palette
    }

    pub fn palette_name(&self) -> &'static str {
        self.palettes.get(self.palette).name()
    }

    /// Move one palette forward or back by the sign of `delta`
    pub fn step_palette(&mut self, delta: i32) {
        self.palette = step_palette_index(self.palette, delta, self.palettes.len());
    }

    /// Exclusive upper bound of the per-cell cooling draw
    pub fn cooling_bound(&self) -> u32 {
        let rows = self.heat.rows().max(1) as i64;
        let bound = self.dissipation as i64 * 10 / rows + 2;
        bound.clamp(1, u8::MAX as i64) as u32
    }

    // === Passes ===

    /// Pass 1: every cell loses a random amount, never below zero
    pub fn cool(&mut self, rng: &mut Rng) {
        let bound = self.cooling_bound();
        for cell in self.heat.cells_mut() {
            *cell = cell.saturating_sub(rng.below(bound) as u8);
        }
    }

    /// Pass 2: heat drifts up. Rows are visited top-down so every read comes
    /// from a row this pass has not written yet.
    pub fn diffuse(&mut self) {
        let rows = self.heat.rows();
        if rows <= DIFFUSE_FROM_ROW {
            return;
        }
        for col in 0..self.heat.cols() {
            for row in (DIFFUSE_FROM_ROW..rows).rev() {
                let below1 = self.heat.get(row - 1, col) as u32;
                let below2 = self.heat.get(row - 2, col) as u32;
                self.heat.set(row, col, ((below1 + 2 * below2) / 3) as u8);
            }
        }
    }

    /// Pass 3: each column may ignite one spark near the bottom
    pub fn spark(&mut self, rng: &mut Rng) {
        let spark_rows = self.spark_rows.min(self.heat.rows());
        if spark_rows == 0 {
            return;
        }
        for col in 0..self.heat.cols() {
            if rng.chance256(self.sparking) {
                let row = rng.below(spark_rows);
                let add = rng.range(self.spark_heat_min as u32, self.spark_heat_max as u32);
                let cell = self.heat.cell_mut(row, col);
                *cell = cell.saturating_add(add.min(u8::MAX as u32) as u8);
            }
        }
    }
}

impl Effect for CoolingFire {
    fn name(&self) -> &'static str {
        "fire"
    }

    fn step(&mut self, rng: &mut Rng) {
        self.cool(rng);
        self.diffuse();
        self.spark(rng);
    }

    fn render(&self, leds: &mut [Rgb]) {
        let palette = self.palettes.get(self.palette);
        for col in 0..self.heat.cols() {
            for row in 0..self.heat.rows() {
                let idx = self.layout.index(row, col);
                if let Some(led) = leds.get_mut(idx) {
                    *led = palette.color(self.heat.get(row, col));
                }
            }
        }
    }

    fn reset(&mut self) {
        self.heat.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire(rows: u32, cols: u32) -> CoolingFire {
        CoolingFire::new(rows, cols, &FireConfig::default())
    }

    #[test]
    fn cooling_bound_follows_dissipation() {
        let mut f = fire(15, 15);
        assert_eq!(f.cooling_bound(), 70 * 10 / 15 + 2);
        f.set_dissipation(-20);
        assert_eq!(f.dissipation(), 1);
        assert_eq!(f.cooling_bound(), 2);
        f.set_dissipation(10_000);
        assert_eq!(f.cooling_bound(), 255);
    }

    #[test]
    fn cooling_never_raises_a_cell() {
        let mut f = fire(15, 15);
        let mut rng = Rng::new(3);
        for (i, cell) in f.grid_mut().cells_mut().iter_mut().enumerate() {
            *cell = (i * 37 % 256) as u8;
        }
        let before = f.grid().clone();
        f.cool(&mut rng);
        for (a, b) in before.cells().iter().zip(f.grid().cells()) {
            assert!(b <= a);
        }
    }

    #[test]
    fn diffusion_reads_previous_values() {
        let mut f = fire(6, 1);
        for row in 0..6 {
            f.grid_mut().set(row, 0, (row as u8 + 1) * 30);
        }
        let old = f.grid().clone();
        f.diffuse();
        for row in 0..3 {
            assert_eq!(f.grid().get(row, 0), old.get(row, 0));
        }
        for row in 3..6 {
            let expected = (old.get(row - 1, 0) as u32 + 2 * old.get(row - 2, 0) as u32) / 3;
            assert_eq!(f.grid().get(row, 0) as u32, expected, "row {row}");
        }
    }

    #[test]
    fn sparks_stay_near_the_bottom() {
        let mut f = fire(15, 15);
        let mut rng = Rng::new(11);
        for _ in 0..50 {
            f.spark(&mut rng);
        }
        for row in 7..15 {
            assert!(f.grid().row(row).iter().all(|&h| h == 0), "row {row} got a spark");
        }
        assert!(f.grid().max_energy() >= 160);
    }

    #[test]
    fn short_grid_limits_spark_rows() {
        let mut f = fire(2, 4);
        let mut rng = Rng::new(5);
        for _ in 0..20 {
            f.step(&mut rng);
        }
        assert_eq!(f.grid().size(), 8);
    }

    #[test]
    fn palette_cycles_both_directions() {
        let mut f = fire(4, 4);
        for _ in 0..5 {
            f.step_palette(1);
        }
        assert_eq!(f.palette_index(), 0);
        f.step_palette(-1);
        assert_eq!(f.palette_index(), 4);
        assert_eq!(f.palette_name(), "violet");
    }

    #[test]
    fn render_uses_top_down_even_columns() {
        let mut f = fire(3, 2);
        f.grid_mut().set(2, 0, 255);
        let mut leds = vec![Rgb::BLACK; 6];
        f.render(&mut leds);
        // top of column 0 is the first LED
        assert_eq!(leds[0], Rgb::new(255, 240, 204));
        assert_eq!(leds[1], Rgb::BLACK);
    }

    #[test]
    fn hundred_ticks_keep_burning() {
        let mut f = fire(15, 15);
        let mut rng = Rng::new(2024);
        for _ in 0..100 {
            f.step(&mut rng);
        }
        let bottom_lit = (0..7).any(|row| f.grid().row(row).iter().any(|&h| h > 0));
        assert!(bottom_lit);
    }
}
