//! Energy-transfer torch
//!
//! Every cell carries an energy value and an `EnergyMode`. Each tick:
//! - inject: the bottom row gets fresh random flame energy, the second row
//!   may ignite random sparks
//! - compute: every cell derives its next energy from the live grid
//!   according to its mode, writing into a second buffer
//! - commit: the two buffers are swapped
//!
//! Modes are a single buffer and change during the compute pass: a spark
//! promotes the cell above to `SparkFeeding` before that cell is visited,
//! an exhausted feeder demotes the cell below to `Passive` and becomes a
//! spark itself.
//!
//! Even strip columns are wired bottom-to-top; `upside_down` mirrors rows.

mod colorize;
mod modes;

pub use colorize::{TorchColors, ENERGY_MAP, SPARK_THRESHOLD};
pub use modes::{EnergyMode, ModeGrid};

use crate::core::grid::{EdgePolicy, Grid};
use crate::core::utils::{increase, reduce, scale8, Rng};
use crate::domain::color::Rgb;
use crate::domain::config::TorchConfig;
use crate::spatial::{ColumnRun, SerpentineLayout};

use super::Effect;

pub struct TorchFire {
    energy: Grid,
    next: Grid,
    modes: ModeGrid,
    params: TorchConfig,
    colors: TorchColors,
    layout: SerpentineLayout,
}

impl TorchFire {
    pub fn new(rows: u32, cols: u32, config: &TorchConfig) -> Self {
        Self {
            energy: Grid::new(rows, cols),
            next: Grid::new(rows, cols),
            modes: ModeGrid::new(rows, cols),
            params: config.clone(),
            colors: TorchColors::from(config),
            layout: SerpentineLayout::new(rows, cols, ColumnRun::BottomUp)
                .flipped(config.upside_down),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.energy
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.energy
    }

    pub fn modes(&self) -> &ModeGrid {
        &self.modes
    }

    pub fn modes_mut(&mut self) -> &mut ModeGrid {
        &mut self.modes
    }

    pub fn params(&self) -> &TorchConfig {
        &self.params
    }

    pub fn layout(&self) -> &SerpentineLayout {
        &self.layout
    }

    // === Parameters ===

    /// Adjust spark probability, clamped to 0..=100 percent
    pub fn adjust_spark_probability(&mut self, amount: i32) {
        let p = (self.params.spark_probability as i32).saturating_add(amount).clamp(0, 100);
        self.params.spark_probability = p as u8;
    }

    /// Adjust passive heat retention, clamped to 0..=255
    pub fn adjust_heat_cap(&mut self, amount: i32) {
        let cap = (self.params.heat_cap as i32).saturating_add(amount).clamp(0, 255);
        self.params.heat_cap = cap as u16;
    }

    pub fn set_upside_down(&mut self, upside_down: bool) {
        self.params.upside_down = upside_down;
        self.layout = self.layout.flipped(upside_down);
    }

    // === Tick phases ===

    /// Fresh flame energy at the bottom, random sparks on the row above
    pub fn inject(&mut self, rng: &mut Rng) {
        let p = &self.params;
        let cols = self.energy.cols();

        for col in 0..cols {
            let e = rng.range_inclusive(p.flame_min as u32, p.flame_max as u32);
            self.energy.set(0, col, e as u8);
            self.modes.set(0, col, EnergyMode::Nop);
        }

        if self.energy.rows() < 2 {
            return;
        }
        for col in 0..cols {
            if self.modes.get(1, col) != EnergyMode::Spark
                && rng.range_inclusive(0, 100) < p.spark_probability as u32
            {
                let e = rng.range_inclusive(p.spark_min as u32, p.spark_max as u32);
                self.energy.set(1, col, e as u8);
                self.modes.set(1, col, EnergyMode::Spark);
            }
        }
    }

    /// Fill the next buffer from the live grid
    pub fn compute_next(&mut self) {
        let rows = self.energy.rows();
        let cols = self.energy.cols();
        let transfer = self.params.spark_transfer;

        for col in 0..cols {
            for row in 0..rows {
                let mut e = self.energy.get(row, col);
                match self.modes.get(row, col) {
                    EnergyMode::Spark => {
                        e = reduce(e, transfer as u32);
                        if !self.energy.is_top_row(row) {
                            self.modes.set(row + 1, col, EnergyMode::SparkFeeding);
                        }
                    }
                    EnergyMode::SparkFeeding => {
                        let below = self.energy.get_or_zero(row as i32 - 1, col as i32);
                        if below < transfer {
                            if row > 0 {
                                self.modes.set(row - 1, col, EnergyMode::Passive);
                            }
                            e = increase(e, below as u32);
                            e = scale8(e, self.params.spark_cap);
                            self.modes.set(row, col, EnergyMode::Spark);
                        } else {
                            e = increase(e, transfer as u32);
                        }
                    }
                    EnergyMode::Passive => {
                        e = scale8(e, self.params.heat_cap);
                        e = increase(e, self.radiation(row, col));
                    }
                    EnergyMode::Nop => {}
                }
                self.next.set(row, col, e);
            }
        }
    }

    /// Energy a passive cell receives from its side and lower neighbours
    fn radiation(&self, row: u32, col: u32) -> u32 {
        let edges = self.params.edges;
        let left = self.energy.horizontal_neighbor(row, col, -1, edges) as u32;
        let right = self.energy.horizontal_neighbor(row, col, 1, edges) as u32;
        let below = self.energy.get_or_zero(row as i32 - 1, col as i32) as u32;

        let side = ((left + right) * self.params.side_radiation as u32) >> 9;
        let up = (below * self.params.up_radiation as u32) >> 8;
        (side + up).min(u8::MAX as u32)
    }

    /// Next buffer becomes the live grid
    pub fn commit(&mut self) {
        self.energy.swap_with(&mut self.next);
    }
}

impl Effect for TorchFire {
    fn name(&self) -> &'static str {
        "torch"
    }

    fn step(&mut self, rng: &mut Rng) {
        self.inject(rng);
        self.compute_next();
        self.commit();
    }

    fn render(&self, leds: &mut [Rgb]) {
        for col in 0..self.energy.cols() {
            for row in 0..self.energy.rows() {
                let idx = self.layout.index(row, col);
                if let Some(led) = leds.get_mut(idx) {
                    *led = self.colors.color(self.energy.get(row, col));
                }
            }
        }
    }

    fn reset(&mut self) {
        self.energy.clear();
        self.next.clear();
        self.modes.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_config() -> TorchConfig {
        TorchConfig {
            spark_probability: 0,
            ..TorchConfig::default()
        }
    }

    #[test]
    fn inject_seeds_bottom_rows() {
        let mut torch = TorchFire::new(15, 10, &TorchConfig {
            spark_probability: 100,
            ..TorchConfig::default()
        });
        let mut rng = Rng::new(1);
        torch.inject(&mut rng);
        for col in 0..10 {
            let e = torch.grid().get(0, col);
            assert!((100..=220).contains(&e));
            assert_eq!(torch.modes().get(0, col), EnergyMode::Nop);
            // 100 percent: every draw in [0, 100] that is below 100 ignites
            if torch.modes().get(1, col) == EnergyMode::Spark {
                assert!(torch.grid().get(1, col) >= 200);
            }
        }
        assert!(torch.modes().count(EnergyMode::Spark) > 0);
    }

    #[test]
    fn existing_sparks_are_not_reignited() {
        let mut torch = TorchFire::new(4, 3, &TorchConfig {
            spark_probability: 100,
            ..TorchConfig::default()
        });
        torch.modes_mut().set(1, 1, EnergyMode::Spark);
        torch.grid_mut().set(1, 1, 7);
        let mut rng = Rng::new(9);
        torch.inject(&mut rng);
        assert_eq!(torch.grid().get(1, 1), 7);
    }

    #[test]
    fn spark_loses_energy_and_promotes_cell_above() {
        let mut torch = TorchFire::new(5, 1, &quiet_config());
        torch.modes_mut().set(2, 0, EnergyMode::Spark);
        torch.grid_mut().set(2, 0, 100);
        torch.compute_next();
        torch.commit();
        assert_eq!(torch.grid().get(2, 0), 60);
        assert_eq!(torch.modes().get(3, 0), EnergyMode::SparkFeeding);
    }

    #[test]
    fn spark_in_top_row_promotes_nothing() {
        let mut torch = TorchFire::new(3, 1, &quiet_config());
        torch.modes_mut().set(2, 0, EnergyMode::Spark);
        torch.grid_mut().set(2, 0, 10);
        torch.compute_next();
        torch.commit();
        assert_eq!(torch.grid().get(2, 0), 0);
    }

    #[test]
    fn feeder_with_exhausted_source_becomes_spark() {
        let mut torch = TorchFire::new(6, 1, &quiet_config());
        let mut rng = Rng::new(4);
        // below energy 10 < transfer 40
        torch.modes_mut().set(2, 0, EnergyMode::Spark);
        torch.grid_mut().set(2, 0, 10);
        torch.modes_mut().set(3, 0, EnergyMode::SparkFeeding);
        torch.grid_mut().set(3, 0, 100);

        torch.step(&mut rng);

        assert_eq!(torch.modes().get(2, 0), EnergyMode::Passive);
        assert_eq!(torch.modes().get(3, 0), EnergyMode::Spark);
        // (100 + 10) * 200 / 256
        assert_eq!(torch.grid().get(3, 0), 85);
    }

    #[test]
    fn feeder_with_rich_source_keeps_drawing() {
        let mut torch = TorchFire::new(6, 1, &quiet_config());
        torch.modes_mut().set(2, 0, EnergyMode::Spark);
        torch.grid_mut().set(2, 0, 200);
        torch.modes_mut().set(3, 0, EnergyMode::SparkFeeding);
        torch.grid_mut().set(3, 0, 50);
        torch.compute_next();
        torch.commit();
        assert_eq!(torch.modes().get(3, 0), EnergyMode::SparkFeeding);
        assert_eq!(torch.grid().get(3, 0), 90);
        assert_eq!(torch.grid().get(2, 0), 160);
    }

    #[test]
    fn passive_cells_decay_and_absorb_radiation() {
        let mut torch = TorchFire::new(3, 3, &quiet_config());
        torch.grid_mut().set(1, 1, 200);
        torch.grid_mut().set(0, 1, 200);
        torch.grid_mut().set(1, 0, 100);
        torch.grid_mut().set(1, 2, 100);
        torch.modes_mut().set(0, 1, EnergyMode::Nop);
        torch.compute_next();
        torch.commit();
        // heat_cap 0 wipes own energy; (100+100)*35>>9 = 13, 200*40>>8 = 31
        assert_eq!(torch.grid().get(1, 1), 44);
        assert_eq!(torch.grid().get(0, 1), 200);
    }

    #[test]
    fn edge_policy_changes_edge_radiation() {
        let mut clamp = TorchFire::new(2, 3, &quiet_config());
        clamp.grid_mut().set(1, 0, 255);
        let mut zero = TorchFire::new(2, 3, &TorchConfig {
            edges: EdgePolicy::Zero,
            ..quiet_config()
        });
        zero.grid_mut().set(1, 0, 255);
        for t in [&mut clamp, &mut zero] {
            t.modes_mut().set(0, 0, EnergyMode::Nop);
            t.modes_mut().set(0, 1, EnergyMode::Nop);
            t.modes_mut().set(0, 2, EnergyMode::Nop);
            t.compute_next();
            t.commit();
        }
        // clamp reads itself (255) as the left neighbour, zero reads dark
        assert_eq!(clamp.grid().get(1, 0), ((255u32 * 35) >> 9) as u8);
        assert_eq!(zero.grid().get(1, 0), 0);
    }

    #[test]
    fn compute_reads_one_generation() {
        let mut torch = TorchFire::new(3, 3, &TorchConfig {
            heat_cap: 256,
            ..quiet_config()
        });
        for col in 0..3 {
            torch.modes_mut().set(0, col, EnergyMode::Nop);
        }
        torch.grid_mut().set(1, 0, 250);
        let snapshot = torch.grid().clone();
        torch.compute_next();
        // live grid untouched until commit
        assert_eq!(torch.grid(), &snapshot);
        torch.commit();
        // column 1 saw the old value of column 0, not a freshly computed one
        assert_eq!(torch.grid().get(1, 1), ((250u32 * 35) >> 9) as u8);
    }

    #[test]
    fn reset_clears_energy_and_modes() {
        let mut torch = TorchFire::new(4, 4, &TorchConfig::default());
        let mut rng = Rng::new(8);
        for _ in 0..10 {
            torch.step(&mut rng);
        }
        torch.reset();
        assert_eq!(torch.grid().max_energy(), 0);
        assert_eq!(torch.modes().count(EnergyMode::Passive), 16);
    }

    #[test]
    fn render_follows_upside_down_flag() {
        let mut torch = TorchFire::new(3, 1, &quiet_config());
        torch.grid_mut().set(0, 0, 255);
        let mut leds = vec![Rgb::BLACK; 3];
        torch.render(&mut leds);
        assert_eq!(leds[0], Rgb::new(170, 170, 255));

        torch.set_upside_down(true);
        torch.render(&mut leds);
        assert_eq!(leds[2], Rgb::new(170, 170, 255));
        assert_eq!(leds[0], Rgb::BLACK);
    }

    #[test]
    fn parameter_adjustments_clamp() {
        let mut torch = TorchFire::new(2, 2, &TorchConfig::default());
        torch.adjust_spark_probability(-50);
        assert_eq!(torch.params().spark_probability, 0);
        torch.adjust_spark_probability(500);
        assert_eq!(torch.params().spark_probability, 100);
        torch.adjust_heat_cap(1000);
        assert_eq!(torch.params().heat_cap, 255);
        torch.adjust_heat_cap(-1000);
        assert_eq!(torch.params().heat_cap, 0);
    }
}
