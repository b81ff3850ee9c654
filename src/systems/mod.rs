//! Simulation systems
//!
//! - cooling/ - cooling-diffusion fire rendered through a palette
//! - torch/   - energy-transfer torch with per-cell modes

pub mod cooling;
pub mod torch;

pub use cooling::CoolingFire;
pub use torch::{EnergyMode, TorchFire};

use crate::core::utils::Rng;
use crate::domain::color::Rgb;

/// A grid automaton that can be advanced and drawn onto the strip
pub trait Effect {
    /// Short name used in status lines
    fn name(&self) -> &'static str;

    /// Advance one tick
    fn step(&mut self, rng: &mut Rng);

    /// Write the current state into `leds` (physical strip order)
    fn render(&self, leds: &mut [Rgb]);

    /// Back to a dark grid
    fn reset(&mut self);
}
