//! Torch energy to color
//!
//! Brightness is non-linear in energy: `ENERGY_MAP` lifts low energies
//! quickly and flattens out near the top. The resulting brightness is split
//! into channels by per-channel gains on top of a fixed bias.

use crate::core::utils::increase;
use crate::domain::color::Rgb;
use crate::domain::config::TorchConfig;

/// Brightness for energy `e`, indexed by `e >> 3`
pub const ENERGY_MAP: [u8; 32] = [
    0, 64, 96, 112, 128, 144, 152, 160, 168, 176, 184, 184, 192, 200, 200, 208, 208, 216, 216,
    224, 224, 224, 232, 232, 232, 240, 240, 240, 240, 248, 248, 248,
];

/// Energies above this render as the spark color
pub const SPARK_THRESHOLD: u8 = 250;

/// Color synthesis parameters, copied out of the torch config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TorchColors {
    pub background: Rgb,
    pub bias: Rgb,
    pub red_gain: u16,
    pub green_gain: u16,
    pub blue_gain: u16,
}

impl From<&TorchConfig> for TorchColors {
    fn from(c: &TorchConfig) -> Self {
        Self {
            background: c.background,
            bias: c.bias,
            red_gain: c.red_gain,
            green_gain: c.green_gain,
            blue_gain: c.blue_gain,
        }
    }
}

impl TorchColors {
    pub fn color(&self, energy: u8) -> Rgb {
        if energy > SPARK_THRESHOLD {
            // blueish extra-bright spark
            return Rgb::new(170, 170, energy);
        }
        if energy == 0 {
            return self.background;
        }
        let eb = ENERGY_MAP[(energy >> 3) as usize] as u32;
        Rgb::new(
            increase(self.bias.r, (eb * self.red_gain as u32) >> 8),
            increase(self.bias.g, (eb * self.green_gain as u32) >> 8),
            increase(self.bias.b, (eb * self.blue_gain as u32) >> 8),
        )
    }
}
