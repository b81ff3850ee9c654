//! Power limiting
//!
//! WS2812-class LEDs draw roughly 16/11/15 mA per fully lit red/green/blue
//! channel plus about 1 mA idle, at 5 V. Before a frame is shown, the global
//! brightness is scaled down until the estimated draw fits the supply.

use serde::{Deserialize, Serialize};

use crate::domain::color::Rgb;

const RED_MW: u64 = 16 * 5;
const GREEN_MW: u64 = 11 * 5;
const BLUE_MW: u64 = 15 * 5;
const DARK_MW: u64 = 5;

/// Supply limits; `milliamps == 0` disables limiting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PowerBudget {
    pub volts: u8,
    pub milliamps: u32,
}

impl Default for PowerBudget {
    fn default() -> Self {
        Self { volts: 5, milliamps: 2000 }
    }
}

impl PowerBudget {
    pub fn unlimited() -> Self {
        Self { volts: 5, milliamps: 0 }
    }

    #[inline]
    pub fn max_milliwatts(&self) -> u64 {
        self.volts as u64 * self.milliamps as u64
    }

    pub fn is_limited(&self) -> bool {
        self.milliamps > 0 && self.volts > 0
    }

    /// Largest brightness (never above `brightness`) whose estimated draw fits
    pub fn limit_brightness(&self, leds: &[Rgb], brightness: u8) -> u8 {
        if !self.is_limited() || brightness == 0 {
            return brightness;
        }

        let requested = estimate_milliwatts(leds, brightness);
        let budget = self.max_milliwatts();
        if requested <= budget {
            return brightness;
        }

        // The idle draw does not scale with brightness.
        let dark = leds.len() as u64 * DARK_MW;
        if budget <= dark {
            return 0;
        }
        let lit_at_full = unscaled_lit_milliwatts(leds);
        if lit_at_full == 0 {
            return brightness;
        }
        let scaled = ((budget - dark) * 256 / lit_at_full).min(brightness as u64);
        scaled as u8
    }
}

fn unscaled_lit_milliwatts(leds: &[Rgb]) -> u64 {
    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    for led in leds {
        r += led.r as u64;
        g += led.g as u64;
        b += led.b as u64;
    }
    (r * RED_MW + g * GREEN_MW + b * BLUE_MW) >> 8
}

/// Estimated draw of `leds` shown at `brightness`, in milliwatts
pub fn estimate_milliwatts(leds: &[Rgb], brightness: u8) -> u64 {
    let lit = unscaled_lit_milliwatts(leds) * brightness as u64 / 256;
    lit + leds.len() as u64 * DARK_MW
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dim_frame_is_untouched() {
        let leds = vec![Rgb::new(10, 0, 0); 225];
        assert_eq!(PowerBudget::default().limit_brightness(&leds, 128), 128);
    }

    #[test]
    fn white_frame_is_scaled_into_budget() {
        let leds = vec![Rgb::new(255, 255, 255); 225];
        let budget = PowerBudget::default();
        let limited = budget.limit_brightness(&leds, 255);
        assert!(limited < 255);
        assert!(estimate_milliwatts(&leds, limited) <= budget.max_milliwatts());
    }

    #[test]
    fn unlimited_budget_passes_through() {
        let leds = vec![Rgb::new(255, 255, 255); 225];
        assert_eq!(PowerBudget::unlimited().limit_brightness(&leds, 255), 255);
    }

    #[test]
    fn budget_below_idle_draw_blacks_out() {
        let leds = vec![Rgb::new(255, 255, 255); 225];
        let tiny = PowerBudget { volts: 5, milliamps: 10 };
        assert_eq!(tiny.limit_brightness(&leds, 200), 0);
    }
}
