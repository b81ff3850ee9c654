//! Mode controller
//!
//! Interprets encoder rotation and button events for the active mode.
//! Static-color parameters live here; simulation parameters live in the
//! engines, so rotation in a simulation mode yields an `Adjustment` for the
//! caller to apply.

use crate::domain::config::{ControlConfig, LampColorConfig, ModeKind};

/// A parameter change requested by rotation in a simulation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Add to fire dissipation (floored at 1 by the engine)
    Dissipation(i32),
    /// Step the fire palette by the sign of the value
    Palette(i32),
    /// Add to torch spark probability (percent)
    SparkProbability(i32),
    /// Add to torch passive heat retention
    HeatCap(i32),
}

#[derive(Debug, Clone)]
pub struct ModeController {
    modes: Vec<ModeKind>,
    index: usize,
    hold: bool,
    /// Time of the last accepted adjustment; boot counts as one
    last_adjust_ms: u32,
    adjust_interval_ms: u32,
    multiplier: i32,
    hue: i32,
    saturation: i32,
}

impl ModeController {
    /// `modes` must be non-empty; an empty list falls back to fire only.
    pub fn new(modes: &[ModeKind], controls: &ControlConfig, lamp: &LampColorConfig) -> Self {
        let modes = if modes.is_empty() {
            vec![ModeKind::Fire]
        } else {
            modes.to_vec()
        };
        Self {
            modes,
            index: 0,
            hold: false,
            last_adjust_ms: 0,
            adjust_interval_ms: controls.adjust_interval_ms,
            multiplier: controls.rotation_multiplier,
            hue: lamp.hue.clamp(0, 255),
            saturation: lamp.saturation.clamp(0, 255),
        }
    }

    pub fn mode(&self) -> ModeKind {
        self.modes[self.index]
    }

    pub fn mode_index(&self) -> usize {
        self.index
    }

    pub fn mode_count(&self) -> usize {
        self.modes.len()
    }

    pub fn is_held(&self) -> bool {
        self.hold
    }

    pub fn hue(&self) -> u8 {
        self.hue as u8
    }

    pub fn saturation(&self) -> u8 {
        self.saturation as u8
    }

    /// Next mode, wrapping to the first
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.modes.len();
    }

    /// Jump straight to mode `index` (wrapped into range)
    pub fn select(&mut self, index: usize) {
        self.index = index % self.modes.len();
    }

    // === Button ===

    /// Returns true when the event changed the active mode
    pub fn on_button(&mut self, event: super::ButtonEvent) -> bool {
        use super::ButtonEvent::*;
        match event {
            Held => self.hold = true,
            Released => self.hold = false,
            Clicked => {
                self.advance();
                return true;
            }
            Open | Pressed | DoubleClicked => {}
        }
        false
    }

    // === Rotation ===

    /// Interpret `delta` detents at time `now_ms`.
    ///
    /// Lamp mode applies immediately to hue or saturation and returns `None`.
    /// Simulation modes return an adjustment at most once per adjust
    /// interval; rotation inside the interval is dropped.
    pub fn on_rotation(&mut self, delta: i32, now_ms: u32) -> Option<Adjustment> {
        if delta == 0 {
            return None;
        }
        let scaled = delta.saturating_mul(self.multiplier);
        match self.mode() {
            ModeKind::Lamp => {
                if self.hold {
                    self.saturation = wrap_saturation(self.saturation.saturating_add(scaled));
                } else {
                    self.hue = wrap_hue(self.hue.saturating_add(scaled));
                }
                None
            }
            ModeKind::Fire => {
                if !self.adjust_gate(now_ms) {
                    return None;
                }
                Some(if self.hold {
                    Adjustment::Dissipation(scaled)
                } else {
                    Adjustment::Palette(delta.signum())
                })
            }
            ModeKind::Torch => {
                if !self.adjust_gate(now_ms) {
                    return None;
                }
                Some(if self.hold {
                    Adjustment::HeatCap(scaled)
                } else {
                    Adjustment::SparkProbability(delta)
                })
            }
        }
    }

    /// Opens when more than the adjust interval has passed since the last
    /// accepted adjustment, or since boot for the first one. Wrapping
    /// arithmetic keeps it valid across `u32` rollover.
    fn adjust_gate(&mut self, now_ms: u32) -> bool {
        let open = now_ms.wrapping_sub(self.last_adjust_ms) > self.adjust_interval_ms;
        if open {
            self.last_adjust_ms = now_ms;
        }
        open
    }
}

/// Negative hue wraps to `255 + hue`, past 255 to `hue - 256`
pub fn wrap_hue(hue: i32) -> i32 {
    let wrapped = if hue < 0 {
        255 + hue
    } else if hue > 255 {
        hue - 256
    } else {
        hue
    };
    wrapped.clamp(0, 255)
}

/// Negative saturation becomes 1, past 255 stays at 255
pub fn wrap_saturation(saturation: i32) -> i32 {
    if saturation < 0 {
        1
    } else {
        saturation.min(255)
    }
}
