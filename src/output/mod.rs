//! Output sinks
//!
//! The engine never talks to LED hardware directly. A rendered light
//! sequence plus a global brightness is handed to a `LightSink`; a driver
//! crate implements it for a real strip, the wasm facade and the tests use
//! `MemorySink`.

mod power;

pub use power::{estimate_milliwatts, PowerBudget};

use crate::domain::color::Rgb;

/// Consumer of rendered frames
pub trait LightSink {
    /// Show `leds` (physical strip order) at global `brightness`
    fn show(&mut self, leds: &[Rgb], brightness: u8);
}

/// Keeps the most recent frame in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    leds: Vec<Rgb>,
    brightness: u8,
    frames: u64,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leds(&self) -> &[Rgb] {
        &self.leds
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Number of frames shown so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frame packed as `[r, g, b, r, g, b, ...]`
    pub fn packed_rgb(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.leds.len() * 3);
        for led in &self.leds {
            out.extend_from_slice(&[led.r, led.g, led.b]);
        }
        out
    }
}

impl LightSink for MemorySink {
    fn show(&mut self, leds: &[Rgb], brightness: u8) {
        self.leds.clear();
        self.leds.extend_from_slice(leds);
        self.brightness = brightness;
        self.frames += 1;
    }
}

impl<S: LightSink + ?Sized> LightSink for &mut S {
    fn show(&mut self, leds: &[Rgb], brightness: u8) {
        (**self).show(leds, brightness);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_keeps_last_frame() {
        let mut sink = MemorySink::new();
        sink.show(&[Rgb::new(1, 2, 3)], 10);
        sink.show(&[Rgb::new(4, 5, 6), Rgb::new(7, 8, 9)], 20);
        assert_eq!(sink.frames(), 2);
        assert_eq!(sink.brightness(), 20);
        assert_eq!(sink.packed_rgb(), vec![4, 5, 6, 7, 8, 9]);
    }
}
