//! Lamp - main loop of the fire lamp
//!
//! `LampCore` owns both engines, the mode controller and the frame buffer.
//! Hosts call `update` once per loop pass with the current time and the
//! polled control input; the core decides whether a new frame is due and
//! hands it to the output sink.
//!
//! Work is split the same way for every pass:
//! - commands/ - brightness, rotation and button handling
//! - step/     - frame cadence and the per-pass driver
//! - render/   - flattening, power limiting, sink hand-off

use crate::control::{ButtonEvent, ControlInput, ModeController};
use crate::core::utils::Rng;
use crate::diagnostics::{DiagnosticSink, StatusLine};
use crate::domain::color::Rgb;
use crate::domain::config::{ConfigError, LampConfig, ModeKind};
use crate::output::LightSink;
use crate::systems::{CoolingFire, TorchFire};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/frame_stats.rs"]
mod frame_stats;
#[path = "step/cadence.rs"]
mod cadence;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use cadence::FrameCadence;
pub use facade::Lamp;
pub use frame_stats::FrameStats;

use perf_timer::{Phase, PhaseTimer};

/// The lamp
pub struct LampCore {
    config: LampConfig,
    fire: CoolingFire,
    torch: TorchFire,
    controller: ModeController,
    rng: Rng,
    cadence: FrameCadence,

    // Output
    leds: Vec<Rgb>,
    packed: Vec<u8>,
    brightness_raw: u16,
    brightness: u8,
    shown_brightness: u8,

    // Diagnostics
    last_status: Option<StatusLine>,
    stats: FrameStats,
}

impl LampCore {
    /// Lamp with the default configuration
    pub fn new() -> Self {
        init::create_lamp_core(LampConfig::default())
    }

    /// Validates `config` first
    pub fn with_config(config: LampConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(init::create_lamp_core(config))
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config = LampConfig::from_json(json)?;
        Ok(init::create_lamp_core(config))
    }

    pub fn config(&self) -> &LampConfig {
        &self.config
    }

    pub fn rows(&self) -> u32 {
        self.config.display.rows
    }

    pub fn cols(&self) -> u32 {
        self.config.display.cols
    }

    pub fn mode(&self) -> ModeKind {
        self.controller.mode()
    }

    pub fn controller(&self) -> &ModeController {
        &self.controller
    }

    pub fn fire(&self) -> &CoolingFire {
        &self.fire
    }

    pub fn fire_mut(&mut self) -> &mut CoolingFire {
        &mut self.fire
    }

    pub fn torch(&self) -> &TorchFire {
        &self.torch
    }

    pub fn torch_mut(&mut self) -> &mut TorchFire {
        &mut self.torch
    }

    /// Last flattened frame, physical strip order
    pub fn leds(&self) -> &[Rgb] {
        &self.leds
    }

    /// Last frame as `[r, g, b, ...]`
    pub fn packed_rgb(&self) -> &[u8] {
        &self.packed
    }

    /// Global brightness derived from the potentiometer (`raw >> 2`)
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Brightness the last frame was shown at, after power limiting
    pub fn shown_brightness(&self) -> u8 {
        self.shown_brightness
    }

    pub fn brightness_raw(&self) -> u16 {
        self.brightness_raw
    }

    pub fn last_status(&self) -> Option<&StatusLine> {
        self.last_status.as_ref()
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// One pass of the main loop. Returns true when a frame was shown.
    pub fn update<S, D>(&mut self, now_ms: u32, input: ControlInput, sink: &mut S, diag: &mut D) -> bool
    where
        S: LightSink + ?Sized,
        D: DiagnosticSink + ?Sized,
    {
        step::update(self, now_ms, input, sink, diag)
    }

    /// Advance the active simulation one tick without rendering
    pub fn tick(&mut self) {
        step::tick(self);
    }

    // === Commands ===

    pub fn set_brightness_raw(&mut self, raw: u16) {
        commands::set_brightness_raw(self, raw);
    }

    /// Rotation of `delta` detents; returns the status line it produced
    pub fn rotate<D>(&mut self, delta: i32, now_ms: u32, diag: &mut D) -> Option<StatusLine>
    where
        D: DiagnosticSink + ?Sized,
    {
        commands::rotate(self, delta, now_ms, diag)
    }

    pub fn press(&mut self, event: ButtonEvent) -> bool {
        commands::press(self, event)
    }

    // === Settings ===

    pub fn set_seed(&mut self, seed: u32) {
        settings::set_seed(self, seed);
    }

    pub fn select_mode(&mut self, index: usize) {
        settings::select_mode(self, index);
    }

    pub fn set_upside_down(&mut self, upside_down: bool) {
        settings::set_upside_down(self, upside_down);
    }

    pub fn set_power_milliamps(&mut self, milliamps: u32) {
        settings::set_power_milliamps(self, milliamps);
    }

    /// Dark grids, fresh cadence; mode and parameters are kept
    pub fn reset(&mut self) {
        settings::reset(self);
    }

    // === Render ===

    /// Flatten the active mode into the frame buffer without showing it
    pub fn render(&mut self) {
        render_extract::flatten(self);
    }
}

impl Default for LampCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
