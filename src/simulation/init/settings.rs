use crate::core::utils::Rng;
use crate::domain::color::Rgb;
use crate::systems::Effect;

use super::frame_stats::FrameStats;
use super::LampCore;

pub(super) fn set_seed(lamp: &mut LampCore, seed: u32) {
    lamp.config.display.seed = seed;
    lamp.rng = Rng::new(seed);
}

pub(super) fn select_mode(lamp: &mut LampCore, index: usize) {
    lamp.controller.select(index);
    lamp.cadence.restart();
}

pub(super) fn set_upside_down(lamp: &mut LampCore, upside_down: bool) {
    lamp.config.torch.upside_down = upside_down;
    lamp.torch.set_upside_down(upside_down);
}

pub(super) fn set_power_milliamps(lamp: &mut LampCore, milliamps: u32) {
    lamp.config.display.power.milliamps = milliamps;
}

pub(super) fn reset(lamp: &mut LampCore) {
    lamp.fire.reset();
    lamp.torch.reset();
    lamp.cadence.restart();
    lamp.leds.fill(Rgb::BLACK);
    lamp.packed.fill(0);
    lamp.stats = FrameStats::default();
}
