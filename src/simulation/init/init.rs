use crate::control::ModeController;
use crate::core::utils::Rng;
use crate::domain::color::Rgb;
use crate::domain::config::LampConfig;
use crate::systems::{CoolingFire, TorchFire};

use super::frame_stats::FrameStats;
use super::{FrameCadence, LampCore};

pub(super) fn create_lamp_core(config: LampConfig) -> LampCore {
    let display = &config.display;
    let (rows, cols) = (display.rows, display.cols);
    let led_count = display.led_count();
    let brightness_raw = display.brightness_raw.min(1023);

    tracing::debug!(rows, cols, modes = config.modes.len(), "creating lamp");

    LampCore {
        fire: CoolingFire::new(rows, cols, &config.fire),
        torch: TorchFire::new(rows, cols, &config.torch),
        controller: ModeController::new(&config.modes, &config.controls, &config.lamp),
        rng: Rng::new(display.seed),
        cadence: FrameCadence::new(display.frame_interval_ms()),

        leds: vec![Rgb::BLACK; led_count],
        packed: vec![0u8; led_count * 3],
        brightness_raw,
        brightness: (brightness_raw >> 2) as u8,
        shown_brightness: 0,

        last_status: None,
        stats: FrameStats::default(),
        config,
    }
}
