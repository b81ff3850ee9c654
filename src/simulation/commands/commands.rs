use crate::control::{Adjustment, ButtonEvent};
use crate::diagnostics::{DiagnosticSink, ModeParams, StatusLine};
use crate::domain::config::ModeKind;

use super::LampCore;

/// Highest potentiometer reading
const BRIGHTNESS_RAW_MAX: u16 = 1023;

pub(super) fn set_brightness_raw(lamp: &mut LampCore, raw: u16) {
    let raw = raw.min(BRIGHTNESS_RAW_MAX);
    if raw != lamp.brightness_raw {
        lamp.brightness_raw = raw;
        lamp.brightness = (raw >> 2) as u8;
    }
}

pub(super) fn rotate<D: DiagnosticSink + ?Sized>(
    lamp: &mut LampCore,
    delta: i32,
    now_ms: u32,
    diag: &mut D,
) -> Option<StatusLine> {
    if delta == 0 {
        return None;
    }
    if let Some(adjustment) = lamp.controller.on_rotation(delta, now_ms) {
        apply_adjustment(lamp, adjustment);
    }

    // reported even when the debounce dropped the adjustment
    let line = status_line(lamp, delta);
    diag.status(&line);
    lamp.last_status = Some(line.clone());
    Some(line)
}

fn apply_adjustment(lamp: &mut LampCore, adjustment: Adjustment) {
    match adjustment {
        Adjustment::Dissipation(amount) => lamp.fire.adjust_dissipation(amount),
        Adjustment::Palette(direction) => lamp.fire.step_palette(direction),
        Adjustment::SparkProbability(amount) => lamp.torch.adjust_spark_probability(amount),
        Adjustment::HeatCap(amount) => lamp.torch.adjust_heat_cap(amount),
    }
}

pub(super) fn status_line(lamp: &LampCore, delta: i32) -> StatusLine {
    let mode = lamp.controller.mode();
    let params = match mode {
        ModeKind::Fire => ModeParams::Fire {
            dissipation: lamp.fire.dissipation(),
            palette: lamp.fire.palette_name(),
        },
        ModeKind::Torch => ModeParams::Torch {
            spark_probability: lamp.torch.params().spark_probability,
            heat_cap: lamp.torch.params().heat_cap,
        },
        ModeKind::Lamp => ModeParams::Lamp {
            hue: lamp.controller.hue(),
            saturation: lamp.controller.saturation(),
        },
    };
    StatusLine {
        delta,
        hold: lamp.controller.is_held(),
        mode_index: lamp.controller.mode_index(),
        mode,
        params,
        brightness_raw: lamp.brightness_raw,
    }
}

pub(super) fn press(lamp: &mut LampCore, event: ButtonEvent) -> bool {
    let changed = lamp.controller.on_button(event);
    if changed {
        // a new simulation mode renders on the next pass
        lamp.cadence.restart();
        tracing::debug!(mode = lamp.controller.mode().name(), "mode changed");
    }
    changed
}
