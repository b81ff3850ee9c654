use crate::domain::color::{Hsv, Rgb};
use crate::domain::config::ModeKind;
use crate::output::LightSink;
use crate::systems::Effect;

use super::{LampCore, Phase, PhaseTimer};

/// Write the active mode into the frame buffer and refresh the packed copy
pub(super) fn flatten(lamp: &mut LampCore) {
    let timer = PhaseTimer::start(Phase::Render);
    match lamp.controller.mode() {
        ModeKind::Fire => lamp.fire.render(&mut lamp.leds),
        ModeKind::Torch => lamp.torch.render(&mut lamp.leds),
        ModeKind::Lamp => {
            let hsv = Hsv::new(
                lamp.controller.hue(),
                lamp.controller.saturation(),
                lamp.brightness,
            );
            lamp.leds.fill(hsv.to_rgb());
        }
    }
    pack_rgb(&lamp.leds, &mut lamp.packed);
    timer.finish(&mut lamp.stats);
}

/// Hand the frame to `sink` at the power-limited brightness
pub(super) fn show<S: LightSink + ?Sized>(lamp: &mut LampCore, sink: &mut S) {
    let requested = lamp.brightness;
    let limited = lamp
        .config
        .display
        .power
        .limit_brightness(&lamp.leds, requested);
    if limited < requested {
        tracing::trace!(requested, limited, "brightness power limited");
    }

    sink.show(&lamp.leds, limited);

    lamp.shown_brightness = limited;
    lamp.stats.requested_brightness = requested;
    lamp.stats.limited_brightness = limited;
    lamp.stats.frames_shown += 1;
}

/// `[r, g, b, r, g, b, ...]`, tightly packed
fn pack_rgb(leds: &[Rgb], out: &mut Vec<u8>) {
    out.clear();
    out.reserve(leds.len() * 3);
    for led in leds {
        out.extend_from_slice(&[led.r, led.g, led.b]);
    }
}
