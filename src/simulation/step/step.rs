use crate::control::ControlInput;
use crate::diagnostics::DiagnosticSink;
use crate::domain::config::ModeKind;
use crate::output::LightSink;
use crate::systems::{Effect, EnergyMode};

use super::{commands, render_extract, LampCore, Phase, PhaseTimer};

/// One loop pass: brightness, rotation, button, then a frame if one is due.
///
/// Static color renders on every pass. Simulation modes tick and render
/// only when the frame cadence opens.
pub(super) fn update<S, D>(
    lamp: &mut LampCore,
    now_ms: u32,
    input: ControlInput,
    sink: &mut S,
    diag: &mut D,
) -> bool
where
    S: LightSink + ?Sized,
    D: DiagnosticSink + ?Sized,
{
    commands::set_brightness_raw(lamp, input.brightness_raw);
    commands::rotate(lamp, input.delta as i32, now_ms, diag);
    commands::press(lamp, input.button);

    if lamp.controller.mode().is_simulation() {
        if !lamp.cadence.ready(now_ms) {
            return false;
        }
        tick(lamp);
    }

    render_extract::flatten(lamp);
    render_extract::show(lamp, sink);
    true
}

/// Advance the active simulation, recording step time and grid counters
pub(super) fn tick(lamp: &mut LampCore) {
    let timer = PhaseTimer::start(Phase::Step);
    match lamp.controller.mode() {
        ModeKind::Fire => {
            lamp.fire.step(&mut lamp.rng);
            lamp.stats.max_energy = lamp.fire.grid().max_energy();
            lamp.stats.sparks = 0;
        }
        ModeKind::Torch => {
            lamp.torch.step(&mut lamp.rng);
            lamp.stats.max_energy = lamp.torch.grid().max_energy();
            lamp.stats.sparks = lamp.torch.modes().count(EnergyMode::Spark) as u32;
        }
        ModeKind::Lamp => return,
    }
    timer.finish(&mut lamp.stats);
    lamp.stats.ticks += 1;
}
