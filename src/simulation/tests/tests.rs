use super::*;
use crate::control::ButtonEvent;
use crate::diagnostics::{MemoryDiagnostics, ModeParams, NoDiagnostics};
use crate::domain::color::Hsv;
use crate::output::{MemorySink, PowerBudget};

fn lamp_with_modes(modes: &[ModeKind]) -> LampCore {
    let mut config = LampConfig::default();
    config.modes = modes.to_vec();
    config.display.power = PowerBudget::unlimited();
    LampCore::with_config(config).expect("valid config")
}

#[test]
fn hue_rotation_wraps_instead_of_going_negative() {
    let mut lamp = lamp_with_modes(&[ModeKind::Lamp]);
    let mut diag = MemoryDiagnostics::new();
    let line = lamp.rotate(-5, 0, &mut diag).expect("rotation reports status");

    assert_eq!(lamp.controller().hue(), 246);
    assert_eq!(line.params, ModeParams::Lamp { hue: 246, saturation: 200 });
    assert_eq!(diag.lines().len(), 1);
}

#[test]
fn clicking_n_times_returns_to_first_mode() {
    let mut lamp = lamp_with_modes(&[ModeKind::Fire, ModeKind::Torch, ModeKind::Lamp]);
    let mut sink = MemorySink::new();
    let mut diag = NoDiagnostics;
    let mut seen = Vec::new();
    for t in 0..3u32 {
        seen.push(lamp.mode());
        lamp.update(t * 100, ControlInput::idle(512).with_button(ButtonEvent::Clicked), &mut sink, &mut diag);
    }
    assert_eq!(lamp.controller().mode_count(), 3);
    assert_eq!(seen, vec![ModeKind::Fire, ModeKind::Torch, ModeKind::Lamp]);
    assert_eq!(lamp.mode(), ModeKind::Fire);
}

#[test]
fn simulation_renders_at_frame_rate() {
    let mut lamp = lamp_with_modes(&[ModeKind::Fire]);
    let mut sink = MemorySink::new();
    let mut diag = NoDiagnostics;
    let input = ControlInput::idle(512);

    assert!(lamp.update(1000, input, &mut sink, &mut diag));
    assert!(!lamp.update(1010, input, &mut sink, &mut diag));
    assert!(!lamp.update(1015, input, &mut sink, &mut diag));
    assert!(lamp.update(1016, input, &mut sink, &mut diag));
    assert_eq!(sink.frames(), 2);
    assert_eq!(lamp.stats().ticks(), 2);
}

#[test]
fn static_color_renders_every_pass() {
    let mut lamp = lamp_with_modes(&[ModeKind::Lamp]);
    let mut sink = MemorySink::new();
    let mut diag = NoDiagnostics;
    for t in 0..5 {
        assert!(lamp.update(t, ControlInput::idle(1023), &mut sink, &mut diag));
    }
    assert_eq!(sink.frames(), 5);
    assert_eq!(sink.brightness(), 255);
    let expected = Hsv::new(1, 200, 255).to_rgb();
    assert!(sink.leds().iter().all(|&c| c == expected));
    assert_eq!(lamp.stats().ticks(), 0);
}

#[test]
fn brightness_follows_potentiometer() {
    let mut lamp = lamp_with_modes(&[ModeKind::Lamp]);
    let mut sink = MemorySink::new();
    let mut diag = NoDiagnostics;
    lamp.update(0, ControlInput::idle(400), &mut sink, &mut diag);
    assert_eq!(lamp.brightness(), 100);
    assert_eq!(sink.brightness(), 100);
    lamp.update(1, ControlInput::idle(5000), &mut sink, &mut diag);
    assert_eq!(lamp.brightness_raw(), 1023);
    assert_eq!(lamp.brightness(), 255);
}

#[test]
fn fire_rotation_is_debounced_but_always_reported() {
    let mut lamp = lamp_with_modes(&[ModeKind::Fire]);
    let mut diag = MemoryDiagnostics::new();

    lamp.rotate(1, 1000, &mut diag);
    assert_eq!(lamp.fire().palette_index(), 1);
    lamp.rotate(1, 1100, &mut diag);
    assert_eq!(lamp.fire().palette_index(), 1);
    assert_eq!(diag.lines().len(), 2);

    lamp.press(ButtonEvent::Held);
    lamp.rotate(-100, 2000, &mut diag);
    assert_eq!(lamp.fire().dissipation(), 1);
    assert!(diag.last().is_some_and(|l| l.contains("dissipation: 1")));
}

#[test]
fn torch_rotation_adjusts_spark_probability_and_heat_cap() {
    let mut lamp = lamp_with_modes(&[ModeKind::Torch]);
    let mut diag = NoDiagnostics;
    lamp.rotate(3, 100, &mut diag);
    assert_eq!(lamp.torch().params().spark_probability, 2);
    lamp.rotate(3, 500, &mut diag);
    assert_eq!(lamp.torch().params().spark_probability, 5);

    lamp.press(ButtonEvent::Held);
    lamp.rotate(10, 1000, &mut diag);
    assert_eq!(lamp.torch().params().heat_cap, 20);

    lamp.press(ButtonEvent::Released);
    lamp.rotate(-50, 2000, &mut diag);
    assert_eq!(lamp.torch().params().spark_probability, 0);
}

#[test]
fn packed_buffer_mirrors_leds() {
    let mut lamp = lamp_with_modes(&[ModeKind::Torch]);
    let mut sink = MemorySink::new();
    let mut diag = NoDiagnostics;
    lamp.update(0, ControlInput::idle(512), &mut sink, &mut diag);
    assert_eq!(lamp.packed_rgb().len(), 225 * 3);
    assert_eq!(lamp.packed_rgb(), sink.packed_rgb().as_slice());
}

#[test]
fn power_budget_lowers_shown_brightness() {
    let mut lamp = lamp_with_modes(&[ModeKind::Lamp]);
    lamp.set_power_milliamps(500);
    let mut sink = MemorySink::new();
    let mut diag = NoDiagnostics;
    lamp.update(0, ControlInput::idle(1023), &mut sink, &mut diag);
    assert!(sink.brightness() < 255);
    assert!(lamp.stats().power_limited());
    let budget = lamp.config().display.power;
    assert!(crate::output::estimate_milliwatts(sink.leds(), sink.brightness()) <= budget.max_milliwatts());
}

#[test]
fn cadence_survives_clock_wrap() {
    let mut cadence = FrameCadence::new(16);
    assert!(cadence.ready(u32::MAX - 5));
    assert!(!cadence.ready(5));
    assert!(cadence.ready(10));
}

#[test]
fn mode_change_renders_immediately() {
    let mut lamp = lamp_with_modes(&[ModeKind::Fire, ModeKind::Torch]);
    let mut sink = MemorySink::new();
    let mut diag = NoDiagnostics;
    assert!(lamp.update(0, ControlInput::idle(512), &mut sink, &mut diag));
    let clicked = ControlInput::idle(512).with_button(ButtonEvent::Clicked);
    assert!(lamp.update(1, clicked, &mut sink, &mut diag));
    assert_eq!(lamp.mode(), ModeKind::Torch);
}

#[test]
fn reset_darkens_grids() {
    let mut lamp = lamp_with_modes(&[ModeKind::Fire]);
    for _ in 0..20 {
        lamp.tick();
    }
    assert!(lamp.fire().grid().max_energy() > 0);
    lamp.reset();
    assert_eq!(lamp.fire().grid().max_energy(), 0);
    assert_eq!(lamp.stats().ticks(), 0);
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = LampConfig::default();
    config.modes.clear();
    assert!(matches!(LampCore::with_config(config), Err(ConfigError::NoModes)));
    assert!(LampCore::from_json("{").is_err());
    assert!(matches!(
        LampCore::from_json(r#"{ "display": { "rows": 65536, "cols": 65536 } }"#),
        Err(ConfigError::GridTooLarge { .. })
    ));
}
