use wasm_bindgen::prelude::*;

use crate::control::{ButtonEvent, ControlInput};
use crate::diagnostics::TracingDiagnostics;
use crate::output::MemorySink;

use super::frame_stats::FrameStats;
use super::LampCore;

/// Browser-facing lamp
///
/// Control calls are queued and applied by the next `update`, the same way
/// an encoder is polled once per loop pass on the device.
#[wasm_bindgen]
pub struct Lamp {
    core: LampCore,
    sink: MemorySink,
    diagnostics: TracingDiagnostics,
    pending: ControlInput,
}

impl Lamp {
    fn wrap(core: LampCore) -> Self {
        let pending = ControlInput::idle(core.brightness_raw());
        Self {
            core,
            sink: MemorySink::new(),
            diagnostics: TracingDiagnostics,
            pending,
        }
    }

    pub fn core(&self) -> &LampCore {
        &self.core
    }
}

#[wasm_bindgen]
impl Lamp {
    /// Lamp with the default 15x15 fire + lamp configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::wrap(LampCore::new())
    }

    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<Lamp, JsValue> {
        LampCore::from_json(json)
            .map(Self::wrap)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.rows() }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.core.cols() }

    #[wasm_bindgen(getter)]
    pub fn led_count(&self) -> usize { self.core.leds().len() }

    // === Control ===

    /// Queue encoder detents for the next update
    pub fn rotate(&mut self, delta: i32) {
        let delta = (self.pending.delta as i32).saturating_add(delta);
        self.pending.delta = delta.clamp(i16::MIN as i32, i16::MAX as i32) as i16;
    }

    /// Queue a button event (0 open, 1 pressed, 2 held, 3 released, 4 clicked, 5 double clicked)
    pub fn button(&mut self, code: u8) {
        self.pending.button = ButtonEvent::from_code(code);
    }

    /// Potentiometer reading, 0..=1023
    pub fn set_brightness(&mut self, raw: u16) {
        self.pending.brightness_raw = raw;
    }

    /// One loop pass at `now_ms` (any monotonic millisecond clock).
    /// Returns true when a new frame is ready in the pixel buffer.
    pub fn update(&mut self, now_ms: f64) -> bool {
        let now = now_ms.max(0.0) as u64 as u32;
        let input = self.pending;
        self.pending = ControlInput::idle(input.brightness_raw);
        self.core.update(now, input, &mut self.sink, &mut self.diagnostics)
    }

    // === Frame ===

    /// Pointer to the packed RGB frame in wasm memory
    pub fn pixels_ptr(&self) -> *const u8 {
        self.core.packed_rgb().as_ptr()
    }

    /// Length of the packed RGB frame in bytes
    pub fn pixels_len(&self) -> usize {
        self.core.packed_rgb().len()
    }

    /// Brightness the last frame was shown at
    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> u8 { self.sink.brightness() }

    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> u64 { self.sink.frames() }

    // === Status ===

    #[wasm_bindgen(getter)]
    pub fn mode_name(&self) -> String { self.core.mode().name().to_string() }

    #[wasm_bindgen(getter)]
    pub fn mode_index(&self) -> usize { self.core.controller().mode_index() }

    #[wasm_bindgen(getter)]
    pub fn mode_count(&self) -> usize { self.core.controller().mode_count() }

    #[wasm_bindgen(getter)]
    pub fn held(&self) -> bool { self.core.controller().is_held() }

    /// Last status line, empty before the first rotation
    pub fn status(&self) -> String {
        self.core
            .last_status()
            .map(|line| line.to_string())
            .unwrap_or_default()
    }

    pub fn stats(&self) -> FrameStats {
        self.core.stats().clone()
    }

    /// Grid size, modes and palettes as JSON
    pub fn manifest(&self) -> String {
        self.core.config().manifest_json()
    }

    /// Active configuration as JSON
    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    // === Settings ===

    pub fn select_mode(&mut self, index: usize) {
        self.core.select_mode(index);
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.core.set_seed(seed);
    }

    pub fn set_upside_down(&mut self, upside_down: bool) {
        self.core.set_upside_down(upside_down);
    }

    pub fn set_power_milliamps(&mut self, milliamps: u32) {
        self.core.set_power_milliamps(milliamps);
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }
}

impl Default for Lamp {
    fn default() -> Self {
        Self::new()
    }
}
