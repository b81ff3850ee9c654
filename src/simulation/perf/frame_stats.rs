use wasm_bindgen::prelude::*;

/// Timing and counters of the most recent update
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    pub(super) step_ms: f64,
    pub(super) render_ms: f64,
    pub(super) frames_shown: u64,
    pub(super) ticks: u64,
    pub(super) max_energy: u8,
    pub(super) sparks: u32,
    pub(super) requested_brightness: u8,
    pub(super) limited_brightness: u8,
}

impl FrameStats {
    /// True when the power budget lowered the brightness of the last frame
    pub fn power_limited(&self) -> bool {
        self.limited_brightness < self.requested_brightness
    }
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn frames_shown(&self) -> u64 { self.frames_shown }
    #[wasm_bindgen(getter)]
    pub fn ticks(&self) -> u64 { self.ticks }
    #[wasm_bindgen(getter)]
    pub fn max_energy(&self) -> u8 { self.max_energy }
    #[wasm_bindgen(getter)]
    pub fn sparks(&self) -> u32 { self.sparks }
    #[wasm_bindgen(getter)]
    pub fn requested_brightness(&self) -> u8 { self.requested_brightness }
    #[wasm_bindgen(getter)]
    pub fn limited_brightness(&self) -> u8 { self.limited_brightness }
}
