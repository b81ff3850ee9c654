//! Flamelamp Engine - fire and torch effects for serpentine LED matrix lamps
//!
//! Two grid automata drive the lamp:
//! - cooling-diffusion "fire", rendered through a gradient palette
//! - energy-transfer "torch", with per-cell spark / feeding modes
//!
//! plus a static hue/saturation color. A rotary encoder adjusts the active
//! mode; a potentiometer sets brightness.
//!
//! Architecture:
//! - core/        - energy grid, saturating arithmetic, random source
//! - domain/      - colors, palettes, configuration
//! - spatial/     - serpentine LED layout
//! - systems/     - the two engines
//! - control/     - encoder service, control events, mode controller
//! - output/      - light sinks and power limiting
//! - simulation/  - main loop orchestration
//! - api/         - wasm surface

pub mod core;
pub mod spatial;
pub mod domain;
pub mod systems;
pub mod control;
pub mod output;
pub mod diagnostics;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Flamelamp engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Default configuration as JSON, for hosts building their own
#[wasm_bindgen(js_name = defaultConfigJson)]
pub fn default_config_json() -> String {
    domain::config::LampConfig::default().to_json()
}

// Re-export main types
pub use api::wasm::{FrameStats, Lamp};
pub use control::{ButtonEvent, ClickEncoder, ControlInput, EncoderHandle, ModeController};
pub use diagnostics::{DiagnosticSink, StatusLine, TracingDiagnostics};
pub use domain::color::{Hsv, Rgb};
pub use domain::config::{ConfigError, LampConfig, ModeKind};
pub use output::{LightSink, MemorySink, PowerBudget};
pub use simulation::LampCore;
pub use systems::{CoolingFire, Effect, TorchFire};
