//! Lamp configuration
//!
//! Everything tunable about a lamp lives here: matrix geometry, frame rate,
//! power budget, the mode list, and the default parameters of each mode.
//! Hosts pass a JSON document (camelCase keys); every field has a default, so
//! `{}` is a valid configuration describing the stock 15x15 fire + lamp build.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::grid::EdgePolicy;
use crate::domain::color::Rgb;
use crate::domain::palettes::{palette_manifest, PaletteManifest, PALETTE_COUNT};
use crate::output::PowerBudget;

/// Errors produced while loading a configuration document
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: u32, cols: u32 },
    #[error("grid of {rows}x{cols} exceeds {MAX_LEDS} LEDs")]
    GridTooLarge { rows: u32, cols: u32 },
    #[error("mode list must not be empty")]
    NoModes,
    #[error("frames per second must be non-zero")]
    ZeroFps,
    #[error("{name} range is inverted: {min} > {max}")]
    InvertedRange { name: &'static str, min: u8, max: u8 },
    #[error("spark probability {0} exceeds 100 percent")]
    SparkProbability(u8),
    #[error("palette index {0} out of range")]
    PaletteIndex(usize),
    #[error("encoder steps per notch and button interval must be non-zero")]
    EncoderTiming,
}

/// Largest matrix a lamp may drive
pub const MAX_LEDS: u32 = 65_536;

/// Effect selectable by the mode button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModeKind {
    /// Cooling / diffusion / spark fire rendered through a palette
    Fire,
    /// Energy-transfer torch with spark cells
    Torch,
    /// Solid color from hue and saturation
    Lamp,
}

impl ModeKind {
    pub fn name(self) -> &'static str {
        match self {
            ModeKind::Fire => "fire",
            ModeKind::Torch => "torch",
            ModeKind::Lamp => "lamp",
        }
    }

    pub fn is_simulation(self) -> bool {
        !matches!(self, ModeKind::Lamp)
    }
}

/// Matrix geometry and output timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayConfig {
    pub rows: u32,
    pub cols: u32,
    pub frames_per_second: u32,
    pub power: PowerBudget,
    /// Initial raw brightness reading (0..=1023)
    pub brightness_raw: u16,
    pub seed: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            rows: 15,
            cols: 15,
            frames_per_second: 60,
            power: PowerBudget::default(),
            brightness_raw: 512,
            seed: 12345,
        }
    }
}

impl DisplayConfig {
    /// Target frame interval in whole milliseconds
    pub fn frame_interval_ms(&self) -> u32 {
        1000 / self.frames_per_second.max(1)
    }

    pub fn led_count(&self) -> usize {
        (self.rows as usize).saturating_mul(self.cols as usize)
    }
}

/// Cooling-diffusion fire parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FireConfig {
    pub dissipation: i32,
    pub palette: usize,
    /// Chance out of 256 that a column ignites a spark each tick
    pub sparking: u16,
    /// Sparks land in rows `[0, spark_rows)`
    pub spark_rows: u32,
    pub spark_heat_min: u8,
    pub spark_heat_max: u8,
}

impl Default for FireConfig {
    fn default() -> Self {
        Self {
            dissipation: 70,
            palette: 0,
            sparking: 130,
            spark_rows: 7,
            spark_heat_min: 160,
            spark_heat_max: 255,
        }
    }
}

/// Energy-transfer torch parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TorchConfig {
    pub flame_min: u8,
    pub flame_max: u8,
    /// Percent chance (0..=100) that a row-1 cell ignites
    pub spark_probability: u8,
    pub spark_min: u8,
    pub spark_max: u8,
    /// Energy moved upward by a spark per tick
    pub spark_transfer: u8,
    /// Energy retained by a freshly promoted spark, out of 256
    pub spark_cap: u16,
    pub up_radiation: u16,
    pub side_radiation: u16,
    /// Energy retained by passive cells, out of 256
    pub heat_cap: u16,
    pub background: Rgb,
    pub bias: Rgb,
    pub red_gain: u16,
    pub green_gain: u16,
    pub blue_gain: u16,
    pub upside_down: bool,
    pub edges: EdgePolicy,
}

impl Default for TorchConfig {
    fn default() -> Self {
        Self {
            flame_min: 100,
            flame_max: 220,
            spark_probability: 2,
            spark_min: 200,
            spark_max: 255,
            spark_transfer: 40,
            spark_cap: 200,
            up_radiation: 40,
            side_radiation: 35,
            heat_cap: 0,
            background: Rgb::BLACK,
            bias: Rgb::new(10, 0, 0),
            red_gain: 180,
            green_gain: 20,
            blue_gain: 0,
            upside_down: false,
            edges: EdgePolicy::Clamp,
        }
    }
}

/// Static color lamp parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LampColorConfig {
    pub hue: i32,
    pub saturation: i32,
}

impl Default for LampColorConfig {
    fn default() -> Self {
        Self { hue: 1, saturation: 200 }
    }
}

/// Encoder interpretation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ControlConfig {
    /// Simulation parameters change at most once per this interval
    pub adjust_interval_ms: u32,
    /// Detents are multiplied by this before being applied to a parameter
    pub rotation_multiplier: i32,
    pub encoder: EncoderConfig,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            adjust_interval_ms: 430,
            rotation_multiplier: 2,
            encoder: EncoderConfig::default(),
        }
    }
}

/// Timing of the encoder service, in service ticks (1 tick = 1 ms)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EncoderConfig {
    /// Raw quadrature transitions per reported step
    pub steps_per_notch: u8,
    /// The button is sampled once per this many ticks
    pub button_interval: u32,
    pub hold_time: u32,
    pub double_click_time: u32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            steps_per_notch: 4,
            button_interval: 10,
            hold_time: 1000,
            double_click_time: 400,
        }
    }
}

/// Complete lamp configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LampConfig {
    pub display: DisplayConfig,
    pub modes: Vec<ModeKind>,
    pub fire: FireConfig,
    pub torch: TorchConfig,
    pub lamp: LampColorConfig,
    pub controls: ControlConfig,
}

impl Default for LampConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            modes: vec![ModeKind::Fire, ModeKind::Lamp],
            fire: FireConfig::default(),
            torch: TorchConfig::default(),
            lamp: LampColorConfig::default(),
            controls: ControlConfig::default(),
        }
    }
}

impl LampConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: LampConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.display;
        if d.rows == 0 || d.cols == 0 {
            return Err(ConfigError::EmptyGrid { rows: d.rows, cols: d.cols });
        }
        if d.rows.checked_mul(d.cols).map_or(true, |n| n > MAX_LEDS) {
            return Err(ConfigError::GridTooLarge { rows: d.rows, cols: d.cols });
        }
        if d.frames_per_second == 0 {
            return Err(ConfigError::ZeroFps);
        }
        if self.modes.is_empty() {
            return Err(ConfigError::NoModes);
        }
        if self.fire.palette >= PALETTE_COUNT {
            return Err(ConfigError::PaletteIndex(self.fire.palette));
        }

        check_range("fire spark heat", self.fire.spark_heat_min, self.fire.spark_heat_max)?;
        check_range("torch flame", self.torch.flame_min, self.torch.flame_max)?;
        check_range("torch spark", self.torch.spark_min, self.torch.spark_max)?;

        if self.torch.spark_probability > 100 {
            return Err(ConfigError::SparkProbability(self.torch.spark_probability));
        }
        let enc = &self.controls.encoder;
        if enc.steps_per_notch == 0 || enc.button_interval == 0 {
            return Err(ConfigError::EncoderTiming);
        }
        Ok(())
    }

    /// Host-facing description of modes and palettes
    pub fn manifest_json(&self) -> String {
        let out = Manifest {
            format_version: 1,
            rows: self.display.rows,
            cols: self.display.cols,
            modes: self.modes.iter().map(|m| m.name()).collect(),
            palettes: palette_manifest(),
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }
}

fn check_range(name: &'static str, min: u8, max: u8) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvertedRange { name, min, max });
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest {
    format_version: u32,
    rows: u32,
    cols: u32,
    modes: Vec<&'static str>,
    palettes: Vec<PaletteManifest>,
}
