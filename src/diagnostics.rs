//! Status lines
//!
//! Every accepted rotation produces one `StatusLine`. Nothing in the lamp
//! reads them back; they go to whatever `DiagnosticSink` the host wires in.

use std::fmt;

use crate::domain::config::ModeKind;

/// Parameters of the mode that was adjusted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeParams {
    Fire { dissipation: i32, palette: &'static str },
    Torch { spark_probability: u8, heat_cap: u16 },
    Lamp { hue: u8, saturation: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub delta: i32,
    pub hold: bool,
    pub mode_index: usize,
    pub mode: ModeKind,
    pub params: ModeParams,
    pub brightness_raw: u16,
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "raw: {} hold: {} mode: {} ({})",
            self.delta,
            self.hold as u8,
            self.mode_index,
            self.mode.name()
        )?;
        match self.params {
            ModeParams::Fire { dissipation, palette } => {
                write!(f, "; dissipation: {dissipation}; palette: {palette}")?
            }
            ModeParams::Torch {
                spark_probability,
                heat_cap,
            } => write!(f, "; spark: {spark_probability}%; heat cap: {heat_cap}")?,
            ModeParams::Lamp { hue, saturation } => write!(f, "; hue: {hue}; sat: {saturation}")?,
        }
        write!(f, "; brightness: {}", self.brightness_raw)
    }
}

/// Consumer of status lines
pub trait DiagnosticSink {
    fn status(&mut self, line: &StatusLine);
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDiagnostics;

impl DiagnosticSink for NoDiagnostics {
    fn status(&mut self, _line: &StatusLine) {}
}

/// `tracing` events on native targets, browser console on wasm32
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    #[cfg(not(target_arch = "wasm32"))]
    fn status(&mut self, line: &StatusLine) {
        tracing::info!(
            delta = line.delta,
            hold = line.hold,
            mode = line.mode.name(),
            brightness = line.brightness_raw,
            "{line}"
        );
    }

    #[cfg(target_arch = "wasm32")]
    fn status(&mut self, line: &StatusLine) {
        web_sys::console::log_1(&line.to_string().into());
    }
}

/// Collects formatted lines, for tests and the wasm status getter
#[derive(Debug, Default, Clone)]
pub struct MemoryDiagnostics {
    lines: Vec<String>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl DiagnosticSink for MemoryDiagnostics {
    fn status(&mut self, line: &StatusLine) {
        self.lines.push(line.to_string());
    }
}

impl<D: DiagnosticSink + ?Sized> DiagnosticSink for &mut D {
    fn status(&mut self, line: &StatusLine) {
        (**self).status(line);
    }
}
