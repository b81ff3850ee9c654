//! Gradient palettes for the fire engine
//!
//! Each palette is a short list of `(position, r, g, b)` control points. At
//! startup every palette is expanded into a 256-entry lookup table so that
//! rendering a heat value is a single index.

use serde::Serialize;

use super::color::Rgb;

/// One gradient control point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientStop {
    pub pos: u8,
    pub color: Rgb,
}

const fn stop(pos: u8, r: u8, g: u8, b: u8) -> GradientStop {
    GradientStop { pos, color: Rgb::new(r, g, b) }
}

const FIRE: [GradientStop; 4] = [
    stop(0, 0, 0, 0),
    stop(168, 255, 0, 0),
    stop(224, 255, 140, 0),
    stop(255, 255, 240, 204),
];

const BLUE: [GradientStop; 5] = [
    stop(0, 0, 0, 0),
    stop(90, 9, 9, 91),
    stop(172, 10, 29, 157),
    stop(210, 3, 59, 180),
    stop(255, 166, 194, 252),
];

const HOTWARM: [GradientStop; 7] = [
    stop(0, 0, 0, 0),
    stop(40, 25, 0, 154),
    stop(80, 235, 46, 166),
    stop(127, 231, 5, 71),
    stop(170, 246, 150, 12),
    stop(211, 205, 85, 46),
    stop(255, 255, 255, 255),
];

const GREEN: [GradientStop; 4] = [
    stop(0, 0, 0, 0),
    stop(127, 23, 94, 0),
    stop(220, 62, 210, 10),
    stop(255, 22, 253, 98),
];

const VIOLET: [GradientStop; 4] = [
    stop(0, 0, 0, 0),
    stop(85, 101, 3, 91),
    stop(164, 190, 8, 250),
    stop(255, 250, 70, 250),
];

/// Names and control points, in selection order
pub const PALETTE_DEFS: [(&str, &[GradientStop]); 5] = [
    ("fire", &FIRE),
    ("blue", &BLUE),
    ("hotwarm", &HOTWARM),
    ("green", &GREEN),
    ("violet", &VIOLET),
];

pub const PALETTE_COUNT: usize = PALETTE_DEFS.len();

/// Expanded 256-entry palette
#[derive(Clone)]
pub struct Palette {
    name: &'static str,
    lut: [Rgb; 256],
}

impl Palette {
    /// Expand gradient stops by linear interpolation between neighbours.
    /// Indices before the first stop take its color, after the last stop
    /// take the last color.
    pub fn from_stops(name: &'static str, stops: &[GradientStop]) -> Self {
        let mut lut = [Rgb::BLACK; 256];
        let Some(first) = stops.first() else {
            return Self { name, lut };
        };

        for (i, slot) in lut.iter_mut().enumerate() {
            let i = i as u8;
            *slot = if i <= first.pos {
                first.color
            } else {
                sample(stops, i)
            };
        }

        Self { name, lut }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn color(&self, index: u8) -> Rgb {
        self.lut[index as usize]
    }
}

impl std::fmt::Debug for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Palette").field("name", &self.name).finish()
    }
}

fn sample(stops: &[GradientStop], i: u8) -> Rgb {
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if i >= a.pos && i <= b.pos {
            let span = (b.pos - a.pos) as u32;
            if span == 0 {
                return b.color;
            }
            let t = ((i - a.pos) as u32 * 256 / span) as u16;
            return a.color.lerp(b.color, t);
        }
    }
    stops.last().map(|s| s.color).unwrap_or(Rgb::BLACK)
}

/// All built-in palettes, expanded once
#[derive(Debug, Clone)]
pub struct PaletteSet {
    palettes: Vec<Palette>,
}

impl PaletteSet {
    pub fn builtin() -> Self {
        Self {
            palettes: PALETTE_DEFS
                .iter()
                .map(|&(name, stops)| Palette::from_stops(name, stops))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// Palette at `index`, wrapping modulo the set size
    pub fn get(&self, index: usize) -> &Palette {
        &self.palettes[index % self.palettes.len()]
    }
}

impl Default for PaletteSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Step a palette index by one in the direction of `delta`, wrapping both ways.
/// A zero delta leaves the index unchanged.
pub fn step_palette_index(index: usize, delta: i32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    match delta.signum() {
        1 => (index + 1) % count,
        -1 => (index + count - 1) % count,
        _ => index % count,
    }
}

/// Manifest entry describing a palette to the host
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteManifest {
    pub index: usize,
    pub name: &'static str,
    pub stops: Vec<[u8; 4]>,
}

pub fn palette_manifest() -> Vec<PaletteManifest> {
    PALETTE_DEFS
        .iter()
        .enumerate()
        .map(|(index, &(name, stops))| PaletteManifest {
            index,
            name,
            stops: stops
                .iter()
                .map(|s| [s.pos, s.color.r, s.color.g, s.color.b])
                .collect(),
        })
        .collect()
}
