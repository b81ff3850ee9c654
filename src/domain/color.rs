//! Colors - 8-bit RGB triples and HSV conversion
//!
//! `Rgb` is what every renderer writes and every sink consumes. HSV is only
//! used by the static lamp mode.

use serde::{Deserialize, Serialize};

/// One LED color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend, `t` = 0 gives `self`, `t` = 256 gives `other`.
    #[inline]
    pub fn lerp(self, other: Rgb, t: u16) -> Rgb {
        #[inline]
        fn channel(a: u8, b: u8, t: u16) -> u8 {
            let a = a as i32;
            let b = b as i32;
            (a + ((b - a) * t as i32) / 256) as u8
        }
        Rgb::new(
            channel(self.r, other.r, t),
            channel(self.g, other.g, t),
            channel(self.b, other.b, t),
        )
    }

    /// Sum of channels, used by the power estimate
    #[inline]
    pub fn channel_sum(self) -> u32 {
        self.r as u32 + self.g as u32 + self.b as u32
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb::new(r, g, b)
    }
}

/// Hue / saturation / value, all 0..=255
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }

    /// Six-sector integer conversion.
    pub fn to_rgb(self) -> Rgb {
        let Hsv { h, s, v } = self;
        if s == 0 {
            return Rgb::new(v, v, v);
        }

        let region = h / 43;
        let remainder = ((h as u16 - region as u16 * 43) * 6) as u32;

        let v32 = v as u32;
        let s32 = s as u32;
        let p = ((v32 * (255 - s32)) >> 8) as u8;
        let q = ((v32 * (255 - ((s32 * remainder) >> 8))) >> 8) as u8;
        let t = ((v32 * (255 - ((s32 * (255 - remainder)) >> 8))) >> 8) as u8;

        match region {
            0 => Rgb::new(v, t, p),
            1 => Rgb::new(q, v, p),
            2 => Rgb::new(p, v, t),
            3 => Rgb::new(p, q, v),
            4 => Rgb::new(t, p, v),
            _ => Rgb::new(v, p, q),
        }
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        hsv.to_rgb()
    }
}
