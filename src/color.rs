//! Color math: hex/RGB conversion, blending, palettes, and random colors.
//!
//! Parsing never errors: invalid inputs fall back to black.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;

use rand::Rng;

use crate::util::{constrain, fmt_num, math_round};

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[must_use]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB` (one or more leading `#`es tolerated).
    /// Anything unparsable yields black.
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        if !hex.starts_with('#') {
            return Self::BLACK;
        }
        let digits = hex.trim_start_matches('#');
        let expanded = match digits.len() {
            3 => {
                let mut wide = String::with_capacity(6);
                for c in digits.chars() {
                    wide.push(c);
                    wide.push(c);
                }
                wide
            }
            6 => digits.to_string(),
            _ => return Self::BLACK,
        };
        let channel = |range: std::ops::Range<usize>| match u8::from_str_radix(&expanded[range], 16)
        {
            Ok(v) => Some(v),
            Err(_) => None,
        };
        match (channel(0..2), channel(2..4), channel(4..6)) {
            (Some(r), Some(g), Some(b)) => Self { r, g, b },
            _ => Self::BLACK,
        }
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Greyscale color with all three channels at `v`.
    #[must_use]
    pub fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// CSS `rgba(r, g, b, a)` string with `alpha` clamped to `[0, 1]`.
    #[must_use]
    pub fn rgba(self, alpha: f64) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            fmt_num(constrain(alpha, 0.0, 1.0))
        )
    }

    /// Hue (degrees), saturation, and lightness (both `[0, 1]`).
    #[must_use]
    pub fn to_hsl(self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        if max == min {
            return (0.0, 0.0, l);
        }
        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            ((g - b) / d).rem_euclid(6.0)
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        } * 60.0;
        (h, s, l)
    }

    /// Color from hue (degrees, wrapped), saturation, and lightness
    /// (both clamped to `[0, 1]`).
    #[must_use]
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = h.rem_euclid(360.0);
        let s = constrain(s, 0.0, 1.0);
        let l = constrain(l, 0.0, 1.0);
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = l - c / 2.0;
        let (r, g, b) = match h {
            v if v < 60.0 => (c, x, 0.0),
            v if v < 120.0 => (x, c, 0.0),
            v if v < 180.0 => (0.0, c, x),
            v if v < 240.0 => (0.0, x, c),
            v if v < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let channel = |v: f64| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let byte = math_round((v + m) * 255.0).clamp(0, 255) as u8;
            byte
        };
        Self { r: channel(r), g: channel(g), b: channel(b) }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Normalize a caller-supplied hex string: prepend `#` when missing, then
/// parse strictly enough that junk comes back as `None`.
fn parse_lenient(color: &str) -> Option<Rgb> {
    let normalized = if color.starts_with('#') {
        color.to_string()
    } else {
        format!("#{color}")
    };
    let digits = normalized.trim_start_matches('#');
    let valid_len = digits.len() == 3 || digits.len() == 6;
    if valid_len && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(Rgb::from_hex(&normalized))
    } else {
        None
    }
}

/// Blend two hex colors: `proportion` 0 gives `color1`, 1 gives `color2`
/// (clamped in between). Channels round half up. Invalid input yields
/// `"#000000"`.
#[must_use]
pub fn blend(color1: &str, color2: &str, proportion: f64) -> String {
    let t = constrain(proportion, 0.0, 1.0);
    let (Some(a), Some(b)) = (parse_lenient(color1), parse_lenient(color2)) else {
        return Rgb::BLACK.to_hex();
    };
    let mix = |x: u8, y: u8| {
        let v = math_round((1.0 - t) * f64::from(x) + t * f64::from(y));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let clamped = v.clamp(0, 255) as u8;
        clamped
    };
    Rgb::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b)).to_hex()
}

/// `n` evenly spaced blends from `from` to `to`, endpoints included.
#[must_use]
pub fn palette(from: &str, to: &str, n: usize) -> Vec<String> {
    match n {
        0 => Vec::new(),
        1 => vec![blend(from, to, 0.0)],
        _ => (0..n)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let t = i as f64 / (n - 1) as f64;
                blend(from, to, t)
            })
            .collect(),
    }
}

/// Hue relationship used by [`generate_colors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Harmony {
    /// Base hue and its opposite.
    Complementary,
    /// Base hue, a near neighbor, and both their opposites.
    Compound,
    /// Four hues at right angles around the wheel.
    Square,
}

impl Harmony {
    fn hue_offsets(self) -> &'static [f64] {
        match self {
            Self::Complementary => &[0.0, 180.0],
            Self::Compound => &[0.0, 30.0, 180.0, 210.0],
            Self::Square => &[0.0, 90.0, 180.0, 270.0],
        }
    }
}

/// `n` colors derived from `base_color` by walking the harmony's hues
/// cyclically while ramping lightness, keeping the base saturation.
/// An unparsable base color is treated as black.
#[must_use]
pub fn generate_colors(base_color: &str, n: usize, harmony: Harmony) -> Vec<String> {
    let base = parse_lenient(base_color).unwrap_or(Rgb::BLACK);
    let (h, s, l) = base.to_hsl();
    let offsets = harmony.hue_offsets();
    (0..n)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
            // Sweep lightness across a band centered on the base value.
            let lightness = constrain(l + (t - 0.5) * 0.4, 0.1, 0.9);
            Rgb::from_hsl(h + offsets[i % offsets.len()], s, lightness).to_hex()
        })
        .collect()
}

/// A uniformly random opaque color as `#rrggbb`.
#[must_use]
pub fn random_color() -> String {
    let mut rng = rand::rng();
    Rgb::new(
        rng.random_range(0..=255),
        rng.random_range(0..=255),
        rng.random_range(0..=255),
    )
    .to_hex()
}
