//! System font lookup and text measurement.
//!
//! Chart layout needs text dimensions before anything renders. The measurer
//! resolves a family + weight against the installed system fonts and sums
//! glyph advances from the font tables; nothing is rasterized. A font that
//! cannot be resolved is a reported error, never silently substituted.

#[cfg(test)]
#[path = "typography_test.rs"]
mod typography_test;

use ttf_parser::Face;

use crate::consts::BASE_DPI;
use crate::error::Error;

/// Font-table metrics in design units, before scaling to a font size.
#[derive(Debug, Clone, Copy)]
struct RawMetrics {
    /// Advance width of the widest line.
    width_units: f64,
    /// Number of lines measured.
    lines: usize,
    ascender: f64,
    descender: f64,
    line_gap: f64,
    units_per_em: f64,
}

/// Measures text against the installed system fonts.
pub struct TextMeasurer {
    db: fontdb::Database,
    dpi: f64,
}

impl TextMeasurer {
    /// Load the system font database at the reference 72 DPI (one point per
    /// pixel).
    #[must_use]
    pub fn new() -> Self {
        Self::with_dpi(BASE_DPI)
    }

    /// Load the system font database with an explicit DPI; measurements
    /// scale by `dpi / 72`.
    #[must_use]
    pub fn with_dpi(dpi: f64) -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system font database");
        Self { db, dpi }
    }

    /// Configured DPI.
    #[must_use]
    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    /// Measure `text` rendered in the given family, numeric weight (400
    /// regular, 700 bold), and point size. Returns `(width, height)` in
    /// pixels. Multi-line text splits on `'\n'`; the width is the widest
    /// line's.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FontNotFound`] when no installed face matches the
    /// family and weight, or the matched face cannot be read.
    pub fn measure(
        &self,
        text: &str,
        family: &str,
        weight: u16,
        size: f64,
    ) -> Result<(f64, f64), Error> {
        let not_found = || Error::FontNotFound { family: family.to_string(), weight };

        let query = fontdb::Query {
            families: &[fontdb::Family::Name(family)],
            weight: fontdb::Weight(weight),
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };
        let id = self.db.query(&query).ok_or_else(not_found)?;
        let raw = self
            .db
            .with_face_data(id, |data, index| face_metrics(data, index, text))
            .flatten()
            .ok_or_else(not_found)?;

        tracing::trace!(family, weight, size, lines = raw.lines, "measured text");
        Ok(scale_metrics(raw, size, self.dpi))
    }
}

impl Default for TextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

/// Sum advance widths per line and collect vertical metrics. Characters the
/// face has no glyph for contribute no width.
fn face_metrics(data: &[u8], index: u32, text: &str) -> Option<RawMetrics> {
    let face = match Face::parse(data, index) {
        Ok(face) => face,
        Err(_) => return None,
    };
    let mut width_units = 0f64;
    let mut lines = 0usize;
    for line in text.split('\n') {
        lines += 1;
        let mut advance = 0u64;
        for c in line.chars() {
            if let Some(glyph) = face.glyph_index(c) {
                advance += u64::from(face.glyph_hor_advance(glyph).unwrap_or(0));
            }
        }
        #[allow(clippy::cast_precision_loss)]
        let line_width = advance as f64;
        width_units = width_units.max(line_width);
    }
    Some(RawMetrics {
        width_units,
        lines,
        ascender: f64::from(face.ascender()),
        descender: f64::from(face.descender()),
        line_gap: f64::from(face.line_gap()),
        units_per_em: f64::from(face.units_per_em()),
    })
}

/// Scale design-unit metrics to pixels at the given point size and DPI.
fn scale_metrics(raw: RawMetrics, size: f64, dpi: f64) -> (f64, f64) {
    let px_per_unit = size * (dpi / BASE_DPI) / raw.units_per_em;
    let width = raw.width_units * px_per_unit;
    let line_height = raw.ascender - raw.descender;
    #[allow(clippy::cast_precision_loss)]
    let n = raw.lines as f64;
    let height = (n * line_height + (n - 1.0) * raw.line_gap) * px_per_unit;
    (width, height)
}
