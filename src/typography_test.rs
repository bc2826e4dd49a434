use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn raw(width_units: f64, lines: usize) -> RawMetrics {
    RawMetrics {
        width_units,
        lines,
        ascender: 800.0,
        descender: -200.0,
        line_gap: 100.0,
        units_per_em: 1000.0,
    }
}

// --- Scaling ---

#[test]
fn single_line_scales_by_size_over_units_per_em() {
    let (w, h) = scale_metrics(raw(2000.0, 1), 10.0, 72.0);
    assert!(approx_eq(w, 20.0));
    // ascender - descender = 1000 units, exactly the font size.
    assert!(approx_eq(h, 10.0));
}

#[test]
fn multi_line_height_adds_line_gaps() {
    let (_, h) = scale_metrics(raw(2000.0, 2), 10.0, 72.0);
    // 2 * 1000 + 1 * 100 = 2100 units -> 21 px.
    assert!(approx_eq(h, 21.0));
}

#[test]
fn dpi_scales_linearly() {
    let (w72, h72) = scale_metrics(raw(1000.0, 1), 12.0, 72.0);
    let (w144, h144) = scale_metrics(raw(1000.0, 1), 12.0, 144.0);
    assert!(approx_eq(w144, w72 * 2.0));
    assert!(approx_eq(h144, h72 * 2.0));
}

// --- Measurer ---

#[test]
fn default_dpi_is_base() {
    assert!(approx_eq(TextMeasurer::new().dpi(), 72.0));
    assert!(approx_eq(TextMeasurer::with_dpi(144.0).dpi(), 144.0));
}

#[test]
fn unknown_font_is_reported_not_substituted() {
    let measurer = TextMeasurer::new();
    let result = measurer.measure("hello", "no-such-font-family-zzz", 400, 12.0);
    assert!(matches!(
        result,
        Err(crate::Error::FontNotFound { ref family, weight: 400 })
            if family == "no-such-font-family-zzz"
    ));
}
