//! Small numeric helpers shared across modules.

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;

/// Format a number the way it is stored in attributes: integral values print
/// without a decimal point (`10`, not `10.0`), everything else uses the
/// shortest exact representation (`10.5`).
#[must_use]
pub(crate) fn fmt_num(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation)]
        let int = v as i64;
        format!("{int}")
    } else {
        format!("{v}")
    }
}

/// Parse a float without surfacing the parse error; `None` on failure.
#[must_use]
pub(crate) fn parse_f64(s: &str) -> Option<f64> {
    match s.trim().parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => None,
    }
}

/// Round half up to the nearest integer.
#[must_use]
pub(crate) fn math_round(v: f64) -> i64 {
    #[allow(clippy::cast_possible_truncation)]
    let r = (v + 0.5).floor() as i64;
    r
}

/// Clamp `value` into `[min, max]`.
#[must_use]
pub(crate) fn constrain(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
