//! Path d-string builders for common chart marks.
//!
//! Pure functions producing `d` attribute values for `<path>` elements.
//! Coordinates are formatted to two decimal places. Angles are degrees,
//! measured counterclockwise-positive in SVG's y-down coordinate system.

#[cfg(test)]
#[path = "shapes_test.rs"]
mod shapes_test;

use std::f64::consts::PI;

/// Errors from the d-string builders.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    /// Coordinate slices of different lengths cannot pair into points.
    #[error("x and y coordinate slices differ in length: {x_len} vs {y_len}")]
    MismatchedLengths {
        /// Number of x coordinates supplied.
        x_len: usize,
        /// Number of y coordinates supplied.
        y_len: usize,
    },
}

fn fmt_point(x: f64, y: f64) -> String {
    format!("{x:.2},{y:.2}")
}

/// Closed star with `n` points centered at `(x, y)`.
///
/// The outline alternates between `outer_radius` and `inner_radius` across
/// `2n` vertices; `angle` rotates the first outer vertex, in degrees.
#[must_use]
pub fn star(x: f64, y: f64, n: u32, inner_radius: f64, outer_radius: f64, angle: f64) -> String {
    let angle_offset = angle.to_radians();
    let step = PI / f64::from(n);
    let mut points = Vec::new();
    for i in 0..2 * n {
        let r = if i % 2 == 0 { outer_radius } else { inner_radius };
        let a = angle_offset + f64::from(i) * step;
        points.push(fmt_point(x + r * a.cos(), y + r * a.sin()));
    }
    format!("M {} Z", points.join(" L "))
}

/// Open polyline through the points paired from `x_coords` and `y_coords`.
///
/// # Errors
///
/// Returns [`ShapeError::MismatchedLengths`] when the slices differ in
/// length.
pub fn polyline_path(x_coords: &[f64], y_coords: &[f64]) -> Result<String, ShapeError> {
    if x_coords.len() != y_coords.len() {
        return Err(ShapeError::MismatchedLengths {
            x_len: x_coords.len(),
            y_len: y_coords.len(),
        });
    }
    let points: Vec<String> = x_coords
        .iter()
        .zip(y_coords)
        .map(|(x, y)| fmt_point(*x, *y))
        .collect();
    Ok(format!("M {}", points.join(" L ")))
}

/// Closed cross (plus sign) centered at `(x, y)`.
///
/// The union of a vertical and a horizontal bar, each `size` long tip-to-tip
/// and `thickness` wide, traced as a single 12-vertex polygon and rotated by
/// `angle` degrees.
#[must_use]
pub fn cross(x: f64, y: f64, size: f64, thickness: f64, angle: f64) -> String {
    let h = size / 2.0;
    let t = thickness / 2.0;

    // Outer boundary, clockwise from the top-left of the vertical bar.
    let corners = [
        (-t, h),
        (t, h),
        (t, t),
        (h, t),
        (h, -t),
        (t, -t),
        (t, -h),
        (-t, -h),
        (-t, -t),
        (-h, -t),
        (-h, t),
        (-t, t),
    ];

    let rad = angle.to_radians();
    let (sin, cos) = rad.sin_cos();
    let points: Vec<String> = corners
        .iter()
        .map(|(px, py)| fmt_point(px * cos - py * sin + x, px * sin + py * cos + y))
        .collect();
    format!("M {} Z", points.join(" L "))
}

fn spans_full_circle(start_angle: f64, end_angle: f64) -> (f64, bool) {
    let delta = (end_angle - start_angle).rem_euclid(360.0);
    let full = delta.abs() < 1e-9 || (delta - 360.0).abs() < 1e-9;
    (delta, full)
}

/// Circular arc of `radius` centered at `(x, y)` from `start_angle` to
/// `end_angle` degrees.
///
/// A full 360° span is drawn as two 180° segments, since a single arc
/// command cannot represent a closed circle.
#[must_use]
pub fn arc(x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) -> String {
    let start_rad = start_angle.to_radians();
    let end_rad = end_angle.to_radians();
    let (delta, full) = spans_full_circle(start_angle, end_angle);

    let point = |a: f64| (x + radius * a.cos(), y + radius * a.sin());
    let (sx, sy) = point(start_rad);

    if full {
        let (mx, my) = point(start_rad + PI);
        return format!(
            "M {} A {radius:.2} {radius:.2} 0 0 1 {} A {radius:.2} {radius:.2} 0 0 1 {}",
            fmt_point(sx, sy),
            fmt_point(mx, my),
            fmt_point(sx, sy),
        );
    }

    let large_arc = u8::from(delta > 180.0);
    let (ex, ey) = point(end_rad);
    format!(
        "M {} A {radius:.2} {radius:.2} 0 {large_arc} 1 {}",
        fmt_point(sx, sy),
        fmt_point(ex, ey),
    )
}

/// Ring (donut) or ring segment centered at `(x, y)`.
///
/// A full 360° span draws a complete donut as two subpaths (`without_inner`
/// is ignored). A partial span draws the outer arc, a radial line to the
/// inner radius, the inner arc, and closes; with `without_inner` the inner
/// arc is omitted and the path closes across the chord instead.
#[must_use]
pub fn ring(
    x: f64,
    y: f64,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
    without_inner: bool,
) -> String {
    let start_rad = start_angle.to_radians();
    let end_rad = end_angle.to_radians();
    let (delta, full) = spans_full_circle(start_angle, end_angle);

    let point = |r: f64, a: f64| (x + r * a.cos(), y + r * a.sin());
    let (osx, osy) = point(outer_radius, start_rad);
    let (oex, oey) = point(outer_radius, end_rad);
    let (isx, isy) = point(inner_radius, start_rad);
    let (iex, iey) = point(inner_radius, end_rad);

    if full {
        let (omx, omy) = point(outer_radius, start_rad + PI);
        let (imx, imy) = point(inner_radius, start_rad + PI);
        return format!(
            "M {} A {outer_radius:.2} {outer_radius:.2} 0 0 1 {} \
             A {outer_radius:.2} {outer_radius:.2} 0 0 1 {} \
             M {} A {inner_radius:.2} {inner_radius:.2} 0 0 0 {} \
             A {inner_radius:.2} {inner_radius:.2} 0 0 0 {} Z",
            fmt_point(osx, osy),
            fmt_point(omx, omy),
            fmt_point(osx, osy),
            fmt_point(iex, iey),
            fmt_point(imx, imy),
            fmt_point(isx, isy),
        );
    }

    let large_arc = u8::from(delta > 180.0);

    if without_inner {
        return format!(
            "M {} L {} A {outer_radius:.2} {outer_radius:.2} 0 {large_arc} 1 {} L {} ",
            fmt_point(isx, isy),
            fmt_point(osx, osy),
            fmt_point(oex, oey),
            fmt_point(iex, iey),
        );
    }

    format!(
        "M {} A {outer_radius:.2} {outer_radius:.2} 0 {large_arc} 1 {} \
         L {} A {inner_radius:.2} {inner_radius:.2} 0 {large_arc} 0 {} Z",
        fmt_point(osx, osy),
        fmt_point(oex, oey),
        fmt_point(iex, iey),
        fmt_point(isx, isy),
    )
}
