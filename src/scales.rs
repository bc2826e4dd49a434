//! Stateless scale helpers mapping data values onto visual ranges, plus axis
//! tick calculation.
//!
//! Every scale is a plain value type constructed from a domain and a range;
//! `map` does the projection. Categorical scales answer `None` for keys
//! outside their domain rather than erroring.

#[cfg(test)]
#[path = "scales_test.rs"]
mod scales_test;

use std::collections::HashMap;

/// Default gap fraction between bands in a [`BandScale`].
pub const DEFAULT_BAND_PADDING: f64 = 0.1;

/// Default end padding (in steps) of a [`PointScale`].
pub const DEFAULT_POINT_PADDING: f64 = 0.5;

/// Errors from scale construction.
#[derive(Debug, thiserror::Error)]
pub enum ScaleError {
    /// A categorical scale needs at least one domain value.
    #[error("domain must contain at least one value")]
    EmptyDomain,
    /// An ordinal scale needs at least one range value to cycle through.
    #[error("range must contain at least one value")]
    EmptyRange,
    /// Square-root scales only accept non-negative domains.
    #[error("domain values must be non-negative")]
    NegativeDomain,
    /// The domain endpoints cannot be distinguished.
    #[error("domain endpoints must be distinct")]
    DegenerateDomain,
}

/// Linear interpolation from a numeric domain onto a numeric range.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        (value - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0) + self.r0
    }
}

/// Evenly spaced bands for categorical values, with a configurable gap
/// fraction between bands.
#[derive(Debug, Clone)]
pub struct BandScale {
    domain: Vec<String>,
    r0: f64,
    step: f64,
    band_width: f64,
    padding: f64,
}

impl BandScale {
    /// Build with [`DEFAULT_BAND_PADDING`].
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::EmptyDomain`] for an empty domain.
    pub fn new<S: AsRef<str>>(domain: &[S], range: (f64, f64)) -> Result<Self, ScaleError> {
        Self::with_padding(domain, range, DEFAULT_BAND_PADDING)
    }

    /// Build with an explicit gap fraction.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::EmptyDomain`] for an empty domain.
    pub fn with_padding<S: AsRef<str>>(
        domain: &[S],
        range: (f64, f64),
        padding: f64,
    ) -> Result<Self, ScaleError> {
        if domain.is_empty() {
            return Err(ScaleError::EmptyDomain);
        }
        #[allow(clippy::cast_precision_loss)]
        let n = domain.len() as f64;
        let step = (range.1 - range.0) / (n + padding * (n - 1.0));
        Ok(Self {
            domain: domain.iter().map(|s| s.as_ref().to_string()).collect(),
            r0: range.0,
            step,
            band_width: step * (1.0 - padding),
            padding,
        })
    }

    /// Start position of the band for `value`, or `None` outside the domain.
    #[must_use]
    pub fn map(&self, value: &str) -> Option<f64> {
        let index = self.domain.iter().position(|d| d == value)?;
        #[allow(clippy::cast_precision_loss)]
        let i = index as f64;
        Some(self.r0 + i * self.step * (1.0 + self.padding))
    }

    /// Width of one band.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.band_width
    }
}

/// Evenly spaced points for categorical values, with padding at both ends.
#[derive(Debug, Clone)]
pub struct PointScale {
    domain: Vec<String>,
    r0: f64,
    step: f64,
    padding: f64,
}

impl PointScale {
    /// Build with [`DEFAULT_POINT_PADDING`].
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::EmptyDomain`] for an empty domain.
    pub fn new<S: AsRef<str>>(domain: &[S], range: (f64, f64)) -> Result<Self, ScaleError> {
        Self::with_padding(domain, range, DEFAULT_POINT_PADDING)
    }

    /// Build with an explicit end padding, measured in steps.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::EmptyDomain`] for an empty domain.
    pub fn with_padding<S: AsRef<str>>(
        domain: &[S],
        range: (f64, f64),
        padding: f64,
    ) -> Result<Self, ScaleError> {
        if domain.is_empty() {
            return Err(ScaleError::EmptyDomain);
        }
        #[allow(clippy::cast_precision_loss)]
        let n = domain.len() as f64;
        let step = (range.1 - range.0) / (n - 1.0 + 2.0 * padding);
        Ok(Self {
            domain: domain.iter().map(|s| s.as_ref().to_string()).collect(),
            r0: range.0,
            step,
            padding,
        })
    }

    /// Position of the point for `value`, or `None` outside the domain.
    #[must_use]
    pub fn map(&self, value: &str) -> Option<f64> {
        let index = self.domain.iter().position(|d| d == value)?;
        #[allow(clippy::cast_precision_loss)]
        let i = index as f64;
        Some(self.r0 + self.step * (i + self.padding))
    }
}

/// Cyclic assignment of output values to categorical keys: the i-th domain
/// value maps to the `i % len`-th range value.
#[derive(Debug, Clone)]
pub struct OrdinalScale<T: Clone> {
    mapping: HashMap<String, T>,
}

impl<T: Clone> OrdinalScale<T> {
    /// # Errors
    ///
    /// Returns [`ScaleError::EmptyRange`] for an empty range.
    pub fn new<S: AsRef<str>>(domain: &[S], range: &[T]) -> Result<Self, ScaleError> {
        if range.is_empty() {
            return Err(ScaleError::EmptyRange);
        }
        let mapping = domain
            .iter()
            .enumerate()
            .map(|(i, d)| (d.as_ref().to_string(), range[i % range.len()].clone()))
            .collect();
        Ok(Self { mapping })
    }

    /// Assigned output for `value`, or `None` outside the domain.
    #[must_use]
    pub fn map(&self, value: &str) -> Option<T> {
        self.mapping.get(value).cloned()
    }
}

/// Square-root transformation, for sizing marks whose area should track the
/// input linearly when the visual variable is a side length.
#[derive(Debug, Clone, Copy)]
pub struct SquareScale {
    sqrt_d0: f64,
    sqrt_d1: f64,
    r0: f64,
    r1: f64,
}

impl SquareScale {
    /// # Errors
    ///
    /// Returns [`ScaleError::NegativeDomain`] for domains below zero and
    /// [`ScaleError::DegenerateDomain`] when the square roots of the
    /// endpoints coincide.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Result<Self, ScaleError> {
        if domain.0 < 0.0 || domain.1 < 0.0 {
            return Err(ScaleError::NegativeDomain);
        }
        let (sqrt_d0, sqrt_d1) = (domain.0.sqrt(), domain.1.sqrt());
        if sqrt_d0 == sqrt_d1 {
            return Err(ScaleError::DegenerateDomain);
        }
        Ok(Self { sqrt_d0, sqrt_d1, r0: range.0, r1: range.1 })
    }

    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        self.r0 + (value.sqrt() - self.sqrt_d0) / (self.sqrt_d1 - self.sqrt_d0) * (self.r1 - self.r0)
    }
}

/// Radius scale that keeps circle area linearly proportional to the input.
#[derive(Debug, Clone, Copy)]
pub struct CircleScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl CircleScale {
    /// # Errors
    ///
    /// Returns [`ScaleError::DegenerateDomain`] when the endpoints coincide.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Result<Self, ScaleError> {
        if domain.0 == domain.1 {
            return Err(ScaleError::DegenerateDomain);
        }
        Ok(Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 })
    }

    /// Radius for `value`: the squared radii interpolate linearly.
    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let t = (value - self.d0) / (self.d1 - self.d0);
        (t * (self.r1 * self.r1 - self.r0 * self.r0) + self.r0 * self.r0).sqrt()
    }
}

/// Axis tick positions between `min` and `max`, rounded to a 1/2/5 × 10ᵏ
/// step sized for roughly `count` ticks.
///
/// With `below_max` the ticks stop at the last position ≤ `max`; otherwise
/// the sequence runs through the first position ≥ `max`, so the data range
/// is fully covered. Positions are rounded to the step's decimal precision
/// to keep values exact.
#[must_use]
pub fn ticks(min: f64, max: f64, count: usize, below_max: bool) -> Vec<f64> {
    if max <= min {
        return Vec::new();
    }
    #[allow(clippy::cast_precision_loss)]
    let intervals = (count.max(2) - 1) as f64;
    let rough = (max - min) / intervals;
    let magnitude = 10f64.powf(rough.log10().floor());
    let residual = rough / magnitude;
    let nice = if residual < 1.5 {
        1.0
    } else if residual < 3.0 {
        2.0
    } else if residual < 7.0 {
        5.0
    } else {
        10.0
    };
    let step = nice * magnitude;

    let decimals = if step >= 1.0 {
        0
    } else {
        #[allow(clippy::cast_possible_truncation)]
        let d = (-step.log10().floor()) as i32;
        d
    };

    let mut out = Vec::new();
    let mut tick = (min / step).ceil() * step;
    let eps = step * 1e-9;
    loop {
        let rounded = round_to(tick, decimals);
        if below_max {
            if rounded > max + eps {
                break;
            }
            out.push(rounded);
        } else {
            out.push(rounded);
            if rounded >= max - eps {
                break;
            }
        }
        tick += step;
    }
    out
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
