//! 2D vector value type used for positions, scales, pivots, and geometry
//! results throughout the crate.

#[cfg(test)]
#[path = "vector_test.rs"]
mod vector_test;

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::util::fmt_num;

/// An (x, y) pair in user units.
///
/// `Display` renders as `"x y"` using attribute number formatting, which is
/// the form composed transform functions expect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    /// The zero vector, the default position and pivot.
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    /// The unit vector, the default scale.
    pub const ONE: Vector = Vector { x: 1.0, y: 1.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: Vector) -> f64 {
        (other - *self).magnitude()
    }

    /// Direction of the vector in degrees, normalized to `[0, 360)`.
    #[must_use]
    pub fn angle_deg(&self) -> f64 {
        let deg = self.y.atan2(self.x).to_degrees();
        if deg < 0.0 { deg + 360.0 } else { deg }
    }

    /// The vector rotated counterclockwise by `deg` degrees around the origin.
    #[must_use]
    pub fn rotated_deg(&self, deg: f64) -> Vector {
        let rad = deg.to_radians();
        let (sin, cos) = rad.sin_cos();
        Vector {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", fmt_num(self.x), fmt_num(self.y))
    }
}
