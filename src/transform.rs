//! Composed `transform` attribute state for group elements.
//!
//! A [`Transform`] holds independent position / scale / rotation / pivot
//! components plus the operation order, and is the source of truth for the
//! serialized `transform` attribute: composition elides identity components
//! entirely, and parsing an existing attribute recovers the components
//! regardless of their order in the string.
//!
//! Parsing is deliberately best-effort: a malformed or unrecognized fragment
//! never fails the parse, it just leaves that component at its default. This
//! keeps foreign, hand-authored documents wrappable. `matrix()` and `skew()`
//! forms are not recognized.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use std::fmt;

use crate::util::{fmt_num, parse_f64};
use crate::vector::Vector;

/// One primitive transform operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformOp {
    Translate,
    Rotate,
    Scale,
}

impl TransformOp {
    /// Compact single-letter form used by the `order` attribute.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::Translate => 't',
            Self::Rotate => 'r',
            Self::Scale => 's',
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            't' => Some(Self::Translate),
            'r' => Some(Self::Rotate),
            's' => Some(Self::Scale),
            _ => None,
        }
    }
}

/// Default operation order: translate, then rotate, then scale.
pub const DEFAULT_ORDER: [TransformOp; 3] = [
    TransformOp::Translate,
    TransformOp::Rotate,
    TransformOp::Scale,
];

/// Independent transform components for a group element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Translation, default `(0, 0)`.
    pub pos: Vector,
    /// Scale factors, default `(1, 1)`.
    pub scale: Vector,
    /// Rotation angle in degrees, default `0`.
    pub angle: f64,
    /// Rotation pivot, default `(0, 0)` (rotate around the origin).
    pub pivot: Vector,
    /// Order in which the components compose.
    pub order: [TransformOp; 3],
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            pos: Vector::ZERO,
            scale: Vector::ONE,
            angle: 0.0,
            pivot: Vector::ZERO,
            order: DEFAULT_ORDER,
        }
    }
}

impl Transform {
    /// Whether every component is at its default, in which case no
    /// `transform` attribute should be emitted at all.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.pos == Vector::ZERO && self.angle == 0.0 && self.scale == Vector::ONE
    }

    /// Compose the components into an attribute value.
    ///
    /// Returns `None` for the identity transform. Otherwise walks the
    /// operation order and emits each non-default component:
    /// `translate(x y)`, `rotate(a)` / `rotate(a,px,py)` when the pivot is
    /// non-zero, and `scale(x y)`, joined by single spaces.
    #[must_use]
    pub fn compose(&self) -> Option<String> {
        if self.is_identity() {
            return None;
        }
        let mut parts = Vec::new();
        for op in self.order {
            match op {
                TransformOp::Translate => {
                    if self.pos != Vector::ZERO {
                        parts.push(format!("translate({})", self.pos));
                    }
                }
                TransformOp::Rotate => {
                    if self.angle != 0.0 {
                        if self.pivot == Vector::ZERO {
                            parts.push(format!("rotate({})", fmt_num(self.angle)));
                        } else {
                            parts.push(format!(
                                "rotate({},{},{})",
                                fmt_num(self.angle),
                                fmt_num(self.pivot.x),
                                fmt_num(self.pivot.y)
                            ));
                        }
                    }
                }
                TransformOp::Scale => {
                    if self.scale != Vector::ONE {
                        parts.push(format!("scale({})", self.scale));
                    }
                }
            }
        }
        Some(parts.join(" "))
    }

    /// Recover components from an existing attribute value.
    ///
    /// Each known function form is located independently of its position in
    /// the string: `rotate` with three numbers yields angle plus pivot, with
    /// one number angle only; `translate` needs at least two numbers;
    /// `scale` with one number is uniform, with two or more non-uniform.
    /// Anything malformed leaves that component at its default. The order is
    /// not recoverable from the string and stays at [`DEFAULT_ORDER`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let mut t = Transform::default();

        if let Some(nums) = function_args(s, "rotate") {
            match nums.len() {
                1 => t.angle = nums[0],
                3 => {
                    t.angle = nums[0];
                    t.pivot = Vector::new(nums[1], nums[2]);
                }
                _ => {
                    tracing::trace!(input = s, "rotate() arity not recognized, keeping default");
                }
            }
        }
        if let Some(nums) = function_args(s, "translate") {
            if nums.len() >= 2 {
                t.pos = Vector::new(nums[0], nums[1]);
            } else {
                tracing::trace!(input = s, "translate() arity not recognized, keeping default");
            }
        }
        if let Some(nums) = function_args(s, "scale") {
            match nums.len() {
                0 => {
                    tracing::trace!(input = s, "scale() without arguments, keeping default");
                }
                1 => t.scale = Vector::new(nums[0], nums[0]),
                _ => t.scale = Vector::new(nums[0], nums[1]),
            }
        }

        t
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.compose() {
            Some(s) => f.write_str(&s),
            None => Ok(()),
        }
    }
}

/// Numeric arguments of `func(...)` inside `s`, or `None` when the function
/// is absent or any argument fails to parse.
fn function_args(s: &str, func: &str) -> Option<Vec<f64>> {
    let open = s.find(func)? + func.len();
    let rest = &s[open..];
    let inner = rest.strip_prefix('(')?;
    let close = inner.find(')')?;
    let args: Vec<&str> = inner[..close]
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .collect();
    let mut nums = Vec::with_capacity(args.len());
    for arg in args {
        match parse_f64(arg) {
            Some(n) => nums.push(n),
            None => {
                tracing::trace!(fragment = arg, "unparsable transform argument, ignoring component");
                return None;
            }
        }
    }
    Some(nums)
}

/// Parse the compact `order` attribute form (`"trs"`, `"rts"`, ...). The
/// value must name each of translate, rotate, and scale exactly once;
/// anything else is rejected.
#[must_use]
pub(crate) fn parse_order(s: &str) -> Option<[TransformOp; 3]> {
    let letters: Vec<TransformOp> = s
        .trim()
        .chars()
        .filter_map(TransformOp::from_letter)
        .collect();
    if letters.len() != 3 || s.trim().chars().count() != 3 {
        return None;
    }
    let [a, b, c] = [letters[0], letters[1], letters[2]];
    if a == b || b == c || a == c {
        return None;
    }
    Some([a, b, c])
}

/// Render an order as its compact letter form.
#[must_use]
pub fn order_letters(order: [TransformOp; 3]) -> String {
    order.iter().map(|op| op.letter()).collect()
}
