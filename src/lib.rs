//! Declarative SVG document construction for charts and data graphics.
//!
//! This crate builds SVG documents programmatically: typed element wrappers
//! sit on top of a generic markup node tree, expose semantic properties
//! (position, radius, rotation, multi-line text layout) that read and write
//! through to the underlying attribute set, and serialize the whole tree to
//! markup. Around that core sit stateless helpers for chart construction:
//! path d-string builders, scale functions, axis ticks, and color math.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`dom`] | Generic node tree plus markup reading and writing |
//! | [`element`] | Wrapper base: attribute reflection, traversal, tag registry |
//! | [`elements`] | Typed wrappers: groups, shapes, text, animation |
//! | [`document`] | The `<svg>` root: viewbox, serialization, persistence |
//! | [`transform`] | Composed `transform` attribute state for groups |
//! | [`vector`] | 2D vector value type |
//! | [`shapes`] | Path d-string builders (star, cross, arc, ring) |
//! | [`scales`] | Linear/band/point/ordinal/square/circle scales and ticks |
//! | [`color`] | Hex/RGB conversion, blending, palettes |
//! | [`typography`] | System font lookup and text measurement |
//! | [`consts`] | Shared constants (namespace URI, defaults) |

pub mod color;
pub mod consts;
pub mod document;
pub mod dom;
pub mod element;
pub mod elements;
mod error;
pub mod scales;
pub mod shapes;
pub mod transform;
pub mod typography;
mod util;
pub mod vector;

pub use document::Svg;
pub use dom::Node;
pub use element::{AnyElement, AttrValue, Element, SvgElement};
pub use elements::{
    Animate, Circle, Ellipse, G, Line, Path, Polygon, Polyline, RepeatCount, Text, TextOnPath,
};
pub use error::Error;
pub use transform::{Transform, TransformOp};
pub use vector::Vector;
