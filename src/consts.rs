//! Shared constants for the crate.

/// SVG namespace URI, bound as the default (unprefixed) namespace on document roots.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Line offset used for multi-line text when `font-size` is absent or unparsable.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// Reference DPI at which one point equals one pixel.
pub const BASE_DPI: f64 = 72.0;
