//! Crate-level error type for the document and element layers.
//!
//! Helper modules with their own failure domains (`scales`, `shapes`) carry
//! local error enums instead; everything that touches the tree or markup
//! funnels through [`Error`].

use std::io;

/// Errors raised by the document and element layers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A logical property was read from an element that does not carry it.
    #[error("`{element}` element has no attribute `{name}`")]
    AttributeNotFound {
        /// Tag name of the element that was queried.
        element: String,
        /// Normalized (hyphenated) attribute name that was missing.
        name: String,
    },
    /// A document was constructed from a viewbox that is neither 2 nor 4 numbers.
    #[error("viewbox must be 2 or 4 numbers, got {0}")]
    InvalidViewbox(usize),
    /// A path `d` string held an odd number of coordinate tokens.
    #[error("path data holds {count} numeric tokens, which do not pair into (x, y)")]
    MismatchedCoordinatePairs {
        /// Number of numeric tokens found in the path data.
        count: usize,
    },
    /// No installed font matched the requested family and weight.
    #[error("font `{family}` with weight {weight} not found")]
    FontNotFound {
        /// Requested font family name.
        family: String,
        /// Requested numeric weight (400 regular, 700 bold, ...).
        weight: u16,
    },
    /// Markup could not be read or written.
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),
    /// A malformed attribute was met while parsing markup.
    #[error("attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),
    /// Markup bytes were not valid UTF-8.
    #[error("utf8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    /// Parsed markup contained no root element.
    #[error("document has no root element")]
    NoRootElement,
    /// File I/O failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
