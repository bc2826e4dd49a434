//! The `<svg>` document root: viewbox handling, serialization, and
//! persistence.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::fs;
use std::path::Path as FsPath;

use crate::consts::SVG_NS;
use crate::dom::Node;
use crate::element::Element;
use crate::error::Error;
use crate::util::{fmt_num, parse_f64};

/// The top-level `<svg>` container.
///
/// Owns the viewbox and dimension attributes and serializes the whole tree.
/// The SVG namespace is bound as the default namespace, so child tags
/// serialize unprefixed.
#[derive(Debug, Clone)]
pub struct Svg {
    node: Node,
}

impl Svg {
    /// Create a root from a 2-number (`[width, height]`) or 4-number
    /// (`[min_x, min_y, width, height]`) viewbox.
    ///
    /// The 2-number form expands to `"0 0 w h"`. `width`/`height` attributes
    /// are written with a `px` suffix from the first two viewbox numbers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidViewbox`] for any other arity.
    pub fn new(viewbox: &[f64]) -> Result<Self, Error> {
        let vb = match viewbox {
            [w, h] => format!("0 0 {} {}", fmt_num(*w), fmt_num(*h)),
            [min_x, min_y, w, h] => format!(
                "{} {} {} {}",
                fmt_num(*min_x),
                fmt_num(*min_y),
                fmt_num(*w),
                fmt_num(*h)
            ),
            other => return Err(Error::InvalidViewbox(other.len())),
        };
        let node = Node::new("svg");
        node.set_attr("xmlns", SVG_NS);
        node.set_attr("viewBox", &vb);
        node.set_attr("width", &format!("{}px", fmt_num(viewbox[0])));
        node.set_attr("height", &format!("{}px", fmt_num(viewbox[1])));
        Ok(Self { node })
    }

    /// Wrap an existing node.
    #[must_use]
    pub fn from_node(node: Node) -> Self {
        Self { node }
    }

    fn viewbox_numbers(&self) -> Vec<f64> {
        self.node
            .attr("viewBox")
            .map(|raw| raw.split_whitespace().filter_map(parse_f64).collect())
            .unwrap_or_default()
    }

    /// Width derived from the stored viewBox; 0 when the attribute is absent
    /// or malformed.
    #[must_use]
    pub fn width(&self) -> f64 {
        match self.viewbox_numbers().as_slice() {
            [min_x, _, w, _] => w - min_x,
            _ => 0.0,
        }
    }

    /// Height derived from the stored viewBox; 0 when the attribute is
    /// absent or malformed.
    #[must_use]
    pub fn height(&self) -> f64 {
        match self.viewbox_numbers().as_slice() {
            [_, min_y, _, h] => h - min_y,
            _ => 0.0,
        }
    }

    /// Rebuild a document from markup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Xml`] for malformed markup and
    /// [`Error::NoRootElement`] for inputs with no element.
    pub fn parse(xml: &str) -> Result<Self, Error> {
        let node = Node::parse(xml)?;
        Ok(Self { node })
    }

    /// Read and rebuild a document from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read, otherwise the
    /// [`parse`](Svg::parse) errors.
    pub fn load(path: impl AsRef<FsPath>) -> Result<Self, Error> {
        let path = path.as_ref();
        let xml = fs::read_to_string(path)?;
        let doc = Self::parse(&xml)?;
        tracing::debug!(path = %path.display(), "loaded document");
        Ok(doc)
    }

    /// Write the serialized document to `path`, overwriting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the write fails, or the serialization
    /// errors.
    pub fn save(&self, path: impl AsRef<FsPath>) -> Result<(), Error> {
        let path = path.as_ref();
        let xml = self.to_xml_string()?;
        fs::write(path, xml)?;
        tracing::debug!(path = %path.display(), "saved document");
        Ok(())
    }
}

impl Element for Svg {
    fn node(&self) -> &Node {
        &self.node
    }
}
