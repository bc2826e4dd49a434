//! Wrapper base: attribute reflection, tree editing, traversal, and the tag
//! registry.
//!
//! Every typed wrapper holds exactly one [`Node`](crate::dom::Node) and
//! implements [`Element`], which supplies the generic behavior: normalized
//! attribute reads with numeric coercion, writes and deletions, child
//! append/remove with parent tracking, serialization, and `find`/`find_all`
//! traversal. Traversal never hands back a bare node: every match is wrapped
//! through the registry so it carries its specialized behavior
//! ([`AnyElement`]).

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use std::collections::{HashMap, VecDeque};
use std::fmt;

use once_cell::sync::Lazy;

use crate::document::Svg;
use crate::dom::Node;
use crate::elements::{
    Animate, Circle, Ellipse, G, Line, Path, Polygon, Polyline, Rect, Text, TextOnPath,
};
use crate::error::Error;
use crate::util::fmt_num;

/// A coerced attribute value.
///
/// Reads coerce the stored string: integer when it has no decimal point and
/// no exponent marker, float otherwise, and the raw text when neither parse
/// succeeds. Writes stringify with attribute number formatting (integral
/// floats print without a decimal point).
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl AttrValue {
    /// Numeric view of the value; text falls back to a float parse.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Text(s) => crate::util::parse_f64(s),
        }
    }

    /// Integer view of the value, if it is one.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Text view of the value, if it failed numeric coercion.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => f.write_str(&fmt_num(*v)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for AttrValue {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for AttrValue {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Normalize a logical property name to its attribute spelling: underscores
/// become hyphens (`font_size` → `font-size`).
#[must_use]
pub(crate) fn normalize_name(name: &str) -> String {
    name.replace('_', "-")
}

/// Coerce a stored attribute string for a read.
#[must_use]
pub(crate) fn coerce_attr(raw: &str) -> AttrValue {
    if raw.contains('.') || raw.contains(['e', 'E']) {
        match raw.parse::<f64>() {
            Ok(f) => AttrValue::Float(f),
            Err(_) => AttrValue::Text(raw.to_string()),
        }
    } else {
        match raw.parse::<i64>() {
            Ok(i) => AttrValue::Int(i),
            Err(_) => AttrValue::Text(raw.to_string()),
        }
    }
}

/// Shared behavior of every typed wrapper.
///
/// Implementors supply [`node`](Element::node); everything else has a default
/// in terms of it. Group elements override [`set_value`](Element::set_value)
/// (to route transform attributes through shadow state) and
/// [`remove_node`](Element::remove_node) (to garbage-collect emptied groups).
pub trait Element {
    /// The backing tree node.
    fn node(&self) -> &Node;

    /// Local tag name of the backing node.
    fn tag(&self) -> String {
        self.node().tag()
    }

    /// Read a logical property through name normalization and numeric
    /// coercion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AttributeNotFound`] when the attribute is absent.
    fn attr(&self, name: &str) -> Result<AttrValue, Error> {
        let attr_name = normalize_name(name);
        match self.node().attr(&attr_name) {
            Some(raw) => Ok(coerce_attr(&raw)),
            None => Err(Error::AttributeNotFound {
                element: self.node().tag(),
                name: attr_name,
            }),
        }
    }

    /// Write one attribute value. This is the single funnel every write goes
    /// through; specialized wrappers intercept it.
    fn set_value(&mut self, name: &str, value: &AttrValue) {
        self.node()
            .set_attr(&normalize_name(name), &value.to_string());
    }

    /// Write one attribute from anything convertible to a value.
    fn set<V: Into<AttrValue>>(&mut self, name: &str, value: V)
    where
        Self: Sized,
    {
        self.set_value(name, &value.into());
    }

    /// Remove an attribute. Removing an absent attribute is a no-op.
    fn unset(&mut self, name: &str) {
        self.node().remove_attr(&normalize_name(name));
    }

    /// Apply many writes and removals in iteration order. `None` removes the
    /// attribute.
    fn set_attrs(&mut self, attrs: &[(&str, Option<AttrValue>)]) {
        for (name, value) in attrs {
            match value {
                Some(v) => self.set_value(name, v),
                None => self.unset(name),
            }
        }
    }

    /// Append a wrapped child, recording the parent back-reference on its
    /// node. Returns `self` for chaining.
    fn append<E: Element>(&self, child: &E) -> &Self
    where
        Self: Sized,
    {
        self.node().append_child(child.node());
        self
    }

    /// Append a raw node.
    fn append_node(&self, child: &Node) {
        self.node().append_child(child);
    }

    /// Detach a wrapped child from this element.
    fn remove<E: Element>(&self, child: &E)
    where
        Self: Sized,
    {
        self.remove_node(child.node());
    }

    /// Detach a child node from this element.
    fn remove_node(&self, child: &Node) {
        self.node().remove_child(child);
    }

    /// Serialize the subtree rooted at this element to markup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Xml`] / [`Error::Io`] when the writer fails.
    fn to_xml_string(&self) -> Result<String, Error> {
        self.node().to_xml()
    }

    /// First matching descendant, wrapped through the registry. Searches
    /// direct children unless `nested`.
    fn find(&self, tag: &str, nested: bool) -> Option<AnyElement> {
        self.find_all(tag, nested).next()
    }

    /// All matching descendants in document order, each independently
    /// wrapped. The iterator is lazy and fresh per call.
    fn find_all(&self, tag: &str, nested: bool) -> FindAll {
        FindAll::new(self.node(), tag, nested)
    }
}

/// A generic wrapper for tags with no specialized behavior.
#[derive(Debug, Clone)]
pub struct SvgElement {
    node: Node,
}

impl SvgElement {
    /// Create a detached element with the given tag.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self { node: Node::new(tag) }
    }

    /// Wrap an existing node.
    #[must_use]
    pub fn from_node(node: Node) -> Self {
        Self { node }
    }
}

impl Element for SvgElement {
    fn node(&self) -> &Node {
        &self.node
    }
}

/// Lazy document-order iterator over matching descendants.
pub struct FindAll {
    tag: String,
    nested: bool,
    queue: VecDeque<Node>,
}

impl FindAll {
    fn new(root: &Node, tag: &str, nested: bool) -> Self {
        Self {
            tag: tag.to_string(),
            nested,
            queue: root.children().into(),
        }
    }
}

impl Iterator for FindAll {
    type Item = AnyElement;

    fn next(&mut self) -> Option<AnyElement> {
        while let Some(node) = self.queue.pop_front() {
            if self.nested {
                for (i, child) in node.children().into_iter().enumerate() {
                    self.queue.insert(i, child);
                }
            }
            if node.tag() == self.tag {
                return Some(AnyElement::wrap(node));
            }
        }
        None
    }
}

type WrapFn = fn(Node) -> AnyElement;

/// Tag-name → wrapper-type registry. Constructed once on first use and
/// read-only afterwards; consulted on every traversal so matches come back
/// with their specialized behavior.
static REGISTRY: Lazy<HashMap<&'static str, WrapFn>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, WrapFn> = HashMap::new();
    map.insert("svg", |n| AnyElement::Svg(Svg::from_node(n)));
    map.insert("g", |n| AnyElement::Group(G::from_node(n)));
    map.insert("circle", |n| AnyElement::Circle(Circle::from_node(n)));
    map.insert("ellipse", |n| AnyElement::Ellipse(Ellipse::from_node(n)));
    map.insert("rect", |n| AnyElement::Rect(Rect::from_node(n)));
    map.insert("path", |n| AnyElement::Path(Path::from_node(n)));
    map.insert("line", |n| AnyElement::Line(Line::from_node(n)));
    map.insert("polygon", |n| AnyElement::Polygon(Polygon::from_node(n)));
    map.insert("polyline", |n| AnyElement::Polyline(Polyline::from_node(n)));
    map.insert("text", |n| AnyElement::Text(Text::from_node(n)));
    map.insert("textPath", |n| AnyElement::TextOnPath(TextOnPath::from_node(n)));
    map.insert("animate", |n| AnyElement::Animate(Animate::from_node(n)));
    map
});

/// A node wrapped with whichever typed wrapper its tag registers, falling
/// back to the generic [`SvgElement`].
#[derive(Debug)]
pub enum AnyElement {
    Svg(Svg),
    Group(G),
    Circle(Circle),
    Ellipse(Ellipse),
    Rect(Rect),
    Path(Path),
    Line(Line),
    Polygon(Polygon),
    Polyline(Polyline),
    Text(Text),
    TextOnPath(TextOnPath),
    Animate(Animate),
    Other(SvgElement),
}

impl AnyElement {
    /// Wrap `node` with the type its tag registers.
    #[must_use]
    pub fn wrap(node: Node) -> AnyElement {
        let tag = node.tag();
        match REGISTRY.get(tag.as_str()) {
            Some(ctor) => ctor(node),
            None => AnyElement::Other(SvgElement::from_node(node)),
        }
    }

    #[must_use]
    pub fn into_svg(self) -> Option<Svg> {
        match self {
            Self::Svg(e) => Some(e),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_group(self) -> Option<G> {
        match self {
            Self::Group(e) => Some(e),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_circle(self) -> Option<Circle> {
        match self {
            Self::Circle(e) => Some(e),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_ellipse(self) -> Option<Ellipse> {
        match self {
            Self::Ellipse(e) => Some(e),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_rect(self) -> Option<Rect> {
        match self {
            Self::Rect(e) => Some(e),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Path(e) => Some(e),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_line(self) -> Option<Line> {
        match self {
            Self::Line(e) => Some(e),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_polygon(self) -> Option<Polygon> {
        match self {
            Self::Polygon(e) => Some(e),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_polyline(self) -> Option<Polyline> {
        match self {
            Self::Polyline(e) => Some(e),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_text(self) -> Option<Text> {
        match self {
            Self::Text(e) => Some(e),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_text_on_path(self) -> Option<TextOnPath> {
        match self {
            Self::TextOnPath(e) => Some(e),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_animate(self) -> Option<Animate> {
        match self {
            Self::Animate(e) => Some(e),
            _ => None,
        }
    }
}

impl Element for AnyElement {
    fn node(&self) -> &Node {
        match self {
            Self::Svg(e) => e.node(),
            Self::Group(e) => e.node(),
            Self::Circle(e) => e.node(),
            Self::Ellipse(e) => e.node(),
            Self::Rect(e) => e.node(),
            Self::Path(e) => e.node(),
            Self::Line(e) => e.node(),
            Self::Polygon(e) => e.node(),
            Self::Polyline(e) => e.node(),
            Self::Text(e) => e.node(),
            Self::TextOnPath(e) => e.node(),
            Self::Animate(e) => e.node(),
            Self::Other(e) => e.node(),
        }
    }

    fn set_value(&mut self, name: &str, value: &AttrValue) {
        match self {
            Self::Group(e) => e.set_value(name, value),
            Self::Polygon(e) => e.set_value(name, value),
            Self::Polyline(e) => e.set_value(name, value),
            other => other
                .node()
                .set_attr(&normalize_name(name), &value.to_string()),
        }
    }

    fn remove_node(&self, child: &Node) {
        match self {
            Self::Group(e) => e.remove_node(child),
            other => {
                other.node().remove_child(child);
            }
        }
    }
}
