//! Typed element wrappers.
//!
//! Each wrapper owns one backing [`Node`] and exposes the semantic properties
//! of its tag: groups compose a `transform` attribute from shadow state,
//! shapes derive geometry (radius, length, bounding box) from their natural
//! attributes, text decomposes multi-line content into `tspan` children.
//! Wrappers are created directly (a fresh node) or reconstructed from an
//! existing node found by traversal; reconstruction re-reads any shadow state
//! from the serialized attributes.

#[cfg(test)]
#[path = "elements_test.rs"]
mod elements_test;

use std::f64::consts::PI;
use std::fmt;

use crate::consts::DEFAULT_FONT_SIZE;
use crate::dom::Node;
use crate::element::{AnyElement, AttrValue, Element, normalize_name};
use crate::error::Error;
use crate::transform::{Transform, parse_order};
use crate::util::{fmt_num, parse_f64};
use crate::vector::Vector;

/// Numeric attribute with a 0 default, the common case for shape geometry.
fn num_attr(node: &Node, name: &str) -> f64 {
    node.attr(name).and_then(|s| parse_f64(&s)).unwrap_or(0.0)
}

fn set_num_attr(node: &Node, name: &str, value: f64) {
    node.set_attr(name, &fmt_num(value));
}

// =============================================================================
// GROUP
// =============================================================================

/// A `<g>` container whose translation, rotation, and scaling are controlled
/// through independent shadow components composed into a single `transform`
/// attribute.
///
/// Every setter re-serializes the attribute synchronously, so shadow state
/// and markup always agree. A group whose components are all default carries
/// no `transform` attribute at all.
#[derive(Debug, Clone)]
pub struct G {
    node: Node,
    transform: Transform,
}

impl G {
    #[must_use]
    pub fn new() -> Self {
        Self {
            node: Node::new("g"),
            transform: Transform::default(),
        }
    }

    /// Wrap an existing node, parsing its `transform` attribute back into
    /// shadow components. The non-standard `order` and `pivot` attributes,
    /// when present, override the defaults and are consumed.
    #[must_use]
    pub fn from_node(node: Node) -> Self {
        let mut transform = match node.attr("transform") {
            Some(raw) => Transform::parse(&raw),
            None => Transform::default(),
        };
        if let Some(raw) = node.attr("order") {
            match parse_order(&raw) {
                Some(order) => transform.order = order,
                None => tracing::trace!(value = %raw, "unrecognized order attribute, keeping default"),
            }
            node.remove_attr("order");
        }
        if let Some(raw) = node.attr("pivot") {
            match parse_pivot(&raw) {
                Some(pivot) => transform.pivot = pivot,
                None => tracing::trace!(value = %raw, "unrecognized pivot attribute, keeping default"),
            }
            node.remove_attr("pivot");
        }
        let group = Self { node, transform };
        group.sync_transform();
        group
    }

    fn sync_transform(&self) {
        match self.transform.compose() {
            Some(composed) => self.node.set_attr("transform", &composed),
            None => self.node.remove_attr("transform"),
        }
    }

    /// Current shadow components.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    #[must_use]
    pub fn pos(&self) -> Vector {
        self.transform.pos
    }

    pub fn set_pos(&mut self, pos: Vector) {
        self.transform.pos = pos;
        self.sync_transform();
    }

    #[must_use]
    pub fn scale(&self) -> Vector {
        self.transform.scale
    }

    pub fn set_scale(&mut self, scale: Vector) {
        self.transform.scale = scale;
        self.sync_transform();
    }

    /// Rotation angle in degrees.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.transform.angle
    }

    pub fn set_angle(&mut self, angle: f64) {
        self.transform.angle = angle;
        self.sync_transform();
    }

    #[must_use]
    pub fn pivot(&self) -> Vector {
        self.transform.pivot
    }

    pub fn set_pivot(&mut self, pivot: Vector) {
        self.transform.pivot = pivot;
        self.sync_transform();
    }

    #[must_use]
    pub fn order(&self) -> [crate::transform::TransformOp; 3] {
        self.transform.order
    }

    pub fn set_order(&mut self, order: [crate::transform::TransformOp; 3]) {
        self.transform.order = order;
        self.sync_transform();
    }
}

impl Default for G {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for G {
    fn node(&self) -> &Node {
        &self.node
    }

    /// Writes of `transform`, `order`, and `pivot` route through the shadow
    /// state instead of raw attribute storage, then re-compose.
    fn set_value(&mut self, name: &str, value: &AttrValue) {
        let attr_name = normalize_name(name);
        match attr_name.as_str() {
            "transform" => {
                let mut parsed = Transform::parse(&value.to_string());
                parsed.order = self.transform.order;
                self.transform = parsed;
                self.sync_transform();
            }
            "order" => {
                let raw = value.to_string();
                match parse_order(&raw) {
                    Some(order) => {
                        self.transform.order = order;
                        self.sync_transform();
                    }
                    None => tracing::trace!(value = %raw, "unrecognized order value, ignoring"),
                }
            }
            "pivot" => {
                let raw = value.to_string();
                match parse_pivot(&raw) {
                    Some(pivot) => {
                        self.transform.pivot = pivot;
                        self.sync_transform();
                    }
                    None => tracing::trace!(value = %raw, "unrecognized pivot value, ignoring"),
                }
            }
            _ => self.node.set_attr(&attr_name, &value.to_string()),
        }
    }

    /// Detach a child; a group emptied by the removal, and still attached to
    /// a parent, removes itself from that parent in the same call. The upward
    /// walk re-enters through the parent's own `remove_node`, so chains of
    /// emptied groups collapse.
    fn remove_node(&self, child: &Node) {
        if self.node.remove_child(child) && self.node.child_count() == 0 {
            if let Some(parent) = self.node.parent() {
                AnyElement::wrap(parent).remove_node(&self.node);
            }
        }
    }
}

fn parse_pivot(raw: &str) -> Option<Vector> {
    let nums: Vec<f64> = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .filter_map(parse_f64)
        .collect();
    match nums.as_slice() {
        [x, y] => Some(Vector::new(*x, *y)),
        _ => None,
    }
}

// =============================================================================
// SHAPES
// =============================================================================

/// A `<circle>` positioned by its center.
#[derive(Debug, Clone)]
pub struct Circle {
    node: Node,
}

impl Circle {
    #[must_use]
    pub fn new() -> Self {
        Self { node: Node::new("circle") }
    }

    #[must_use]
    pub fn from_node(node: Node) -> Self {
        Self { node }
    }

    /// Center `(cx, cy)`, 0 when absent.
    #[must_use]
    pub fn pos(&self) -> Vector {
        Vector::new(num_attr(&self.node, "cx"), num_attr(&self.node, "cy"))
    }

    pub fn set_pos(&mut self, pos: Vector) {
        set_num_attr(&self.node, "cx", pos.x);
        set_num_attr(&self.node, "cy", pos.y);
    }

    /// Radius `r`, 0 when absent.
    #[must_use]
    pub fn radius(&self) -> f64 {
        num_attr(&self.node, "r")
    }

    pub fn set_radius(&mut self, radius: f64) {
        set_num_attr(&self.node, "r", radius);
    }

    #[must_use]
    pub fn center(&self) -> Vector {
        self.pos()
    }

    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.radius() * 2.0
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius() * self.radius()
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for Circle {
    fn node(&self) -> &Node {
        &self.node
    }
}

/// An `<ellipse>` positioned by its center.
#[derive(Debug, Clone)]
pub struct Ellipse {
    node: Node,
}

impl Ellipse {
    #[must_use]
    pub fn new() -> Self {
        Self { node: Node::new("ellipse") }
    }

    #[must_use]
    pub fn from_node(node: Node) -> Self {
        Self { node }
    }

    #[must_use]
    pub fn pos(&self) -> Vector {
        Vector::new(num_attr(&self.node, "cx"), num_attr(&self.node, "cy"))
    }

    pub fn set_pos(&mut self, pos: Vector) {
        set_num_attr(&self.node, "cx", pos.x);
        set_num_attr(&self.node, "cy", pos.y);
    }

    #[must_use]
    pub fn radius_x(&self) -> f64 {
        num_attr(&self.node, "rx")
    }

    pub fn set_radius_x(&mut self, rx: f64) {
        set_num_attr(&self.node, "rx", rx);
    }

    #[must_use]
    pub fn radius_y(&self) -> f64 {
        num_attr(&self.node, "ry")
    }

    pub fn set_radius_y(&mut self, ry: f64) {
        set_num_attr(&self.node, "ry", ry);
    }
}

impl Default for Ellipse {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for Ellipse {
    fn node(&self) -> &Node {
        &self.node
    }
}

/// A `<rect>` positioned by its top-left corner.
#[derive(Debug, Clone)]
pub struct Rect {
    node: Node,
}

impl Rect {
    #[must_use]
    pub fn new() -> Self {
        Self { node: Node::new("rect") }
    }

    #[must_use]
    pub fn from_node(node: Node) -> Self {
        Self { node }
    }

    #[must_use]
    pub fn pos(&self) -> Vector {
        Vector::new(num_attr(&self.node, "x"), num_attr(&self.node, "y"))
    }

    pub fn set_pos(&mut self, pos: Vector) {
        set_num_attr(&self.node, "x", pos.x);
        set_num_attr(&self.node, "y", pos.y);
    }

    /// Width, 0 when absent.
    #[must_use]
    pub fn width(&self) -> f64 {
        num_attr(&self.node, "width")
    }

    pub fn set_width(&mut self, width: f64) {
        set_num_attr(&self.node, "width", width);
    }

    /// Height, 0 when absent.
    #[must_use]
    pub fn height(&self) -> f64 {
        num_attr(&self.node, "height")
    }

    pub fn set_height(&mut self, height: f64) {
        set_num_attr(&self.node, "height", height);
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for Rect {
    fn node(&self) -> &Node {
        &self.node
    }
}

/// A `<line>` between two endpoints.
#[derive(Debug, Clone)]
pub struct Line {
    node: Node,
}

impl Line {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let node = Node::new("line");
        set_num_attr(&node, "x1", x1);
        set_num_attr(&node, "y1", y1);
        set_num_attr(&node, "x2", x2);
        set_num_attr(&node, "y2", y2);
        Self { node }
    }

    #[must_use]
    pub fn from_node(node: Node) -> Self {
        Self { node }
    }

    #[must_use]
    pub fn x1(&self) -> f64 {
        num_attr(&self.node, "x1")
    }

    pub fn set_x1(&mut self, v: f64) {
        set_num_attr(&self.node, "x1", v);
    }

    #[must_use]
    pub fn y1(&self) -> f64 {
        num_attr(&self.node, "y1")
    }

    pub fn set_y1(&mut self, v: f64) {
        set_num_attr(&self.node, "y1", v);
    }

    #[must_use]
    pub fn x2(&self) -> f64 {
        num_attr(&self.node, "x2")
    }

    pub fn set_x2(&mut self, v: f64) {
        set_num_attr(&self.node, "x2", v);
    }

    #[must_use]
    pub fn y2(&self) -> f64 {
        num_attr(&self.node, "y2")
    }

    pub fn set_y2(&mut self, v: f64) {
        set_num_attr(&self.node, "y2", v);
    }

    /// Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.x2() - self.x1()).hypot(self.y2() - self.y1())
    }

    /// Direction of the segment in degrees, normalized to `[0, 360)`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        Vector::new(self.x2() - self.x1(), self.y2() - self.y1()).angle_deg()
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

impl Element for Line {
    fn node(&self) -> &Node {
        &self.node
    }
}

/// A `<path>` holding raw path data in `d`.
#[derive(Debug, Clone)]
pub struct Path {
    node: Node,
}

impl Path {
    #[must_use]
    pub fn new(d: &str) -> Self {
        let node = Node::new("path");
        node.set_attr("d", d);
        Self { node }
    }

    #[must_use]
    pub fn from_node(node: Node) -> Self {
        Self { node }
    }

    #[must_use]
    pub fn d(&self) -> String {
        self.node.attr("d").unwrap_or_default()
    }

    pub fn set_d(&mut self, d: &str) {
        self.node.set_attr("d", d);
    }

    /// Bounding box of the path data as `(min, max)` corners.
    ///
    /// Every numeric token in `d` is treated as one coordinate of an absolute
    /// (x, y) pair in strict alternation. This is a coordinate extractor, not
    /// a path-command parser: it holds only for the straight-edge paths this
    /// library generates itself, and does not account for relative commands,
    /// curve control points, or arc flags.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedCoordinatePairs`] when the token count is
    /// odd.
    pub fn bounding_box(&self) -> Result<(Vector, Vector), Error> {
        let tokens = numeric_tokens(&self.d());
        if tokens.len() % 2 != 0 {
            return Err(Error::MismatchedCoordinatePairs { count: tokens.len() });
        }
        if tokens.is_empty() {
            return Ok((Vector::ZERO, Vector::ZERO));
        }
        let mut min = Vector::new(f64::INFINITY, f64::INFINITY);
        let mut max = Vector::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for pair in tokens.chunks_exact(2) {
            min.x = min.x.min(pair[0]);
            min.y = min.y.min(pair[1]);
            max.x = max.x.max(pair[0]);
            max.y = max.y.max(pair[1]);
        }
        Ok((min, max))
    }

    /// Width of the bounding box.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedCoordinatePairs`] when the token count is
    /// odd.
    pub fn width(&self) -> Result<f64, Error> {
        let (min, max) = self.bounding_box()?;
        Ok(max.x - min.x)
    }

    /// Height of the bounding box.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedCoordinatePairs`] when the token count is
    /// odd.
    pub fn height(&self) -> Result<f64, Error> {
        let (min, max) = self.bounding_box()?;
        Ok(max.y - min.y)
    }

    /// Center of the bounding box.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedCoordinatePairs`] when the token count is
    /// odd.
    pub fn center(&self) -> Result<Vector, Error> {
        let (min, max) = self.bounding_box()?;
        Ok(Vector::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0))
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::new("")
    }
}

impl Element for Path {
    fn node(&self) -> &Node {
        &self.node
    }
}

/// Runs of number-shaped characters in a path data string, parsed as floats.
/// Runs that fail to parse are dropped.
fn numeric_tokens(d: &str) -> Vec<f64> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for c in d.chars() {
        if c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E') {
            current.push(c);
        } else if !current.is_empty() {
            if let Some(n) = parse_f64(&current) {
                tokens.push(n);
            }
            current.clear();
        }
    }
    if !current.is_empty() {
        if let Some(n) = parse_f64(&current) {
            tokens.push(n);
        }
    }
    tokens
}

// =============================================================================
// POINT LISTS
// =============================================================================

fn format_points(points: &[f64]) -> String {
    points
        .chunks(2)
        .map(|pair| match pair {
            [x, y] => format!("{},{}", fmt_num(*x), fmt_num(*y)),
            [x] => fmt_num(*x),
            _ => String::new(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_points(raw: &str) -> Vec<f64> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .filter_map(parse_f64)
        .collect()
}

/// A `<polygon>` holding an explicit coordinate list.
///
/// The list is shadow state: every mutation regenerates the serialized
/// `points` attribute as `"x,y x,y ..."`.
#[derive(Debug, Clone)]
pub struct Polygon {
    node: Node,
    points: Vec<f64>,
}

impl Polygon {
    #[must_use]
    pub fn new(points: Vec<f64>) -> Self {
        let mut polygon = Self { node: Node::new("polygon"), points: Vec::new() };
        polygon.set_points(points);
        polygon
    }

    #[must_use]
    pub fn from_node(node: Node) -> Self {
        let points = node.attr("points").map(|raw| parse_points(&raw)).unwrap_or_default();
        Self { node, points }
    }

    /// Flat `[x0, y0, x1, y1, ...]` coordinate list.
    #[must_use]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn set_points(&mut self, points: Vec<f64>) {
        self.points = points;
        self.node.set_attr("points", &format_points(&self.points));
    }
}

impl Default for Polygon {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Element for Polygon {
    fn node(&self) -> &Node {
        &self.node
    }

    /// A raw write of `points` re-parses into the shadow list so the two
    /// stay in agreement.
    fn set_value(&mut self, name: &str, value: &AttrValue) {
        let attr_name = normalize_name(name);
        if attr_name == "points" {
            self.set_points(parse_points(&value.to_string()));
        } else {
            self.node.set_attr(&attr_name, &value.to_string());
        }
    }
}

/// A `<polyline>` holding an explicit coordinate list; same shadow-state
/// contract as [`Polygon`].
#[derive(Debug, Clone)]
pub struct Polyline {
    node: Node,
    points: Vec<f64>,
}

impl Polyline {
    #[must_use]
    pub fn new(points: Vec<f64>) -> Self {
        let mut polyline = Self { node: Node::new("polyline"), points: Vec::new() };
        polyline.set_points(points);
        polyline
    }

    #[must_use]
    pub fn from_node(node: Node) -> Self {
        let points = node.attr("points").map(|raw| parse_points(&raw)).unwrap_or_default();
        Self { node, points }
    }

    /// Flat `[x0, y0, x1, y1, ...]` coordinate list.
    #[must_use]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn set_points(&mut self, points: Vec<f64>) {
        self.points = points;
        self.node.set_attr("points", &format_points(&self.points));
    }
}

impl Default for Polyline {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Element for Polyline {
    fn node(&self) -> &Node {
        &self.node
    }

    fn set_value(&mut self, name: &str, value: &AttrValue) {
        let attr_name = normalize_name(name);
        if attr_name == "points" {
            self.set_points(parse_points(&value.to_string()));
        } else {
            self.node.set_attr(&attr_name, &value.to_string());
        }
    }
}

// =============================================================================
// TEXT
// =============================================================================

/// A `<text>` element managing multi-line content.
///
/// The raw content string is shadow state, decoupled from the tree so that
/// round-tripping preserves the exact input. Assigning content rebuilds the
/// children: single-line content becomes node text, multi-line content
/// becomes one `tspan` per line. The first line carries the parent's x/y,
/// each following line carries x plus a `dy` equal to the parent's
/// `font-size` (16 when absent or unparsable). Set position and font size
/// before assigning multi-line content.
#[derive(Debug, Clone)]
pub struct Text {
    node: Node,
    raw: String,
}

impl Text {
    #[must_use]
    pub fn new(content: &str) -> Self {
        let mut text = Self { node: Node::new("text"), raw: String::new() };
        if !content.is_empty() {
            text.set_content(content);
        }
        text
    }

    /// Wrap an existing node, recovering raw content from its `tspan`
    /// children (joined with newlines) or its direct text.
    #[must_use]
    pub fn from_node(node: Node) -> Self {
        let lines: Vec<String> = node
            .children()
            .iter()
            .filter(|child| child.tag() == "tspan")
            .map(|child| child.text().unwrap_or_default())
            .collect();
        let raw = if lines.is_empty() {
            node.text().unwrap_or_default()
        } else {
            lines.join("\n")
        };
        Self { node, raw }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.raw
    }

    pub fn set_content(&mut self, content: &str) {
        self.raw = content.to_string();
        self.node.clear_children();
        if content.contains('\n') {
            self.node.set_text(None);
            let line_offset = self
                .node
                .attr("font-size")
                .and_then(|raw| parse_f64(&raw))
                .unwrap_or(DEFAULT_FONT_SIZE);
            for (i, line) in content.split('\n').enumerate() {
                let tspan = Node::new("tspan");
                if let Some(x) = self.node.attr("x") {
                    tspan.set_attr("x", &x);
                }
                if i == 0 {
                    if let Some(y) = self.node.attr("y") {
                        tspan.set_attr("y", &y);
                    }
                } else {
                    tspan.set_attr("dy", &fmt_num(line_offset));
                }
                tspan.set_text(Some(line));
                self.node.append_child(&tspan);
            }
        } else {
            self.node.set_text(Some(content));
        }
    }

    #[must_use]
    pub fn pos(&self) -> Vector {
        Vector::new(num_attr(&self.node, "x"), num_attr(&self.node, "y"))
    }

    pub fn set_pos(&mut self, pos: Vector) {
        set_num_attr(&self.node, "x", pos.x);
        set_num_attr(&self.node, "y", pos.y);
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new("")
    }
}

impl Element for Text {
    fn node(&self) -> &Node {
        &self.node
    }
}

/// A `<text>` element whose content flows along a referenced path through a
/// nested `textPath` child.
#[derive(Debug, Clone)]
pub struct TextOnPath {
    node: Node,
    text_path: Node,
}

impl TextOnPath {
    /// Create with content and a path reference; a bare id gets a `#`
    /// prefix.
    #[must_use]
    pub fn new(content: &str, path_ref: &str) -> Self {
        let node = Node::new("text");
        let text_path = Node::new("textPath");
        if !path_ref.is_empty() {
            text_path.set_attr("href", &href_for(path_ref));
        }
        node.append_child(&text_path);
        let mut text = Self { node, text_path };
        text.set_content(content);
        text
    }

    /// Wrap an existing node, locating (or creating) the nested `textPath`.
    #[must_use]
    pub fn from_node(node: Node) -> Self {
        let text_path = node
            .children()
            .into_iter()
            .find(|child| child.tag() == "textPath")
            .unwrap_or_else(|| {
                let tp = Node::new("textPath");
                node.append_child(&tp);
                tp
            });
        Self { node, text_path }
    }

    #[must_use]
    pub fn content(&self) -> String {
        self.text_path.text().unwrap_or_default()
    }

    pub fn set_content(&mut self, content: &str) {
        self.text_path.set_text(Some(content));
    }

    /// The `href` reference on the nested `textPath`.
    #[must_use]
    pub fn path_ref(&self) -> Option<String> {
        self.text_path.attr("href")
    }

    /// Point the nested `textPath` at another path id; a bare id gets a `#`
    /// prefix.
    pub fn set_path_ref(&mut self, path_ref: &str) {
        self.text_path.set_attr("href", &href_for(path_ref));
    }
}

impl Element for TextOnPath {
    fn node(&self) -> &Node {
        &self.node
    }
}

fn href_for(path_ref: &str) -> String {
    if path_ref.starts_with('#') {
        path_ref.to_string()
    } else {
        format!("#{path_ref}")
    }
}

// =============================================================================
// ANIMATION
// =============================================================================

/// Repeat behavior of an [`Animate`] directive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RepeatCount {
    /// Loop forever.
    Indefinite,
    /// Loop a fixed number of times.
    Count(f64),
}

impl fmt::Display for RepeatCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indefinite => f.write_str("indefinite"),
            Self::Count(n) => f.write_str(&fmt_num(*n)),
        }
    }
}

/// An `<animate>` directive with typed repeat count and keyframe values.
#[derive(Debug, Clone)]
pub struct Animate {
    node: Node,
    repeat_count: RepeatCount,
    values: Vec<f64>,
}

impl Animate {
    #[must_use]
    pub fn new() -> Self {
        let node = Node::new("animate");
        node.set_attr("attributeType", "XML");
        node.set_attr("repeatCount", "indefinite");
        Self {
            node,
            repeat_count: RepeatCount::Indefinite,
            values: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_node(node: Node) -> Self {
        let repeat_count = match node.attr("repeatCount") {
            Some(raw) => match parse_f64(&raw) {
                Some(n) => RepeatCount::Count(n),
                None => RepeatCount::Indefinite,
            },
            None => RepeatCount::Indefinite,
        };
        let values = node
            .attr("values")
            .map(|raw| raw.split(';').filter_map(parse_f64).collect())
            .unwrap_or_default();
        Self { node, repeat_count, values }
    }

    #[must_use]
    pub fn repeat_count(&self) -> RepeatCount {
        self.repeat_count
    }

    pub fn set_repeat_count(&mut self, repeat_count: RepeatCount) {
        self.repeat_count = repeat_count;
        self.node.set_attr("repeatCount", &repeat_count.to_string());
    }

    /// Keyframe values serialized `;`-joined into the `values` attribute.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn set_values(&mut self, values: Vec<f64>) {
        self.values = values;
        let joined = self
            .values
            .iter()
            .map(|v| fmt_num(*v))
            .collect::<Vec<_>>()
            .join(";");
        self.node.set_attr("values", &joined);
    }
}

impl Default for Animate {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for Animate {
    fn node(&self) -> &Node {
        &self.node
    }
}
