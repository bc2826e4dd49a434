//! Generic markup node tree.
//!
//! This is the storage layer under every typed wrapper: a [`Node`] is a
//! shared handle to one tree element carrying a tag, an ordered attribute
//! list, ordered children, and optional text content. Child lists hold the
//! only strong edges; each node keeps a weak back-reference to its parent so
//! upward walks (group cleanup) never create ownership cycles.
//!
//! Markup reading and writing go through `quick-xml`. Serialization preserves
//! attribute insertion order exactly; parsing strips namespace prefixes down
//! to local tag names and ignores whitespace-only text.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::str;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::Error;

struct NodeData {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
    text: Option<String>,
    parent: Weak<RefCell<NodeData>>,
}

/// Shared handle to one tree element.
///
/// Cloning a `Node` clones the handle, not the element; equality compares
/// identity, not content.
#[derive(Clone)]
pub struct Node(Rc<RefCell<NodeData>>);

impl Node {
    /// Create a detached element with the given local tag name.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(NodeData {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
            text: None,
            parent: Weak::new(),
        })))
    }

    /// Local tag name.
    #[must_use]
    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    /// Set an attribute, updating in place when the name already exists so
    /// insertion order is stable across re-sets.
    pub fn set_attr(&self, name: &str, value: &str) {
        let mut data = self.0.borrow_mut();
        for (k, v) in &mut data.attrs {
            if k == name {
                *v = value.to_string();
                return;
            }
        }
        data.attrs.push((name.to_string(), value.to_string()));
    }

    /// Attribute value, if present.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<String> {
        self.0
            .borrow()
            .attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    /// Whether the attribute is present.
    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.0.borrow().attrs.iter().any(|(k, _)| k == name)
    }

    /// Remove an attribute. Removing an absent attribute is a no-op.
    pub fn remove_attr(&self, name: &str) {
        self.0.borrow_mut().attrs.retain(|(k, _)| k != name);
    }

    /// Snapshot of the attribute list in insertion order.
    #[must_use]
    pub fn attrs(&self) -> Vec<(String, String)> {
        self.0.borrow().attrs.clone()
    }

    /// Direct text content, if any.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        self.0.borrow().text.clone()
    }

    /// Replace the direct text content.
    pub fn set_text(&self, text: Option<&str>) {
        self.0.borrow_mut().text = text.map(str::to_string);
    }

    fn push_text(&self, text: &str) {
        let mut data = self.0.borrow_mut();
        match data.text.as_mut() {
            Some(existing) => existing.push_str(text),
            None => data.text = Some(text.to_string()),
        }
    }

    /// Append `child` to this node's child list and record the parent
    /// back-reference on the child.
    pub fn append_child(&self, child: &Node) {
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
    }

    /// Detach `child` (matched by identity) from this node, clearing its
    /// parent back-reference. Returns whether a child was removed.
    pub fn remove_child(&self, child: &Node) -> bool {
        let pos = self
            .0
            .borrow()
            .children
            .iter()
            .position(|c| Rc::ptr_eq(&c.0, &child.0));
        match pos {
            Some(i) => {
                self.0.borrow_mut().children.remove(i);
                child.0.borrow_mut().parent = Weak::new();
                true
            }
            None => false,
        }
    }

    /// Detach every child.
    pub fn clear_children(&self) {
        let children = std::mem::take(&mut self.0.borrow_mut().children);
        for child in &children {
            child.0.borrow_mut().parent = Weak::new();
        }
    }

    /// Snapshot of the child handles in document order.
    #[must_use]
    pub fn children(&self) -> Vec<Node> {
        self.0.borrow().children.clone()
    }

    /// Number of direct children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    /// The parent node, while it is still alive and this node is attached.
    #[must_use]
    pub fn parent(&self) -> Option<Node> {
        self.0.borrow().parent.upgrade().map(Node)
    }

    /// Serialize the subtree rooted at this node to markup.
    ///
    /// Attribute insertion order is preserved; childless, textless elements
    /// are written self-closing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Xml`] / [`Error::Io`] when the writer fails.
    pub fn to_xml(&self) -> Result<String, Error> {
        let mut writer = Writer::new(Vec::new());
        self.write_into(&mut writer)?;
        Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
    }

    fn write_into<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<(), Error> {
        let tag = self.tag();
        let attrs = self.attrs();
        let text = self.text();
        let children = self.children();

        let mut start = BytesStart::new(tag.as_str());
        for (k, v) in &attrs {
            start.push_attribute((k.as_str(), v.as_str()));
        }

        if children.is_empty() && text.is_none() {
            writer.write_event(Event::Empty(start))?;
        } else {
            writer.write_event(Event::Start(start))?;
            if let Some(text) = text {
                writer.write_event(Event::Text(BytesText::new(&text)))?;
            }
            for child in &children {
                child.write_into(writer)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag.as_str())))?;
        }
        Ok(())
    }

    /// Rebuild a tree from markup, returning the root element.
    ///
    /// Namespace prefixes are stripped to local names, attribute order is
    /// preserved as encountered, and whitespace-only text is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Xml`] for malformed markup and
    /// [`Error::NoRootElement`] when the input holds no element at all.
    pub fn parse(xml: &str) -> Result<Node, Error> {
        let mut reader = Reader::from_reader(xml.as_bytes());
        let mut buf = Vec::new();
        let mut stack: Vec<Node> = Vec::new();
        let mut root: Option<Node> = None;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let node = node_from_start(&e)?;
                    attach(&stack, &mut root, &node);
                    stack.push(node);
                }
                Event::Empty(e) => {
                    let node = node_from_start(&e)?;
                    attach(&stack, &mut root, &node);
                }
                Event::Text(t) => {
                    let decoded = t.decode().map_err(quick_xml::Error::from)?;
                    let txt = quick_xml::escape::unescape(&decoded)
                        .map_err(quick_xml::Error::from)?;
                    if !txt.trim().is_empty() {
                        if let Some(top) = stack.last() {
                            top.push_text(&txt);
                        }
                    }
                }
                Event::CData(c) => {
                    let txt = String::from_utf8_lossy(&c).into_owned();
                    if !txt.trim().is_empty() {
                        if let Some(top) = stack.last() {
                            top.push_text(&txt);
                        }
                    }
                }
                Event::End(_) => {
                    stack.pop();
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        root.ok_or(Error::NoRootElement)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let data = self.0.borrow();
        f.debug_struct("Node")
            .field("tag", &data.tag)
            .field("attrs", &data.attrs)
            .field("children", &data.children.len())
            .field("text", &data.text)
            .finish()
    }
}

fn node_from_start(e: &BytesStart<'_>) -> Result<Node, Error> {
    let name = e.name();
    let raw = str::from_utf8(name.as_ref())?;
    let local = raw.rsplit(':').next().unwrap_or(raw);
    let node = Node::new(local);
    for a in e.attributes() {
        let a = a?;
        let key = str::from_utf8(a.key.as_ref())?;
        let val = a.unescape_value()?;
        node.set_attr(key, &val);
    }
    Ok(node)
}

fn attach(stack: &[Node], root: &mut Option<Node>, node: &Node) {
    if let Some(parent) = stack.last() {
        parent.append_child(node);
    } else if root.is_none() {
        *root = Some(node.clone());
    }
}
