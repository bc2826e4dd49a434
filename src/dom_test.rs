use super::*;

// --- Attributes ---

#[test]
fn set_attr_preserves_insertion_order() {
    let node = Node::new("rect");
    node.set_attr("x", "10");
    node.set_attr("y", "20");
    node.set_attr("fill", "red");
    let names: Vec<String> = node.attrs().into_iter().map(|(k, _)| k).collect();
    assert_eq!(names, vec!["x", "y", "fill"]);
}

#[test]
fn set_attr_updates_in_place() {
    let node = Node::new("rect");
    node.set_attr("x", "10");
    node.set_attr("y", "20");
    node.set_attr("x", "99");
    let attrs = node.attrs();
    assert_eq!(attrs[0], ("x".to_string(), "99".to_string()));
    assert_eq!(attrs.len(), 2);
}

#[test]
fn remove_attr_is_noop_when_absent() {
    let node = Node::new("rect");
    node.set_attr("x", "10");
    node.remove_attr("x");
    node.remove_attr("x");
    assert!(!node.has_attr("x"));
}

// --- Tree structure ---

#[test]
fn append_records_parent_back_reference() {
    let parent = Node::new("g");
    let child = Node::new("rect");
    parent.append_child(&child);
    assert_eq!(parent.child_count(), 1);
    assert_eq!(child.parent(), Some(parent));
}

#[test]
fn remove_child_clears_parent() {
    let parent = Node::new("g");
    let child = Node::new("rect");
    parent.append_child(&child);
    assert!(parent.remove_child(&child));
    assert_eq!(parent.child_count(), 0);
    assert!(child.parent().is_none());
}

#[test]
fn remove_child_by_identity_not_content() {
    let parent = Node::new("g");
    let a = Node::new("rect");
    let b = Node::new("rect");
    parent.append_child(&a);
    assert!(!parent.remove_child(&b));
    assert_eq!(parent.child_count(), 1);
}

#[test]
fn clear_children_detaches_all() {
    let parent = Node::new("g");
    let a = Node::new("rect");
    let b = Node::new("circle");
    parent.append_child(&a);
    parent.append_child(&b);
    parent.clear_children();
    assert_eq!(parent.child_count(), 0);
    assert!(a.parent().is_none());
    assert!(b.parent().is_none());
}

#[test]
fn parent_is_not_an_owning_edge() {
    let child = Node::new("rect");
    {
        let parent = Node::new("g");
        parent.append_child(&child);
    }
    // Parent dropped; only the weak edge pointed back at it.
    assert!(child.parent().is_none());
}

#[test]
fn node_equality_is_identity() {
    let a = Node::new("rect");
    let b = Node::new("rect");
    let a2 = a.clone();
    assert_eq!(a, a2);
    assert_ne!(a, b);
}

// --- Serialization ---

#[test]
fn childless_node_serializes_self_closing() {
    let node = Node::new("rect");
    node.set_attr("x", "10");
    let xml = node.to_xml().unwrap();
    assert!(xml.starts_with("<rect"));
    assert!(xml.ends_with("/>"));
    assert!(xml.contains("x=\"10\""));
}

#[test]
fn children_and_text_serialize_in_order() {
    let root = Node::new("g");
    let first = Node::new("rect");
    let second = Node::new("circle");
    root.append_child(&first);
    root.append_child(&second);
    let xml = root.to_xml().unwrap();
    let rect_at = xml.find("<rect").unwrap();
    let circle_at = xml.find("<circle").unwrap();
    assert!(rect_at < circle_at);
    assert!(xml.ends_with("</g>"));
}

#[test]
fn text_content_is_escaped() {
    let node = Node::new("text");
    node.set_text(Some("a < b & c"));
    let xml = node.to_xml().unwrap();
    assert!(xml.contains("a &lt; b &amp; c"));
}

#[test]
fn attribute_order_survives_serialization() {
    let node = Node::new("svg");
    node.set_attr("viewBox", "0 0 10 10");
    node.set_attr("width", "10px");
    let xml = node.to_xml().unwrap();
    assert!(xml.find("viewBox").unwrap() < xml.find("width").unwrap());
}

// --- Parsing ---

#[test]
fn parse_round_trips_tree_shape() {
    let xml = r#"<svg viewBox="0 0 10 10"><g><rect x="1" y="2"/></g></svg>"#;
    let root = Node::parse(xml).unwrap();
    assert_eq!(root.tag(), "svg");
    assert_eq!(root.attr("viewBox").as_deref(), Some("0 0 10 10"));
    let g = &root.children()[0];
    assert_eq!(g.tag(), "g");
    let rect = &g.children()[0];
    assert_eq!(rect.tag(), "rect");
    assert_eq!(rect.attr("x").as_deref(), Some("1"));
    assert_eq!(rect.parent(), Some(g.clone()));
}

#[test]
fn parse_captures_text_content() {
    let root = Node::parse("<text>Hello</text>").unwrap();
    assert_eq!(root.text().as_deref(), Some("Hello"));
}

#[test]
fn parse_ignores_whitespace_only_text() {
    let root = Node::parse("<g>\n  <rect/>\n</g>").unwrap();
    assert!(root.text().is_none());
    assert_eq!(root.child_count(), 1);
}

#[test]
fn parse_strips_namespace_prefixes() {
    let root = Node::parse(r#"<svg:g xmlns:svg="http://www.w3.org/2000/svg"/>"#).unwrap();
    assert_eq!(root.tag(), "g");
}

#[test]
fn parse_empty_input_has_no_root() {
    assert!(matches!(Node::parse("   "), Err(Error::NoRootElement)));
}

#[test]
fn parse_then_serialize_preserves_attribute_order() {
    let xml = r#"<rect x="1" y="2" width="3" height="4"/>"#;
    let root = Node::parse(xml).unwrap();
    assert_eq!(root.to_xml().unwrap(), xml);
}
