#![allow(clippy::float_cmp)]

use super::*;

use crate::elements::Rect;
use crate::vector::Vector;

// --- Viewbox arities ---

#[test]
fn two_number_viewbox_expands_from_origin() {
    let svg = Svg::new(&[600.0, 600.0]).unwrap();
    assert_eq!(svg.node().attr("viewBox").as_deref(), Some("0 0 600 600"));
    assert_eq!(svg.node().attr("width").as_deref(), Some("600px"));
    assert_eq!(svg.node().attr("height").as_deref(), Some("600px"));
}

#[test]
fn four_number_viewbox_is_stored_verbatim() {
    let svg = Svg::new(&[10.0, 20.0, 600.0, 600.0]).unwrap();
    assert_eq!(svg.node().attr("viewBox").as_deref(), Some("10 20 600 600"));
}

#[test]
fn other_arities_are_rejected() {
    assert!(matches!(Svg::new(&[600.0]), Err(Error::InvalidViewbox(1))));
    assert!(matches!(
        Svg::new(&[10.0, 20.0, 600.0]),
        Err(Error::InvalidViewbox(3))
    ));
    assert!(matches!(Svg::new(&[]), Err(Error::InvalidViewbox(0))));
}

#[test]
fn namespace_is_bound_as_default() {
    let svg = Svg::new(&[100.0, 100.0]).unwrap();
    assert_eq!(
        svg.node().attr("xmlns").as_deref(),
        Some("http://www.w3.org/2000/svg")
    );
    let xml = svg.to_xml_string().unwrap();
    assert!(xml.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
}

// --- Derived dimensions ---

#[test]
fn dimensions_derive_from_the_viewbox() {
    let svg = Svg::new(&[300.0, 200.0]).unwrap();
    assert_eq!(svg.width(), 300.0);
    assert_eq!(svg.height(), 200.0);
}

#[test]
fn offset_viewbox_dimensions_subtract_the_minimum() {
    let svg = Svg::new(&[10.0, 20.0, 600.0, 600.0]).unwrap();
    assert_eq!(svg.width(), 590.0);
    assert_eq!(svg.height(), 580.0);
}

#[test]
fn malformed_viewbox_reads_as_zero() {
    let svg = Svg::new(&[100.0, 100.0]).unwrap();
    svg.node().set_attr("viewBox", "junk");
    assert_eq!(svg.width(), 0.0);
    assert_eq!(svg.height(), 0.0);
}

// --- Tree operations ---

#[test]
fn append_and_find_typed_children() {
    let svg = Svg::new(&[300.0, 300.0]).unwrap();
    let mut r1 = Rect::new();
    r1.set_pos(Vector::new(0.0, 0.0));
    r1.set_width(10.0);
    let mut r2 = Rect::new();
    r2.set_pos(Vector::new(50.0, 0.0));
    svg.append(&r1).append(&r2);

    let first = svg.find("rect", false).unwrap().into_rect().unwrap();
    assert_eq!(first.pos().x, 0.0);
    assert_eq!(first.width(), 10.0);

    let all: Vec<_> = svg.find_all("rect", false).collect();
    assert_eq!(all.len(), 2);
}

#[test]
fn append_then_remove_leaves_document_empty() {
    let svg = Svg::new(&[300.0, 300.0]).unwrap();
    let rect = Rect::new();
    svg.append(&rect);
    assert_eq!(svg.node().child_count(), 1);
    svg.remove(&rect);
    assert_eq!(svg.node().child_count(), 0);
}

// --- Serialization round trips ---

#[test]
fn full_document_serializes_expected_elements() {
    let svg = Svg::new(&[300.0, 300.0]).unwrap();
    let mut text = crate::elements::Text::new("");
    text.set("x", 10);
    text.set("y", 10);
    text.set("font_size", 18);
    text.set_content("Hello,\nWorld!");
    let mut rect = Rect::new();
    rect.set_pos(Vector::new(20.0, 80.0));
    rect.set_width(60.0);
    rect.set_height(60.0);
    rect.set("fill", "pink");
    svg.append(&text).append(&rect);

    let xml = svg.to_xml_string().unwrap();
    assert!(xml.contains("<svg"));
    assert!(xml.contains("<text"));
    assert!(xml.contains("<rect"));
    assert!(xml.contains("<tspan"));
}

#[test]
fn parse_reconstructs_a_document() {
    let original = Svg::new(&[300.0, 300.0]).unwrap();
    let g = crate::elements::G::new();
    let mut circle = crate::elements::Circle::new();
    circle.set_radius(5.0);
    original.append(&g);
    g.append(&circle);

    let xml = original.to_xml_string().unwrap();
    let restored = Svg::parse(&xml).unwrap();
    assert_eq!(restored.width(), 300.0);
    let found = restored.find("circle", true).unwrap().into_circle().unwrap();
    assert_eq!(found.radius(), 5.0);
}

#[test]
fn parse_restores_group_shadow_state() {
    let xml = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"><g transform="translate(1 2) rotate(30)"/></svg>"#;
    let svg = Svg::parse(xml).unwrap();
    let g = svg.find("g", false).unwrap().into_group().unwrap();
    assert_eq!(g.pos(), Vector::new(1.0, 2.0));
    assert_eq!(g.angle(), 30.0);
}

// --- Persistence ---

#[test]
fn save_and_load_round_trip() {
    let path = std::env::temp_dir().join(format!("svgkit-doc-{}.svg", std::process::id()));
    let svg = Svg::new(&[120.0, 80.0]).unwrap();
    let mut rect = Rect::new();
    rect.set_width(12.0);
    svg.append(&rect);

    svg.save(&path).unwrap();
    let restored = Svg::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(restored.width(), 120.0);
    let found = restored.find("rect", false).unwrap().into_rect().unwrap();
    assert_eq!(found.width(), 12.0);
}

#[test]
fn save_overwrites_existing_files() {
    let path = std::env::temp_dir().join(format!("svgkit-overwrite-{}.svg", std::process::id()));
    std::fs::write(&path, "stale").unwrap();
    let svg = Svg::new(&[10.0, 10.0]).unwrap();
    svg.save(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(content.starts_with("<svg"));
}

#[test]
fn load_missing_file_is_an_io_error() {
    let result = Svg::load("/nonexistent/svgkit-missing.svg");
    assert!(matches!(result, Err(Error::Io(_))));
}
