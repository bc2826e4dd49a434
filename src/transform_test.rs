#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn vec_approx_eq(a: Vector, b: Vector) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Identity elision ---

#[test]
fn identity_composes_to_nothing() {
    assert_eq!(Transform::default().compose(), None);
}

#[test]
fn pivot_alone_is_still_identity() {
    let t = Transform { pivot: Vector::new(5.0, 5.0), ..Transform::default() };
    assert!(t.is_identity());
    assert_eq!(t.compose(), None);
}

// --- Composition ---

#[test]
fn default_order_is_translate_rotate_scale() {
    let t = Transform {
        pos: Vector::new(10.0, 20.0),
        angle: 45.0,
        scale: Vector::new(2.0, 2.0),
        ..Transform::default()
    };
    assert_eq!(
        t.compose().unwrap(),
        "translate(10 20) rotate(45) scale(2 2)"
    );
}

#[test]
fn default_components_are_elided_individually() {
    let t = Transform { angle: 90.0, ..Transform::default() };
    assert_eq!(t.compose().unwrap(), "rotate(90)");

    let t = Transform { pos: Vector::new(1.0, 2.0), ..Transform::default() };
    assert_eq!(t.compose().unwrap(), "translate(1 2)");

    let t = Transform { scale: Vector::new(3.0, 1.0), ..Transform::default() };
    assert_eq!(t.compose().unwrap(), "scale(3 1)");
}

#[test]
fn rotation_with_pivot_emits_three_arguments() {
    let t = Transform {
        angle: 30.0,
        pivot: Vector::new(50.0, 60.0),
        ..Transform::default()
    };
    assert_eq!(t.compose().unwrap(), "rotate(30,50,60)");
}

#[test]
fn custom_order_changes_emission_order() {
    let t = Transform {
        pos: Vector::new(10.0, 20.0),
        angle: 45.0,
        scale: Vector::new(2.0, 2.0),
        order: [TransformOp::Rotate, TransformOp::Translate, TransformOp::Scale],
        ..Transform::default()
    };
    assert_eq!(
        t.compose().unwrap(),
        "rotate(45) translate(10 20) scale(2 2)"
    );
}

// --- Parsing ---

#[test]
fn parse_recovers_all_components() {
    let t = Transform::parse("translate(10 20) rotate(45) scale(2 2)");
    assert!(vec_approx_eq(t.pos, Vector::new(10.0, 20.0)));
    assert!(approx_eq(t.angle, 45.0));
    assert!(vec_approx_eq(t.scale, Vector::new(2.0, 2.0)));
    assert!(vec_approx_eq(t.pivot, Vector::ZERO));
}

#[test]
fn parse_is_order_insensitive() {
    let t = Transform::parse("scale(2 3) rotate(90) translate(-5 8)");
    assert!(vec_approx_eq(t.pos, Vector::new(-5.0, 8.0)));
    assert!(approx_eq(t.angle, 90.0));
    assert!(vec_approx_eq(t.scale, Vector::new(2.0, 3.0)));
}

#[test]
fn parse_rotate_with_pivot() {
    let t = Transform::parse("rotate(45,10,20)");
    assert!(approx_eq(t.angle, 45.0));
    assert!(vec_approx_eq(t.pivot, Vector::new(10.0, 20.0)));
}

#[test]
fn parse_uniform_scale() {
    let t = Transform::parse("scale(3)");
    assert!(vec_approx_eq(t.scale, Vector::new(3.0, 3.0)));
}

#[test]
fn parse_accepts_comma_separators() {
    let t = Transform::parse("translate(10,20)");
    assert!(vec_approx_eq(t.pos, Vector::new(10.0, 20.0)));
}

#[test]
fn malformed_fragment_keeps_component_default() {
    let t = Transform::parse("rotate(abc) translate(10 20)");
    assert!(approx_eq(t.angle, 0.0));
    assert!(vec_approx_eq(t.pos, Vector::new(10.0, 20.0)));
}

#[test]
fn single_number_translate_is_ignored() {
    let t = Transform::parse("translate(10)");
    assert!(vec_approx_eq(t.pos, Vector::ZERO));
}

#[test]
fn two_number_rotate_is_ignored() {
    let t = Transform::parse("rotate(45,10)");
    assert!(approx_eq(t.angle, 0.0));
    assert!(vec_approx_eq(t.pivot, Vector::ZERO));
}

#[test]
fn unknown_functions_are_not_recognized() {
    let t = Transform::parse("matrix(1 0 0 1 10 20)");
    assert!(t.is_identity());
}

#[test]
fn parse_empty_string_is_identity() {
    assert!(Transform::parse("").is_identity());
}

// --- Round trips ---

#[test]
fn compose_parse_round_trip() {
    let t = Transform {
        pos: Vector::new(10.0, 20.0),
        angle: 45.0,
        scale: Vector::new(2.0, 2.0),
        ..Transform::default()
    };
    let composed = t.compose().unwrap();
    let back = Transform::parse(&composed);
    assert!(vec_approx_eq(back.pos, t.pos));
    assert!(approx_eq(back.angle, t.angle));
    assert!(vec_approx_eq(back.scale, t.scale));
}

#[test]
fn round_trip_with_pivot_and_fractions() {
    let t = Transform {
        pos: Vector::new(-1.5, 0.25),
        angle: 12.5,
        pivot: Vector::new(100.0, 200.0),
        scale: Vector::new(0.5, 2.0),
        ..Transform::default()
    };
    let back = Transform::parse(&t.compose().unwrap());
    assert!(vec_approx_eq(back.pos, t.pos));
    assert!(approx_eq(back.angle, t.angle));
    assert!(vec_approx_eq(back.pivot, t.pivot));
    assert!(vec_approx_eq(back.scale, t.scale));
}

// --- Order attribute form ---

#[test]
fn order_letters_round_trip() {
    assert_eq!(order_letters(DEFAULT_ORDER), "trs");
    let order = parse_order("rts").unwrap();
    assert_eq!(order, [TransformOp::Rotate, TransformOp::Translate, TransformOp::Scale]);
    assert_eq!(order_letters(order), "rts");
}

#[test]
fn order_rejects_duplicates_and_junk() {
    assert!(parse_order("ttt").is_none());
    assert!(parse_order("tr").is_none());
    assert!(parse_order("xyz").is_none());
    assert!(parse_order("trsx").is_none());
}
