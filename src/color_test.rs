use super::*;

// --- Hex parsing ---

#[test]
fn six_digit_hex_parses() {
    assert_eq!(Rgb::from_hex("#ff0000"), Rgb::new(255, 0, 0));
    assert_eq!(Rgb::from_hex("#00ff7f"), Rgb::new(0, 255, 127));
}

#[test]
fn shorthand_hex_expands() {
    assert_eq!(Rgb::from_hex("#f00"), Rgb::new(255, 0, 0));
    assert_eq!(Rgb::from_hex("#abc"), Rgb::new(0xaa, 0xbb, 0xcc));
}

#[test]
fn invalid_hex_falls_back_to_black() {
    assert_eq!(Rgb::from_hex("notacolor"), Rgb::BLACK);
    assert_eq!(Rgb::from_hex("#12345"), Rgb::BLACK);
    assert_eq!(Rgb::from_hex("#gggggg"), Rgb::BLACK);
    assert_eq!(Rgb::from_hex(""), Rgb::BLACK);
}

#[test]
fn extra_hash_prefixes_are_tolerated() {
    assert_eq!(Rgb::from_hex("##ff0000"), Rgb::new(255, 0, 0));
}

#[test]
fn hex_round_trip() {
    assert_eq!(Rgb::new(255, 255, 255).to_hex(), "#ffffff");
    assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
    assert_eq!(Rgb::new(16, 8, 255).to_hex(), "#1008ff");
    assert_eq!(Rgb::from_hex("#1008ff").to_hex(), "#1008ff");
}

#[test]
fn display_is_the_hex_form() {
    assert_eq!(Rgb::new(255, 0, 0).to_string(), "#ff0000");
}

// --- rgba strings ---

#[test]
fn rgba_formats_css_style() {
    assert_eq!(Rgb::new(255, 0, 0).rgba(0.5), "rgba(255, 0, 0, 0.5)");
    assert_eq!(Rgb::gray(128).rgba(0.75), "rgba(128, 128, 128, 0.75)");
    assert_eq!(Rgb::from_hex("#00ff00").rgba(0.3), "rgba(0, 255, 0, 0.3)");
}

#[test]
fn rgba_clamps_alpha() {
    assert_eq!(Rgb::BLACK.rgba(2.0), "rgba(0, 0, 0, 1)");
    assert_eq!(Rgb::BLACK.rgba(-1.0), "rgba(0, 0, 0, 0)");
}

// --- blend ---

#[test]
fn blend_endpoints_return_the_inputs() {
    assert_eq!(blend("#123456", "#abcdef", 0.0), "#123456");
    assert_eq!(blend("#123456", "#abcdef", 1.0), "#abcdef");
}

#[test]
fn blend_halfway_between_black_and_white() {
    let mid = blend("#000000", "#ffffff", 0.5);
    assert!(mid == "#7f7f7f" || mid == "#808080");
}

#[test]
fn blend_accepts_bare_hex_strings() {
    assert_eq!(blend("123456", "abcdef", 0.0), "#123456");
}

#[test]
fn blend_clamps_proportion() {
    assert_eq!(blend("#123456", "#abcdef", -1.0), "#123456");
    assert_eq!(blend("#123456", "#abcdef", 2.0), "#abcdef");
}

#[test]
fn blend_invalid_input_is_black() {
    assert_eq!(blend("invalid", "#abcdef", 0.5), "#000000");
    assert_eq!(blend("#abcdef", "bogus!", 0.5), "#000000");
}

#[test]
fn blend_expands_shorthand() {
    assert_eq!(blend("#f00", "#f00", 0.5), "#ff0000");
}

// --- palette ---

#[test]
fn palette_includes_both_endpoints() {
    let ramp = palette("#000000", "#ffffff", 3);
    assert_eq!(ramp.len(), 3);
    assert_eq!(ramp[0], "#000000");
    assert_eq!(ramp[2], "#ffffff");
}

#[test]
fn palette_edge_sizes() {
    assert!(palette("#000000", "#ffffff", 0).is_empty());
    assert_eq!(palette("#123456", "#ffffff", 1), vec!["#123456"]);
}

// --- HSL ---

#[test]
fn hsl_round_trip_for_primaries() {
    let (h, s, l) = Rgb::new(255, 0, 0).to_hsl();
    assert!((h - 0.0).abs() < 1e-9);
    assert!((s - 1.0).abs() < 1e-9);
    assert!((l - 0.5).abs() < 1e-9);
    assert_eq!(Rgb::from_hsl(h, s, l), Rgb::new(255, 0, 0));

    let (h, _, _) = Rgb::new(0, 255, 0).to_hsl();
    assert!((h - 120.0).abs() < 1e-9);

    let (h, _, _) = Rgb::new(0, 0, 255).to_hsl();
    assert!((h - 240.0).abs() < 1e-9);
}

#[test]
fn hsl_of_grey_has_no_saturation() {
    let (h, s, l) = Rgb::gray(128).to_hsl();
    assert_eq!(h, 0.0);
    assert_eq!(s, 0.0);
    assert!((l - 128.0 / 255.0).abs() < 1e-9);
}

#[test]
fn from_hsl_wraps_hue() {
    assert_eq!(Rgb::from_hsl(360.0, 1.0, 0.5), Rgb::from_hsl(0.0, 1.0, 0.5));
    assert_eq!(Rgb::from_hsl(-120.0, 1.0, 0.5), Rgb::from_hsl(240.0, 1.0, 0.5));
}

// --- generate_colors ---

fn assert_all_hex(colors: &[String]) {
    for color in colors {
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
        assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[test]
fn generate_colors_complementary() {
    let colors = generate_colors("#db45f9", 10, Harmony::Complementary);
    assert_eq!(colors.len(), 10);
    assert_all_hex(&colors);
}

#[test]
fn generate_colors_compound() {
    let colors = generate_colors("#db45f9", 10, Harmony::Compound);
    assert_eq!(colors.len(), 10);
    assert_all_hex(&colors);
}

#[test]
fn generate_colors_square() {
    let colors = generate_colors("#db45f9", 10, Harmony::Square);
    assert_eq!(colors.len(), 10);
    assert_all_hex(&colors);
}

#[test]
fn generate_colors_vary_across_the_palette() {
    let colors = generate_colors("#db45f9", 4, Harmony::Square);
    assert_ne!(colors[0], colors[1]);
}

// --- random_color ---

#[test]
fn random_color_is_well_formed_hex() {
    for _ in 0..50 {
        let color = random_color();
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
        assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}
