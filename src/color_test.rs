#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// parse_hex
// =============================================================

#[test]
fn parse_hex_six_digits() {
    assert_eq!(Rgb::parse_hex("#646464"), Some(Rgb::new(100, 100, 100)));
}

#[test]
fn parse_hex_three_digits_expands() {
    assert_eq!(Rgb::parse_hex("#f0a"), Some(Rgb::new(0xff, 0x00, 0xaa)));
}

#[test]
fn parse_hex_drops_alpha_digits() {
    assert_eq!(Rgb::parse_hex("#64646480"), Some(Rgb::new(100, 100, 100)));
}

#[test]
fn parse_hex_trims_and_ignores_case() {
    assert_eq!(Rgb::parse_hex("  #AbCdEf "), Some(Rgb::new(0xab, 0xcd, 0xef)));
}

#[test]
fn parse_hex_rejects_missing_hash() {
    assert_eq!(Rgb::parse_hex("646464"), None);
}

#[test]
fn parse_hex_rejects_bad_length() {
    assert_eq!(Rgb::parse_hex("#6464"), None);
    assert_eq!(Rgb::parse_hex("#"), None);
}

#[test]
fn parse_hex_rejects_non_hex() {
    assert_eq!(Rgb::parse_hex("#gggggg"), None);
    assert_eq!(Rgb::parse_hex("#64646zz0"), None);
}

#[test]
fn parse_hex_rejects_sign_characters() {
    assert_eq!(Rgb::parse_hex("#+f+f+f"), None);
    assert_eq!(Rgb::parse_hex("#+1+2+3"), None);
    assert_eq!(Rgb::parse_hex("#646464+0"), None);
}

#[test]
fn parse_hex_rejects_multibyte() {
    assert_eq!(Rgb::parse_hex("#ééé"), None);
}

#[test]
fn to_hex_is_lowercase_six_digits() {
    assert_eq!(Rgb::new(0xAB, 0x01, 0xFF).to_hex(), "#ab01ff");
}

// =============================================================
// alpha_for_opacity
// =============================================================

#[test]
fn alpha_endpoints() {
    assert_eq!(alpha_for_opacity(0.0), 0);
    assert_eq!(alpha_for_opacity(1.0), 255);
}

#[test]
fn alpha_half_rounds_up() {
    // 0.5 * 255 = 127.5
    assert_eq!(alpha_for_opacity(0.5), 128);
}

#[test]
fn alpha_matches_round_half_up_across_range() {
    for step in 0..=1000 {
        let opacity = f64::from(step) / 1000.0;
        let expected = (opacity * 255.0 + 0.5).floor();
        assert_eq!(f64::from(alpha_for_opacity(opacity)), expected, "opacity {opacity}");
    }
}

#[test]
fn alpha_saturates_out_of_range() {
    assert_eq!(alpha_for_opacity(-3.0), 0);
    assert_eq!(alpha_for_opacity(7.0), 255);
}

// =============================================================
// Color
// =============================================================

#[test]
fn with_opacity_keeps_rgb() {
    let c = Color::with_opacity(Rgb::new(1, 2, 3), 1.0);
    assert_eq!(c, Color { r: 1, g: 2, b: 3, a: 255 });
    assert_eq!(c.rgb(), Rgb::new(1, 2, 3));
}

#[test]
fn to_css_formats_rgba() {
    let c = Color { r: 100, g: 100, b: 100, a: 255 };
    assert_eq!(c.to_css(), "rgba(100, 100, 100, 1.000)");
    let clear = Color { r: 0, g: 0, b: 0, a: 0 };
    assert_eq!(clear.to_css(), "rgba(0, 0, 0, 0.000)");
}

#[test]
fn display_includes_alpha() {
    let c = Color { r: 0x64, g: 0x64, b: 0x64, a: 0x80 };
    assert_eq!(c.to_string(), "#64646480");
}
