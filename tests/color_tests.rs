use chartkit::core::{HexColor, Hsl, darken_hex};

#[test]
fn darken_subtracts_per_channel() {
    assert_eq!(darken_hex("#336699", 20), "#1f5285");
}

#[test]
fn darken_expands_three_digit_form() {
    assert_eq!(darken_hex("#369", 20), "#1f5285");
}

#[test]
fn darken_clamps_at_black() {
    assert_eq!(darken_hex("#050505", 20), "#000000");
}

#[test]
fn darken_passes_malformed_input_through() {
    assert_eq!(darken_hex("not-a-color", 20), "not-a-color");
    assert_eq!(darken_hex("#1234", 20), "#1234");
    assert_eq!(darken_hex("", 20), "");
}

#[test]
fn parse_accepts_missing_hash() {
    assert_eq!(HexColor::parse("369"), HexColor::parse("#336699"));
}

#[test]
fn parse_rejects_junk() {
    assert_eq!(HexColor::parse("#zzzzzz"), None);
    assert_eq!(HexColor::parse("#12345"), None);
    assert_eq!(HexColor::parse("#ééé"), None);
}

#[test]
fn display_is_lowercase_six_digit() {
    assert_eq!(HexColor::rgb(0x1f, 0x52, 0x85).to_string(), "#1f5285");
    assert_eq!(HexColor::rgb(0, 0, 0).to_string(), "#000000");
}

#[test]
fn from_str_reports_malformed_input() {
    let result: Result<HexColor, _> = "#nope".parse();
    assert!(result.is_err());
}

#[test]
fn hex_color_serializes_as_string() {
    let color = HexColor::rgb(0x1f, 0x52, 0x85);
    let json = serde_json::to_string(&color).expect("serialize");
    assert_eq!(json, "\"#1f5285\"");

    let back: HexColor = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, color);
}

#[test]
fn hsl_primaries_convert_exactly() {
    assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_hex().to_string(), "#ff0000");
    assert_eq!(Hsl::new(120.0, 100.0, 25.0).to_hex().to_string(), "#008000");
    assert_eq!(Hsl::new(240.0, 100.0, 50.0).to_hex().to_string(), "#0000ff");
    assert_eq!(Hsl::new(0.0, 0.0, 0.0).to_hex().to_string(), "#000000");
    assert_eq!(Hsl::new(0.0, 0.0, 100.0).to_hex().to_string(), "#ffffff");
}

#[test]
fn hsl_normalizes_hue_and_clamps_components() {
    assert_eq!(Hsl::new(480.0, 100.0, 50.0), Hsl::new(120.0, 100.0, 50.0));
    assert_eq!(Hsl::new(-90.0, 100.0, 50.0), Hsl::new(270.0, 100.0, 50.0));

    let clamped = Hsl::new(10.0, 140.0, -5.0);
    let (_, saturation, lightness) = clamped.components();
    assert_eq!(saturation, 100.0);
    assert_eq!(lightness, 0.0);
}
