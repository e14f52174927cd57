use chartkit::core::{HexColor, Hsl, darken_hex};
use proptest::prelude::*;

proptest! {
    #[test]
    fn darken_never_brightens_a_channel(
        r in 0u8..=255,
        g in 0u8..=255,
        b in 0u8..=255,
        amount in 0u8..=255
    ) {
        let color = HexColor::rgb(r, g, b);
        let darkened = color.darken(amount);
        let (dr, dg, db) = darkened.channels();

        prop_assert!(dr <= r && dg <= g && db <= b);
        prop_assert_eq!(HexColor::parse(&darkened.to_string()), Some(darkened));
    }

    #[test]
    fn display_and_parse_round_trip(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let color = HexColor::rgb(r, g, b);
        prop_assert_eq!(HexColor::parse(&color.to_string()), Some(color));
    }

    #[test]
    fn hsl_conversion_is_total(
        hue in -720.0f64..720.0,
        saturation in -50.0f64..150.0,
        lightness in -50.0f64..150.0
    ) {
        let formatted = Hsl::new(hue, saturation, lightness).to_hex().to_string();
        prop_assert_eq!(formatted.len(), 7);
        prop_assert!(formatted.starts_with('#'));
        prop_assert!(formatted[1..].chars().all(|ch| ch.is_ascii_hexdigit()));
    }

    #[test]
    fn darken_hex_never_fails(input in ".*", amount in 0u8..=255) {
        let output = darken_hex(&input, amount);
        if HexColor::parse(&input).is_some() {
            prop_assert!(HexColor::parse(&output).is_some());
        } else {
            prop_assert_eq!(output, input);
        }
    }
}
