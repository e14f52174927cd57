use rand::Rng;

use crate::core::color::Hsl;

use super::entry::ColorTriple;

/// Generates a random triadic triple.
///
/// The base hue is drawn anywhere on the wheel with saturation in
/// `[60, 90)` and lightness in `[45, 75)` percent; fill and stroke sit
/// 120 and 240 degrees around the wheel, fill slightly lighter and
/// stroke slightly darker and more saturated. The `Hsl` constructor
/// clamps the adjusted components into range.
pub fn harmonic_triple<R: Rng + ?Sized>(rng: &mut R) -> ColorTriple {
    let hue = rng.random_range(0.0..360.0);
    let saturation = rng.random_range(60.0..90.0);
    let lightness = rng.random_range(45.0..75.0);

    let primary = Hsl::new(hue, saturation, lightness);
    let fill = Hsl::new(hue + 120.0, saturation, lightness + 10.0);
    let stroke = Hsl::new(hue + 240.0, saturation + 10.0, lightness - 10.0);

    ColorTriple::new(primary.to_hex(), fill.to_hex(), stroke.to_hex())
}
