use serde::{Deserialize, Serialize};

use crate::core::color::HexColor;

/// Channel step used to derive table strokes from their primary color.
pub const TABLE_STROKE_DARKEN: u8 = 20;

/// Primary/fill/stroke color assignment for one plotted entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorTriple {
    pub primary: HexColor,
    pub fill: HexColor,
    pub stroke: HexColor,
}

impl ColorTriple {
    #[must_use]
    pub const fn new(primary: HexColor, fill: HexColor, stroke: HexColor) -> Self {
        Self {
            primary,
            fill,
            stroke,
        }
    }

    /// Builds a triple whose stroke is the primary darkened by the
    /// standard table step.
    #[must_use]
    pub const fn with_derived_stroke(primary: HexColor, fill: HexColor) -> Self {
        Self::new(primary, fill, primary.darken(TABLE_STROKE_DARKEN))
    }
}

/// One named, pre-assigned palette row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub category: String,
    pub name: String,
    pub index: usize,
    pub colors: ColorTriple,
}
