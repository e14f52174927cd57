//! Fixed palette data.
//!
//! Seed rows are the single source of truth: `(name, primary, fill)` with
//! the stroke derived at table-construction time. Rows that fail to parse
//! are skipped rather than aborting table construction.

use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::core::color::HexColor;

use super::entry::{ColorTriple, PaletteEntry};

/// Fixed palette for one category: named entries plus the fallback pool
/// dispensed to unknown names.
#[derive(Debug, Clone)]
pub struct CategoryPalette {
    category: &'static str,
    entries: IndexMap<String, PaletteEntry>,
    fallback: Vec<ColorTriple>,
}

impl CategoryPalette {
    #[must_use]
    pub fn category(&self) -> &str {
        self.category
    }

    /// Looks up an entry by its already-normalized name.
    #[must_use]
    pub fn entry(&self, normalized_name: &str) -> Option<&PaletteEntry> {
        self.entries.get(normalized_name)
    }

    pub fn entries(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.values()
    }

    #[must_use]
    pub fn fallback(&self) -> &[ColorTriple] {
        &self.fallback
    }
}

/// Neutral triple used when the category itself is unknown.
pub const UNKNOWN_CATEGORY_TRIPLE: ColorTriple = ColorTriple::new(
    HexColor::rgb(0x88, 0x84, 0xd8),
    HexColor::rgb(0xb8, 0xb5, 0xe8),
    HexColor::rgb(0x74, 0x70, 0xc4),
);

const BANK_SEED: &[(&str, &str, &str)] = &[
    ("galicia", "#fa8a64", "#fcb49b"),
    ("santander", "#ec0000", "#f66666"),
    ("bbva", "#004c9b", "#4d87c2"),
    ("macro", "#01488b", "#5b86b5"),
    ("nacion", "#00529b", "#6695c2"),
    ("patagonia", "#00a88f", "#66cbbc"),
    ("hsbc", "#db0011", "#e9666f"),
    ("supervielle", "#e20613", "#ee6a71"),
    ("icbc", "#c7000b", "#dd666d"),
    ("brubank", "#6235e9", "#a186f2"),
    ("uala", "#3564fd", "#86a2fe"),
    ("mercado_pago", "#00b1ea", "#66d0f2"),
];

const BANK_FALLBACK_SEED: &[(&str, &str)] = &[
    ("#8884d8", "#b8b5e8"),
    ("#82ca9d", "#b4dfc4"),
    ("#ffc658", "#ffdd9b"),
    ("#ff7f50", "#ffb296"),
    ("#20b2aa", "#79d0cc"),
    ("#9370db", "#bea9e9"),
    ("#f06292", "#f6a1be"),
    ("#4db6ac", "#94d3cd"),
];

const SERIES_SEED: &[(&str, &str)] = &[
    ("#8884d8", "#b8b5e8"),
    ("#82ca9d", "#b4dfc4"),
    ("#ffc658", "#ffdd9b"),
    ("#d84884", "#e891b5"),
    ("#48a0d8", "#91c6e8"),
    ("#66bb6a", "#a3d6a5"),
];

static TABLES: LazyLock<IndexMap<&'static str, CategoryPalette>> = LazyLock::new(|| {
    let mut tables = IndexMap::new();
    tables.insert("bank", build_category("bank", BANK_SEED, BANK_FALLBACK_SEED));
    tables
});

static SERIES_PALETTE: LazyLock<Vec<ColorTriple>> =
    LazyLock::new(|| build_triples(SERIES_SEED));

/// Looks up the fixed palette for a category tag.
#[must_use]
pub fn category(tag: &str) -> Option<&'static CategoryPalette> {
    TABLES.get(tag)
}

/// Known category tags, in table order.
pub fn categories() -> impl Iterator<Item = &'static str> {
    TABLES.keys().copied()
}

/// Ordered default palette for arbitrary, unnamed series.
#[must_use]
pub fn series_palette() -> &'static [ColorTriple] {
    &SERIES_PALETTE
}

fn build_category(
    category: &'static str,
    named: &[(&str, &str, &str)],
    fallback: &[(&str, &str)],
) -> CategoryPalette {
    let mut entries = IndexMap::new();
    for (name, primary, fill) in named {
        let (Some(primary), Some(fill)) = (HexColor::parse(primary), HexColor::parse(fill)) else {
            continue;
        };
        let index = entries.len();
        entries.insert(
            (*name).to_owned(),
            PaletteEntry {
                category: category.to_owned(),
                name: (*name).to_owned(),
                index,
                colors: ColorTriple::with_derived_stroke(primary, fill),
            },
        );
    }

    CategoryPalette {
        category,
        entries,
        fallback: build_triples(fallback),
    }
}

fn build_triples(seed: &[(&str, &str)]) -> Vec<ColorTriple> {
    seed.iter()
        .filter_map(|(primary, fill)| {
            Some(ColorTriple::with_derived_stroke(
                HexColor::parse(primary)?,
                HexColor::parse(fill)?,
            ))
        })
        .collect()
}
