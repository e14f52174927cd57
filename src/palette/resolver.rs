use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use super::allocator::PaletteAllocator;
use super::entry::{ColorTriple, PaletteEntry};
use super::tables::{self, UNKNOWN_CATEGORY_TRIPLE};

/// Lookup-key normalization: Unicode lowercase, Latin diacritics folded,
/// ASCII spaces to underscores.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    for ch in name.to_lowercase().chars() {
        match ch {
            ' ' => normalized.push('_'),
            'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => normalized.push('a'),
            'é' | 'è' | 'ê' | 'ë' => normalized.push('e'),
            'í' | 'ì' | 'î' | 'ï' => normalized.push('i'),
            'ó' | 'ò' | 'ô' | 'ö' | 'õ' => normalized.push('o'),
            'ú' | 'ù' | 'û' | 'ü' => normalized.push('u'),
            'ñ' => normalized.push('n'),
            'ç' => normalized.push('c'),
            other => normalized.push(other),
        }
    }
    normalized
}

/// Stateful `(category, name)` color resolution.
///
/// Owns one allocator per category plus one for the arbitrary-series
/// palette, and the random source behind fallback picks. Instances are
/// independent: dispensation history never leaks between resolvers.
#[derive(Debug)]
pub struct ColorResolver<R = StdRng> {
    allocators: HashMap<String, PaletteAllocator>,
    series_allocator: PaletteAllocator,
    rng: R,
}

impl ColorResolver<StdRng> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic resolver for reproducible assignment.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Looks up the fixed entry for a known pair without touching
    /// allocator state.
    #[must_use]
    pub fn lookup(category: &str, name: &str) -> Option<&'static PaletteEntry> {
        tables::category(category)?.entry(&normalize_name(name))
    }
}

impl Default for ColorResolver<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ColorResolver<R> {
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self {
            allocators: HashMap::new(),
            series_allocator: PaletteAllocator::new(),
            rng,
        }
    }

    /// Resolves a display name within a category to its color triple.
    ///
    /// Unknown names draw from the category's fallback palette; an
    /// unknown category collapses to the fixed neutral triple. Never
    /// fails.
    pub fn resolve(&mut self, category: &str, name: &str) -> ColorTriple {
        let Some(palette) = tables::category(category) else {
            warn!(category, "unknown palette category, using neutral triple");
            return UNKNOWN_CATEGORY_TRIPLE;
        };

        let key = normalize_name(name);
        if let Some(entry) = palette.entry(&key) {
            return entry.colors;
        }

        debug!(
            category,
            name = key.as_str(),
            "no fixed entry, allocating from fallback palette"
        );
        let allocator = self.allocators.entry(category.to_owned()).or_default();
        allocator.allocate(palette.fallback(), &mut self.rng)
    }

    /// Draws the next color for an unnamed series from the default series
    /// palette.
    pub fn allocate_series(&mut self) -> ColorTriple {
        self.series_allocator
            .allocate(tables::series_palette(), &mut self.rng)
    }
}
