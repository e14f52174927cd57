use indexmap::IndexSet;
use rand::Rng;
use smallvec::SmallVec;

use super::entry::ColorTriple;
use super::harmonic::harmonic_triple;

/// Round-robin color dispenser for one palette.
///
/// Tracks the indices handed out in the current cycle; once every index
/// has been dispensed the cycle restarts. Within one cycle no index
/// repeats. State is owned by the instance; callers pick the palette
/// identity by picking which allocator they hand the palette to.
#[derive(Debug, Clone, Default)]
pub struct PaletteAllocator {
    dispensed: IndexSet<usize>,
}

impl PaletteAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of indices handed out in the current cycle.
    #[must_use]
    pub fn dispensed(&self) -> usize {
        self.dispensed.len()
    }

    pub fn reset(&mut self) {
        self.dispensed.clear();
    }

    /// Picks one not-yet-dispensed palette index uniformly at random.
    ///
    /// Index 0 is dispensed and recorded like any other. Returns `None`
    /// only for an empty palette.
    pub fn allocate_index<R: Rng + ?Sized>(
        &mut self,
        palette_len: usize,
        rng: &mut R,
    ) -> Option<usize> {
        if palette_len == 0 {
            return None;
        }

        let mut remaining: SmallVec<[usize; 16]> = (0..palette_len)
            .filter(|index| !self.dispensed.contains(index))
            .collect();
        if remaining.is_empty() {
            self.dispensed.clear();
            remaining = (0..palette_len).collect();
        }

        let pick = remaining[rng.random_range(0..remaining.len())];
        self.dispensed.insert(pick);
        Some(pick)
    }

    /// Dispenses one triple from `palette`, falling back to a generated
    /// harmonic triple when the palette is empty.
    pub fn allocate<R: Rng + ?Sized>(
        &mut self,
        palette: &[ColorTriple],
        rng: &mut R,
    ) -> ColorTriple {
        match self.allocate_index(palette.len(), rng) {
            Some(index) => palette[index],
            None => harmonic_triple(rng),
        }
    }
}
