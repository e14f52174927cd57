pub mod allocator;
pub mod entry;
pub mod harmonic;
pub mod resolver;
pub mod tables;

pub use allocator::PaletteAllocator;
pub use entry::{ColorTriple, PaletteEntry, TABLE_STROKE_DARKEN};
pub use harmonic::harmonic_triple;
pub use resolver::{ColorResolver, normalize_name};
pub use tables::{CategoryPalette, UNKNOWN_CATEGORY_TRIPLE, category, series_palette};
