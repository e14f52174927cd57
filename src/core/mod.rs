pub mod bound;
pub mod color;
pub mod range;
pub mod types;

pub use bound::{AxisBound, AxisValue, SymbolicBound, ZeroValuePolicy};
pub use color::{HexColor, Hsl, darken_hex};
pub use range::{RangeQuery, range_bounds};
pub use types::SeriesRow;
