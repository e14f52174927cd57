//! chartkit: declarative chart configuration toolkit.
//!
//! Pure palette and axis-domain computation plus the configuration structs
//! a rendering host consumes. The renderer itself stays a black box: the
//! operations here degrade to usable defaults instead of failing.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod palette;
pub mod telemetry;

pub use api::{LineChartConfig, SeriesConfig};
pub use error::{ChartError, ChartResult};
