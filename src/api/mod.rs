pub mod chart_config;
pub mod series_colors;

pub use chart_config::{AxisConfig, AxisOrientation, LegendEntry, LineChartConfig, SeriesConfig};
pub use series_colors::assign_series_colors;
