use serde::{Deserialize, Serialize};

use crate::core::bound::{AxisBound, AxisValue, ZeroValuePolicy};
use crate::core::color::HexColor;
use crate::core::types::SeriesRow;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{ZoomConfig, ZoomWindow};
use crate::palette::ColorTriple;

/// Where an axis panel sits on the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AxisOrientation {
    #[default]
    Bottom,
    Left,
    Right,
}

/// Declarative per-axis props handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub id: String,
    pub domain: (AxisBound, AxisBound),
    pub orientation: AxisOrientation,
    pub allow_data_overflow: bool,
    pub hide: bool,
}

/// One plotted series and its assigned colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesConfig {
    pub key: String,
    pub colors: ColorTriple,
}

impl SeriesConfig {
    #[must_use]
    pub fn new(key: impl Into<String>, colors: ColorTriple) -> Self {
        Self {
            key: key.into(),
            colors,
        }
    }
}

/// Legend row: display label plus swatch color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: HexColor,
}

/// Assembled configuration for a dual-axis, drag-to-zoom line chart.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    rows: Vec<SeriesRow>,
    primary: Option<SeriesConfig>,
    secondary: Option<SeriesConfig>,
    #[serde(default)]
    window: ZoomWindow,
    #[serde(default = "default_primary_padding")]
    primary_padding: f64,
    #[serde(default = "default_secondary_padding")]
    secondary_padding: f64,
    #[serde(default)]
    zero_policy: ZeroValuePolicy,
}

impl LineChartConfig {
    #[must_use]
    pub fn new(rows: Vec<SeriesRow>) -> Self {
        Self {
            rows,
            primary: None,
            secondary: None,
            window: ZoomWindow::default(),
            primary_padding: default_primary_padding(),
            secondary_padding: default_secondary_padding(),
            zero_policy: ZeroValuePolicy::default(),
        }
    }

    /// Sets the series plotted against the left Y axis.
    #[must_use]
    pub fn with_primary_series(mut self, series: SeriesConfig) -> Self {
        self.primary = Some(series);
        self
    }

    /// Sets the series plotted against the right Y axis.
    #[must_use]
    pub fn with_secondary_series(mut self, series: SeriesConfig) -> Self {
        self.secondary = Some(series);
        self
    }

    /// Overrides the per-axis zoom paddings.
    pub fn with_paddings(mut self, primary: f64, secondary: f64) -> ChartResult<Self> {
        if !primary.is_finite() || !secondary.is_finite() {
            return Err(ChartError::InvalidData(
                "zoom paddings must be finite".to_owned(),
            ));
        }
        self.primary_padding = primary;
        self.secondary_padding = secondary;
        Ok(self)
    }

    #[must_use]
    pub fn with_zero_policy(mut self, policy: ZeroValuePolicy) -> Self {
        self.zero_policy = policy;
        self
    }

    #[must_use]
    pub fn rows(&self) -> &[SeriesRow] {
        &self.rows
    }

    #[must_use]
    pub fn window(&self) -> &ZoomWindow {
        &self.window
    }

    #[must_use]
    pub fn primary_series(&self) -> Option<&SeriesConfig> {
        self.primary.as_ref()
    }

    #[must_use]
    pub fn secondary_series(&self) -> Option<&SeriesConfig> {
        self.secondary.as_ref()
    }

    pub fn pointer_down(&mut self, x: impl Into<AxisValue>) {
        self.window.pointer_down(x);
    }

    pub fn pointer_move(&mut self, x: impl Into<AxisValue>) {
        self.window.pointer_move(x);
    }

    /// Finishes the active gesture against the configured series.
    pub fn pointer_up(&mut self) {
        let config = self.zoom_config();
        self.window = self.window.apply_selection(&self.rows, &config);
    }

    pub fn zoom_out(&mut self) {
        self.window.zoom_out();
    }

    /// X-axis props carrying the current horizontal zoom domain.
    #[must_use]
    pub fn x_axis(&self) -> AxisConfig {
        AxisConfig {
            id: "x".to_owned(),
            domain: (self.window.left.clone(), self.window.right.clone()),
            orientation: AxisOrientation::Bottom,
            allow_data_overflow: true,
            hide: false,
        }
    }

    /// Left Y-axis props for the primary series.
    #[must_use]
    pub fn y_axis(&self) -> AxisConfig {
        AxisConfig {
            id: "y".to_owned(),
            domain: (self.window.bottom.clone(), self.window.top.clone()),
            orientation: AxisOrientation::Left,
            allow_data_overflow: true,
            hide: self.primary.is_none(),
        }
    }

    /// Right Y-axis props for the secondary series.
    #[must_use]
    pub fn y2_axis(&self) -> AxisConfig {
        AxisConfig {
            id: "y2".to_owned(),
            domain: (self.window.bottom2.clone(), self.window.top2.clone()),
            orientation: AxisOrientation::Right,
            allow_data_overflow: true,
            hide: self.secondary.is_none(),
        }
    }

    /// Legend rows for every configured series, in slot order.
    #[must_use]
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        [self.primary.as_ref(), self.secondary.as_ref()]
            .into_iter()
            .flatten()
            .map(|series| LegendEntry {
                label: series.key.clone(),
                color: series.colors.primary,
            })
            .collect()
    }

    /// Serializes the full chart setup to pretty JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize chart config: {e}")))
    }

    /// Deserializes a chart setup from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse chart config: {e}")))
    }

    fn zoom_config(&self) -> ZoomConfig {
        ZoomConfig {
            primary_key: self.primary.as_ref().map(|series| series.key.clone()),
            secondary_key: self.secondary.as_ref().map(|series| series.key.clone()),
            primary_padding: self.primary_padding,
            secondary_padding: self.secondary_padding,
            zero_policy: self.zero_policy,
        }
    }
}

fn default_primary_padding() -> f64 {
    1.0
}

fn default_secondary_padding() -> f64 {
    50.0
}
