use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::bound::{AxisBound, AxisValue, SymbolicBound, ZeroValuePolicy};
use crate::core::range::{RangeQuery, range_bounds};
use crate::core::types::SeriesRow;
use crate::error::{ChartError, ChartResult};

/// Recognized zoom-state fields for renderer-facing domain projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainField {
    Left,
    Right,
    Top,
    Bottom,
    Top2,
    Bottom2,
    SelectionStart,
    SelectionEnd,
}

impl DomainField {
    /// Maps a renderer prop name to its field; unknown names are `None`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "top2" => Some(Self::Top2),
            "bottom2" => Some(Self::Bottom2),
            "selectionStart" | "selection_start" => Some(Self::SelectionStart),
            "selectionEnd" | "selection_end" => Some(Self::SelectionEnd),
            _ => None,
        }
    }
}

/// Per-series recomputation parameters for a finished zoom gesture.
///
/// The two paddings default asymmetrically because the two series sit on
/// independently-scaled Y axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomConfig {
    pub primary_key: Option<String>,
    pub secondary_key: Option<String>,
    pub primary_padding: f64,
    pub secondary_padding: f64,
    pub zero_policy: ZeroValuePolicy,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            primary_key: None,
            secondary_key: None,
            primary_padding: 1.0,
            secondary_padding: 50.0,
            zero_policy: ZeroValuePolicy::default(),
        }
    }
}

impl ZoomConfig {
    #[must_use]
    pub fn new(primary_key: impl Into<String>, secondary_key: impl Into<String>) -> Self {
        Self {
            primary_key: Some(primary_key.into()),
            secondary_key: Some(secondary_key.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_primary_padding(mut self, padding: f64) -> Self {
        self.primary_padding = padding;
        self
    }

    #[must_use]
    pub fn with_secondary_padding(mut self, padding: f64) -> Self {
        self.secondary_padding = padding;
        self
    }

    #[must_use]
    pub fn with_zero_policy(mut self, policy: ZeroValuePolicy) -> Self {
        self.zero_policy = policy;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.primary_padding.is_finite() || !self.secondary_padding.is_finite() {
            return Err(ChartError::InvalidData(
                "zoom paddings must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Interactive zoom window over a dual-axis line chart.
///
/// `left`/`right` frame the horizontal selection; `top`/`bottom` and
/// `top2`/`bottom2` frame the two vertical axes. Defaults are symbolic
/// bounds the renderer resolves from the data itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomWindow {
    pub left: AxisBound,
    pub right: AxisBound,
    pub top: AxisBound,
    pub bottom: AxisBound,
    pub top2: AxisBound,
    pub bottom2: AxisBound,
    pub animating: bool,
    #[serde(default)]
    pub selection_start: Option<AxisValue>,
    #[serde(default)]
    pub selection_end: Option<AxisValue>,
}

impl Default for ZoomWindow {
    fn default() -> Self {
        Self {
            left: AxisBound::Symbolic(SymbolicBound::DATA_MIN),
            right: AxisBound::Symbolic(SymbolicBound::DATA_MAX),
            top: AxisBound::Symbolic(SymbolicBound::DataMax(1)),
            bottom: AxisBound::Symbolic(SymbolicBound::DataMin(-1)),
            top2: AxisBound::Symbolic(SymbolicBound::DataMax(50)),
            bottom2: AxisBound::Symbolic(SymbolicBound::DataMin(-50)),
            animating: true,
            selection_start: None,
            selection_end: None,
        }
    }
}

impl ZoomWindow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn selecting(&self) -> bool {
        self.selection_start.is_some()
    }

    pub fn pointer_down(&mut self, x: impl Into<AxisValue>) {
        self.selection_start = Some(x.into());
    }

    /// Extends the active gesture; ignored when no gesture started.
    pub fn pointer_move(&mut self, x: impl Into<AxisValue>) {
        if self.selection_start.is_some() {
            self.selection_end = Some(x.into());
        }
    }

    /// Finishes the gesture and recomputes bounds in place.
    pub fn pointer_up(&mut self, rows: &[SeriesRow], config: &ZoomConfig) {
        *self = self.apply_selection(rows, config);
    }

    pub fn clear_selection(&mut self) {
        self.selection_start = None;
        self.selection_end = None;
    }

    /// Restores the default fully-zoomed-out window.
    pub fn zoom_out(&mut self) {
        *self = Self::default();
    }

    /// Computes the post-gesture window.
    ///
    /// Degenerate gestures (missing series keys, unset or equal markers,
    /// an empty end label) cancel: the previous bounds survive with the
    /// markers cleared. A computed pair containing a degenerate bound
    /// under the active zero policy discards the whole update the same
    /// way. Right-to-left drags are normalized by swapping the markers.
    #[must_use]
    pub fn apply_selection(&self, rows: &[SeriesRow], config: &ZoomConfig) -> Self {
        let (Some(primary_key), Some(secondary_key)) =
            (&config.primary_key, &config.secondary_key)
        else {
            return self.cancelled();
        };
        let (Some(start), Some(end)) = (&self.selection_start, &self.selection_end) else {
            return self.cancelled();
        };
        if start == end || end.is_empty_label() {
            return self.cancelled();
        }

        let (start, end) = if start.is_after(end) {
            (end, start)
        } else {
            (start, end)
        };

        let from = slice_index(rows, start);
        let to = slice_index(rows, end);

        let primary = range_bounds(
            rows,
            from,
            to,
            &RangeQuery::new(primary_key, config.primary_padding)
                .with_policy(config.zero_policy),
        );
        let secondary = range_bounds(
            rows,
            from,
            to,
            &RangeQuery::new(secondary_key, config.secondary_padding)
                .with_policy(config.zero_policy)
                .with_fallback(
                    AxisBound::Symbolic(SymbolicBound::DataMin(-50)),
                    AxisBound::Symbolic(SymbolicBound::DataMax(50)),
                ),
        );

        let computed = [&primary.0, &primary.1, &secondary.0, &secondary.1];
        if computed
            .iter()
            .any(|bound| bound.is_degenerate(config.zero_policy))
        {
            warn!("discarding zoom update with degenerate bounds");
            return self.cancelled();
        }

        debug!(?from, ?to, "applying zoom selection");
        let mut next = self.cancelled();
        next.left = AxisBound::from(start.clone());
        next.right = AxisBound::from(end.clone());
        next.bottom = primary.0;
        next.top = primary.1;
        next.bottom2 = secondary.0;
        next.top2 = secondary.1;
        next.animating = true;
        next
    }

    /// Current value of one projectable field; unset gesture markers read
    /// as `None`.
    #[must_use]
    pub fn field(&self, field: DomainField) -> Option<AxisBound> {
        match field {
            DomainField::Left => Some(self.left.clone()),
            DomainField::Right => Some(self.right.clone()),
            DomainField::Top => Some(self.top.clone()),
            DomainField::Bottom => Some(self.bottom.clone()),
            DomainField::Top2 => Some(self.top2.clone()),
            DomainField::Bottom2 => Some(self.bottom2.clone()),
            DomainField::SelectionStart => self.selection_start.clone().map(AxisBound::from),
            DomainField::SelectionEnd => self.selection_end.clone().map(AxisBound::from),
        }
    }

    #[must_use]
    fn cancelled(&self) -> Self {
        let mut next = self.clone();
        next.clear_selection();
        next
    }
}

/// Projects zoom-state fields by renderer prop name, in order, keeping
/// duplicates. Unrecognized names are dropped; unset gesture markers
/// project as `None`.
#[must_use]
pub fn select_domain_fields(names: &[&str], window: &ZoomWindow) -> Vec<Option<AxisBound>> {
    names
        .iter()
        .filter_map(|name| DomainField::parse(name))
        .map(|field| window.field(field))
        .collect()
}

/// Resolves a gesture marker to a 1-based row index: numeric markers are
/// truncated and clamped below at 1, labels locate their matching row.
fn slice_index(rows: &[SeriesRow], marker: &AxisValue) -> Option<usize> {
    match marker {
        AxisValue::Number(value) => {
            if !value.is_finite() {
                return None;
            }
            Some((*value as i64).max(1) as usize)
        }
        AxisValue::Label(label) => rows
            .iter()
            .position(|row| matches!(&row.x, AxisValue::Label(x) if x == label))
            .map(|index| index + 1),
    }
}
