use crate::core::bound::{AxisBound, SymbolicBound, ZeroValuePolicy};
use crate::core::types::SeriesRow;

/// Parameters for one Y-domain computation over a row slice.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeQuery<'a> {
    pub field: &'a str,
    pub padding: f64,
    pub policy: ZeroValuePolicy,
    pub fallback_bottom: AxisBound,
    pub fallback_top: AxisBound,
}

impl<'a> RangeQuery<'a> {
    #[must_use]
    pub fn new(field: &'a str, padding: f64) -> Self {
        Self {
            field,
            padding,
            policy: ZeroValuePolicy::default(),
            fallback_bottom: AxisBound::Symbolic(SymbolicBound::DataMin(-1)),
            fallback_top: AxisBound::Symbolic(SymbolicBound::DataMax(1)),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ZeroValuePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, bottom: AxisBound, top: AxisBound) -> Self {
        self.fallback_bottom = bottom;
        self.fallback_top = top;
        self
    }
}

/// Computes `(min - padding, max + padding)` for `query.field` across the
/// 1-based inclusive row range `from..=to`.
///
/// Absent indices, empty data, an inverted or out-of-range slice, or a
/// slice with no usable samples all return the query's fallback pair
/// unpadded. Indices past the end clamp to the row count. Never fails.
#[must_use]
pub fn range_bounds(
    rows: &[SeriesRow],
    from: Option<usize>,
    to: Option<usize>,
    query: &RangeQuery<'_>,
) -> (AxisBound, AxisBound) {
    let fallback = || (query.fallback_bottom.clone(), query.fallback_top.clone());

    let (Some(from), Some(to)) = (from, to) else {
        return fallback();
    };
    if rows.is_empty() {
        return fallback();
    }

    let start = from.max(1) - 1;
    let end = to.min(rows.len());
    if start >= end {
        return fallback();
    }

    let mut extent: Option<(f64, f64)> = None;
    for row in &rows[start..end] {
        let Some(value) = row.value(query.field) else {
            continue;
        };
        if value.is_nan() {
            continue;
        }
        if matches!(query.policy, ZeroValuePolicy::TreatAsMissing) && value == 0.0 {
            continue;
        }
        extent = Some(match extent {
            Some((min, max)) => (min.min(value), max.max(value)),
            None => (value, value),
        });
    }

    match extent {
        Some((min, max)) => (
            AxisBound::Value(min - query.padding),
            AxisBound::Value(max + query.padding),
        ),
        None => fallback(),
    }
}
