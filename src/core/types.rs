use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::bound::AxisValue;

/// One chart sample: an X value plus named numeric series fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRow {
    pub x: AxisValue,
    #[serde(default)]
    values: IndexMap<String, f64>,
}

impl SeriesRow {
    #[must_use]
    pub fn new(x: impl Into<AxisValue>) -> Self {
        Self {
            x: x.into(),
            values: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, field: impl Into<String>, value: f64) -> Self {
        self.values.insert(field.into(), value);
        self
    }

    pub fn set_value(&mut self, field: impl Into<String>, value: f64) {
        self.values.insert(field.into(), value);
    }

    #[must_use]
    pub fn value(&self, field: &str) -> Option<f64> {
        self.values.get(field).copied()
    }

    /// Field names in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}
