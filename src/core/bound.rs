use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ChartError;

/// Symbolic axis bound the renderer resolves from the data itself.
///
/// The payload is an additive offset: `DataMax(1)` renders as `dataMax+1`,
/// `DataMin(-50)` as `dataMin-50`, offset zero as the bare keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolicBound {
    DataMin(i64),
    DataMax(i64),
}

impl SymbolicBound {
    pub const DATA_MIN: Self = Self::DataMin(0);
    pub const DATA_MAX: Self = Self::DataMax(0);
}

impl fmt::Display for SymbolicBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (base, offset) = match self {
            Self::DataMin(offset) => ("dataMin", *offset),
            Self::DataMax(offset) => ("dataMax", *offset),
        };
        if offset == 0 {
            write!(f, "{base}")
        } else if offset > 0 {
            write!(f, "{base}+{offset}")
        } else {
            write!(f, "{base}{offset}")
        }
    }
}

impl FromStr for SymbolicBound {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let offset = |rest: &str| -> Result<i64, ChartError> {
            if rest.is_empty() {
                Ok(0)
            } else {
                rest.parse().map_err(|_| {
                    ChartError::InvalidData(format!("malformed symbolic bound `{input}`"))
                })
            }
        };

        if let Some(rest) = input.strip_prefix("dataMin") {
            return Ok(Self::DataMin(offset(rest)?));
        }
        if let Some(rest) = input.strip_prefix("dataMax") {
            return Ok(Self::DataMax(offset(rest)?));
        }
        Err(ChartError::InvalidData(format!(
            "malformed symbolic bound `{input}`"
        )))
    }
}

impl Serialize for SymbolicBound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SymbolicBound {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// How a field value of exactly `0.0` is treated during domain reduction
/// and bound acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ZeroValuePolicy {
    /// Zero is skipped like a missing sample, and a computed bound of zero
    /// rejects the update.
    #[default]
    TreatAsMissing,
    /// Zero participates in min/max and is an acceptable bound.
    TreatAsValue,
}

/// One edge of a renderer axis domain: a concrete number, a symbolic
/// auto-bound, or a category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisBound {
    Value(f64),
    Symbolic(SymbolicBound),
    Label(String),
}

impl AxisBound {
    /// Whether this bound rejects a zoom update under `policy`: NaN and
    /// empty labels always do, numeric zero only under the default policy.
    #[must_use]
    pub fn is_degenerate(&self, policy: ZeroValuePolicy) -> bool {
        match self {
            Self::Value(value) => {
                value.is_nan()
                    || (matches!(policy, ZeroValuePolicy::TreatAsMissing) && *value == 0.0)
            }
            Self::Symbolic(_) => false,
            Self::Label(label) => label.is_empty(),
        }
    }
}

impl From<f64> for AxisBound {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

impl From<SymbolicBound> for AxisBound {
    fn from(bound: SymbolicBound) -> Self {
        Self::Symbolic(bound)
    }
}

impl From<AxisValue> for AxisBound {
    fn from(value: AxisValue) -> Self {
        match value {
            AxisValue::Number(number) => Self::Value(number),
            AxisValue::Label(label) => Self::Label(label),
        }
    }
}

/// X-axis sample value: plain number or category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisValue {
    Number(f64),
    Label(String),
}

impl AxisValue {
    #[must_use]
    pub fn is_empty_label(&self) -> bool {
        matches!(self, Self::Label(label) if label.is_empty())
    }

    /// Gesture normalization order: numeric on numbers, lexicographic on
    /// labels, never across kinds.
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(lhs), Self::Number(rhs)) => lhs > rhs,
            (Self::Label(lhs), Self::Label(rhs)) => lhs > rhs,
            _ => false,
        }
    }
}

impl From<f64> for AxisValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AxisValue {
    fn from(label: &str) -> Self {
        Self::Label(label.to_owned())
    }
}

impl From<String> for AxisValue {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}
