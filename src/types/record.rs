use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A measurement as handed over by the decoder: either a raw number or a
/// string the decoder already formatted (e.g. a DMS coordinate).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FieldValue {
    Numeric(f64),
    Preformatted(String),
}

impl FieldValue {
    /// Numeric value, if this field holds one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Numeric(value) => Some(*value),
            FieldValue::Preformatted(_) => None,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Preformatted(String::new())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Numeric(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Preformatted(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Preformatted(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Numeric(value) => write!(f, "{}", value),
            FieldValue::Preformatted(text) => f.write_str(text),
        }
    }
}

/// Satellite fix quality for one sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Satellites {
    pub count: u32,
    #[cfg_attr(feature = "serde", serde(rename = "hasDGPS", default))]
    pub has_dgps: bool,
}

/// One decoded telemetry sample
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TelemetryRecord {
    pub time: FieldValue,
    pub satellites: Satellites,
    pub latitude: FieldValue,
    pub longitude: FieldValue,
    pub velocity: FieldValue,
    pub heading: FieldValue,
    pub height: FieldValue,
}
