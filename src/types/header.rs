#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Device and software metadata reported by the logger
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct VboxInfo {
    pub version: String,
    pub gps_type: String,
    pub serial_number: String,
    /// Sample rate in Hz, 0 when unknown
    pub log_rate: u32,
    pub software_version: String,
}

/// Header block of a decoded log
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct LogHeader {
    /// File creation timestamp (ISO 8601, e.g. "2024-03-02T10:15:00.000Z")
    pub creation_date: String,
    pub vbox_info: VboxInfo,
    pub comments: Vec<String>,
    pub column_names: Vec<String>,
    /// Units per column, index-aligned with `column_names` when present
    pub channel_units: Option<Vec<String>>,
}
