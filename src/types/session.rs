use crate::types::{LogHeader, TelemetryRecord};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete decoded log as produced by a [`crate::LogDecoder`]
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedLog {
    #[cfg_attr(feature = "serde", serde(default))]
    pub header: LogHeader,
    #[cfg_attr(feature = "serde", serde(alias = "data"))]
    pub records: Vec<TelemetryRecord>,
}

impl ParsedLog {
    pub fn new(header: LogHeader, records: Vec<TelemetryRecord>) -> Self {
        Self { header, records }
    }

    /// Number of records in the log
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
