//! Log decoder seam
//!
//! The VBOX log grammar is decoded elsewhere. This crate only needs something
//! that turns file text into a [`ParsedLog`].

use crate::types::ParsedLog;
use anyhow::Result;

/// Turns raw log text into a header and an ordered record sequence
pub trait LogDecoder {
    fn decode(&self, text: &str) -> Result<ParsedLog>;
}

impl<F> LogDecoder for F
where
    F: Fn(&str) -> Result<ParsedLog>,
{
    fn decode(&self, text: &str) -> Result<ParsedLog> {
        self(text)
    }
}

/// Reads a log that an external decoder already exported as a JSON
/// `{ "header": ..., "records": [...] }` document (`"data"` is accepted for
/// the record list too).
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLogDecoder;

#[cfg(feature = "json")]
impl LogDecoder for JsonLogDecoder {
    fn decode(&self, text: &str) -> Result<ParsedLog> {
        let log: ParsedLog =
            serde_json::from_str(text).map_err(crate::error::TelemetryError::from)?;
        Ok(log)
    }
}
