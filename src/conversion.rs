//! Coordinate conversion utilities
//!
//! Turns the decoder's coordinate fields (signed decimal numbers or
//! sexagesimal strings such as `31°19'5.9838"N`) into signed decimal
//! WGS84 degrees.

use crate::types::{Coordinate, FieldValue};
use log::warn;
use regex::Regex;
use std::sync::OnceLock;

/// Degrees, minutes, seconds and hemisphere, with no whitespace between tokens
const DMS_PATTERN: &str = r#"^(\d+)°(\d+)'(\d+(?:\.\d+)?)"([NSEW])$"#;

fn dms_regex() -> &'static Regex {
    static DMS_RE: OnceLock<Regex> = OnceLock::new();
    DMS_RE.get_or_init(|| Regex::new(DMS_PATTERN).expect("DMS pattern is a valid regex"))
}

/// Which axis a coordinate belongs to, for picking the hemisphere letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

/// Convert degrees/minutes/seconds to unsigned decimal degrees
pub fn degrees_to_decimal(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 3600.0
}

/// Parse a DMS string with a trailing hemisphere letter.
///
/// Returns `None` when the text does not match `D°M'S"H` exactly.
/// `S` and `W` produce negative values.
pub fn parse_dms(text: &str) -> Option<f64> {
    let caps = dms_regex().captures(text)?;

    let degrees: f64 = caps[1].parse().ok()?;
    let minutes: f64 = caps[2].parse().ok()?;
    let seconds: f64 = caps[3].parse().ok()?;
    let decimal = degrees_to_decimal(degrees, minutes, seconds);

    match &caps[4] {
        "S" | "W" => Some(-decimal),
        _ => Some(decimal),
    }
}

/// Normalize one coordinate field to decimal degrees.
///
/// Numbers are already decimal degrees and pass through unchanged. Strings
/// that are not valid DMS yield [`Coordinate::Invalid`] and a warning.
pub fn normalize_coordinate(field: &FieldValue) -> Coordinate {
    match field {
        FieldValue::Numeric(value) => Coordinate::Valid(*value),
        FieldValue::Preformatted(text) => match parse_dms(text) {
            Some(decimal) => Coordinate::Valid(decimal),
            None => {
                warn!("Unparseable coordinate '{}', treating as no fix", text);
                Coordinate::Invalid
            }
        },
    }
}

/// Format signed decimal degrees as `D°M'S.ssss"H`
pub fn format_dms(decimal: f64, axis: Axis) -> String {
    let hemisphere = match (axis, decimal < 0.0) {
        (Axis::Latitude, false) => 'N',
        (Axis::Latitude, true) => 'S',
        (Axis::Longitude, false) => 'E',
        (Axis::Longitude, true) => 'W',
    };

    // Work in ten-thousandths of a second so rounding can't produce 60"
    let total = (decimal.abs() * 3600.0 * 10_000.0).round() as u64;
    let degrees = total / (3600 * 10_000);
    let minutes = (total / (60 * 10_000)) % 60;
    let sec_units = total % (60 * 10_000);

    format!(
        "{}°{}'{}.{:04}\"{}",
        degrees,
        minutes,
        sec_units / 10_000,
        sec_units % 10_000,
        hemisphere
    )
}
