//! Geospatial validity filtering
//!
//! GPS loggers report "no fix" as a 0,0 position, and unparseable coordinate
//! strings are treated the same way. A record is usable for the map only when
//! both coordinates parsed, are finite, and neither is exactly zero. Genuine
//! equator or prime-meridian samples are therefore dropped from the route.

use crate::conversion::normalize_coordinate;
use crate::types::{Coordinate, NormalizedCoordinate, TelemetryRecord};

/// Check a decimal position against the "no fix" heuristic
pub fn is_valid_fix(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite() && longitude.is_finite() && latitude != 0.0 && longitude != 0.0
}

/// Normalize both coordinate fields of a record.
///
/// Parse failures and non-finite numbers are stored as 0.0 with `parsed`
/// cleared, so no NaN ever leaves this function.
pub fn normalize_record(record: &TelemetryRecord) -> NormalizedCoordinate {
    let (latitude, lat_ok) = settle(normalize_coordinate(&record.latitude));
    let (longitude, lng_ok) = settle(normalize_coordinate(&record.longitude));

    NormalizedCoordinate {
        latitude,
        longitude,
        parsed: lat_ok && lng_ok,
    }
}

fn settle(coordinate: Coordinate) -> (f64, bool) {
    match coordinate {
        Coordinate::Valid(value) if value.is_finite() => (value, true),
        _ => (0.0, false),
    }
}

/// Whether a normalized position can be placed on the map
pub fn is_valid_coordinate(coordinate: &NormalizedCoordinate) -> bool {
    coordinate.parsed && is_valid_fix(coordinate.latitude, coordinate.longitude)
}

/// Normalize and tag every record, preserving order
pub fn classify_records(records: &[TelemetryRecord]) -> Vec<(NormalizedCoordinate, bool)> {
    records
        .iter()
        .map(|record| {
            let coordinate = normalize_record(record);
            (coordinate, is_valid_coordinate(&coordinate))
        })
        .collect()
}
