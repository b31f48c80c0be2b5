#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of normalizing one coordinate field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coordinate {
    /// Signed decimal degrees
    Valid(f64),
    /// String that did not match the DMS pattern
    Invalid,
}

impl Coordinate {
    pub fn is_valid(&self) -> bool {
        matches!(self, Coordinate::Valid(_))
    }

    /// Decimal value with `Invalid` collapsed to 0.0 for display consumers
    pub fn value_or_zero(&self) -> f64 {
        match self {
            Coordinate::Valid(value) => *value,
            Coordinate::Invalid => 0.0,
        }
    }
}

/// A record's position after normalization.
///
/// `latitude`/`longitude` are never NaN: an unparseable field is stored as
/// 0.0 and `parsed` is cleared.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NormalizedCoordinate {
    pub latitude: f64,
    pub longitude: f64,
    /// False when either field failed to parse
    pub parsed: bool,
}

/// A point on the map
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Map-ready geometry built from the geospatially valid records
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteAggregate {
    pub centroid: LatLng,
    pub polyline: Vec<LatLng>,
    pub start: Option<LatLng>,
    pub end: Option<LatLng>,
}

impl RouteAggregate {
    /// True when there is at least one point to draw
    pub fn has_points(&self) -> bool {
        !self.polyline.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.polyline.len()
    }
}
