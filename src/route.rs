//! Route aggregation for the map view

use crate::filters::classify_records;
use crate::types::{LatLng, RouteAggregate, TelemetryRecord};
use log::debug;

/// Build the route geometry from the valid records, in recorded order.
///
/// The centroid is the plain arithmetic mean of latitudes and longitudes and
/// falls back to 0,0 when nothing is valid. No points are dropped, merged or
/// simplified.
pub fn aggregate_route(records: &[TelemetryRecord]) -> RouteAggregate {
    let polyline: Vec<LatLng> = classify_records(records)
        .into_iter()
        .filter(|(_, valid)| *valid)
        .map(|(coord, _)| LatLng::new(coord.latitude, coord.longitude))
        .collect();

    debug!(
        "Route: {} of {} records have a valid fix",
        polyline.len(),
        records.len()
    );

    route_from_points(polyline)
}

/// Assemble a [`RouteAggregate`] from already-validated points.
///
/// `end` is only set once there are at least two points.
pub fn route_from_points(polyline: Vec<LatLng>) -> RouteAggregate {
    let centroid = calculate_centroid(&polyline);
    let start = polyline.first().copied();
    let end = if polyline.len() >= 2 {
        polyline.last().copied()
    } else {
        None
    };

    RouteAggregate {
        centroid,
        polyline,
        start,
        end,
    }
}

/// Mean position of a point set, 0,0 for an empty set
pub fn calculate_centroid(points: &[LatLng]) -> LatLng {
    if points.is_empty() {
        return LatLng::default();
    }

    let count = points.len() as f64;
    let lat = points.iter().map(|p| p.lat).sum::<f64>() / count;
    let lng = points.iter().map(|p| p.lng).sum::<f64>() / count;

    LatLng::new(lat, lng)
}
