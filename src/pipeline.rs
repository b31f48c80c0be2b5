//! One processing pass over a decoded log
//!
//! Every view is derived from a shared borrow of the records; nothing is
//! cached or mutated, so a fresh [`LogView`] is built for each log.

use crate::display::{channel_unit_rows, format_table, header_summary, DisplayRow, SummaryItem};
use crate::route::aggregate_route;
use crate::series::{extract_metrics, Metric, MetricSeries};
use crate::types::{ParsedLog, RouteAggregate};
use log::debug;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Everything the table, map and chart views need
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LogView {
    pub summary: Vec<SummaryItem>,
    pub comments: Vec<String>,
    pub channel_units: Vec<(String, String)>,
    pub table: Vec<DisplayRow>,
    pub route: RouteAggregate,
    /// False selects the map's "no valid coordinates" state
    pub has_valid_coordinates: bool,
    pub series: BTreeMap<Metric, MetricSeries>,
    pub total_records: usize,
}

/// Build all views, charting every [`Metric`]
pub fn build_log_view(log: &ParsedLog) -> LogView {
    build_log_view_with_metrics(log, &Metric::ALL)
}

/// Build all views, charting only the given metrics
pub fn build_log_view_with_metrics(log: &ParsedLog, metrics: &[Metric]) -> LogView {
    let records = log.records.as_slice();

    let route = aggregate_route(records);
    let series = extract_metrics(records, metrics);
    let table = format_table(records);

    debug!(
        "Built view: {} rows, {} route points, {} series",
        table.len(),
        route.point_count(),
        series.len()
    );

    LogView {
        summary: header_summary(&log.header),
        comments: log.header.comments.clone(),
        channel_units: channel_unit_rows(&log.header),
        table,
        has_valid_coordinates: route.has_points(),
        route,
        series,
        total_records: records.len(),
    }
}
