//! Chart series extraction
//!
//! Series are built from the full record sequence, so `index` always joins
//! back to the table row, whether or not that record had a usable fix.

use crate::types::{FieldValue, TelemetryRecord};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scalar channels that can be charted against time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Metric {
    Velocity,
    Heading,
    Height,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Velocity, Metric::Heading, Metric::Height];

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Velocity => "velocity",
            Metric::Heading => "heading",
            Metric::Height => "height",
        }
    }

    /// Pick this metric's field out of a record
    pub fn value_of<'a>(&self, record: &'a TelemetryRecord) -> &'a FieldValue {
        match self {
            Metric::Velocity => &record.velocity,
            Metric::Heading => &record.heading,
            Metric::Height => &record.height,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "velocity" | "speed" => Ok(Metric::Velocity),
            "heading" => Ok(Metric::Heading),
            "height" | "altitude" => Ok(Metric::Height),
            other => Err(format!(
                "unknown metric '{}' (expected velocity, heading or height)",
                other
            )),
        }
    }
}

/// One chart sample
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeriesPoint {
    /// Zero-based position in the original record sequence
    pub index: usize,
    pub time: FieldValue,
    /// Copied as-is; the chart decides what to do with strings
    pub value: FieldValue,
}

pub type MetricSeries = Vec<SeriesPoint>;

/// Project one metric across every record, in order
pub fn extract_series(records: &[TelemetryRecord], metric: Metric) -> MetricSeries {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| SeriesPoint {
            index,
            time: record.time.clone(),
            value: metric.value_of(record).clone(),
        })
        .collect()
}

/// Extract a series for each requested metric, keyed by metric
pub fn extract_metrics(
    records: &[TelemetryRecord],
    metrics: &[Metric],
) -> BTreeMap<Metric, MetricSeries> {
    metrics
        .iter()
        .map(|&metric| (metric, extract_series(records, metric)))
        .collect()
}

/// Numeric samples of a series as `(index, value)`, skipping preformatted
/// strings and non-finite numbers. This is what a plotting backend consumes.
pub fn plottable_points(series: &[SeriesPoint]) -> Vec<(usize, f64)> {
    series
        .iter()
        .filter_map(|point| {
            point
                .value
                .as_f64()
                .filter(|v| v.is_finite())
                .map(|v| (point.index, v))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Satellites;

    fn record(time: f64, velocity: FieldValue, lat: FieldValue) -> TelemetryRecord {
        TelemetryRecord {
            time: FieldValue::Numeric(time),
            satellites: Satellites::default(),
            latitude: lat,
            longitude: FieldValue::Numeric(-1.5),
            velocity,
            heading: FieldValue::Numeric(270.0),
            height: FieldValue::from("102.40"),
        }
    }

    #[test]
    fn test_series_length_ignores_validity() {
        let records = vec![
            record(0.1, FieldValue::Numeric(10.0), FieldValue::Numeric(52.0)),
            record(0.2, FieldValue::Numeric(11.0), FieldValue::from("garbage")),
            record(0.3, FieldValue::Numeric(12.0), FieldValue::Numeric(0.0)),
        ];
        let series = extract_series(&records, Metric::Velocity);
        assert_eq!(series.len(), records.len());
        let indices: Vec<usize> = series.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(series[2].time, FieldValue::Numeric(0.3));
    }

    #[test]
    fn test_values_are_not_coerced() {
        let records = vec![record(0.0, FieldValue::from("12.5"), FieldValue::Numeric(1.0))];
        let series = extract_series(&records, Metric::Velocity);
        assert_eq!(series[0].value, FieldValue::from("12.5"));

        let heights = extract_series(&records, Metric::Height);
        assert_eq!(heights[0].value, FieldValue::from("102.40"));
    }

    #[test]
    fn test_plottable_points_skip_strings() {
        let records = vec![
            record(0.0, FieldValue::Numeric(5.0), FieldValue::Numeric(1.0)),
            record(0.1, FieldValue::from("n/a"), FieldValue::Numeric(1.0)),
            record(0.2, FieldValue::Numeric(f64::NAN), FieldValue::Numeric(1.0)),
            record(0.3, FieldValue::Numeric(7.0), FieldValue::Numeric(1.0)),
        ];
        let series = extract_series(&records, Metric::Velocity);
        assert_eq!(plottable_points(&series), vec![(0, 5.0), (3, 7.0)]);
    }

    #[test]
    fn test_extract_metrics_keys() {
        let records = vec![record(0.0, FieldValue::Numeric(5.0), FieldValue::Numeric(1.0))];
        let all = extract_metrics(&records, &Metric::ALL);
        assert_eq!(all.len(), 3);
        assert_eq!(all[&Metric::Heading][0].value, FieldValue::Numeric(270.0));
    }

    #[test]
    fn test_metric_from_str() {
        assert_eq!("Velocity".parse::<Metric>(), Ok(Metric::Velocity));
        assert_eq!("altitude".parse::<Metric>(), Ok(Metric::Height));
        assert!("rpm".parse::<Metric>().is_err());
    }
}
