//! Text formatting for the table and file-information views
//!
//! Numeric fields get a fixed precision per column. Preformatted strings came
//! from the decoder already laid out and are shown verbatim.

use crate::types::{FieldValue, LogHeader, Satellites, TelemetryRecord};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Table header labels, in display order
pub const TABLE_COLUMNS: [&str; 7] = [
    "Time",
    "Satellites",
    "Latitude",
    "Longitude",
    "Velocity (km/h)",
    "Heading",
    "Height (m)",
];

/// Fields with a numeric formatting rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayField {
    Latitude,
    Longitude,
    Velocity,
    Heading,
    Height,
}

impl DisplayField {
    /// Decimal places used when the field is numeric
    pub fn precision(&self) -> usize {
        match self {
            DisplayField::Latitude | DisplayField::Longitude => 6,
            DisplayField::Velocity | DisplayField::Heading | DisplayField::Height => 2,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            DisplayField::Heading => "°",
            _ => "",
        }
    }
}

/// Format one measurement for the table
pub fn format_field(field: DisplayField, value: &FieldValue) -> String {
    match value {
        FieldValue::Numeric(number) => {
            format!("{}{}", to_fixed(*number, field.precision()), field.suffix())
        }
        FieldValue::Preformatted(text) => text.clone(),
    }
}

/// Fixed-point text with exact halfway cases rounded away from zero.
///
/// `{:.N}` resolves an exact tie to the even digit, so 12.125 would print as
/// 12.12. Values that are not exact ties keep the standard formatting, which
/// already rounds the exact binary value correctly (1.005 stays 1.00).
pub fn to_fixed(value: f64, precision: usize) -> String {
    if is_rounding_tie(value, precision) {
        // one ulp further from zero is past the tie and short of the next digit
        let nudged = f64::from_bits(value.to_bits() + 1);
        return format!("{:.*}", precision, nudged);
    }
    format!("{:.*}", precision, value)
}

/// Whether `value` lies exactly halfway between two `precision`-digit decimals.
///
/// A tie has the form `j / 2^(precision + 1)` with odd `j`, and scaling by a
/// power of two is exact.
fn is_rounding_tie(value: f64, precision: usize) -> bool {
    let Ok(exponent) = i32::try_from(precision + 1) else {
        return false;
    };
    let scaled = value.abs() * 2f64.powi(exponent);
    scaled.is_finite() && scaled.fract() == 0.0 && scaled % 2.0 == 1.0
}

/// Satellite count with a `(DGPS)` marker when differential correction is active
pub fn format_satellites(satellites: &Satellites) -> String {
    if satellites.has_dgps {
        format!("{} (DGPS)", satellites.count)
    } else {
        satellites.count.to_string()
    }
}

/// A fully formatted table row
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DisplayRow {
    pub time: String,
    pub satellites: String,
    pub latitude: String,
    pub longitude: String,
    pub velocity: String,
    pub heading: String,
    pub height: String,
}

impl DisplayRow {
    /// Cells in [`TABLE_COLUMNS`] order
    pub fn cells(&self) -> [&str; 7] {
        [
            self.time.as_str(),
            self.satellites.as_str(),
            self.latitude.as_str(),
            self.longitude.as_str(),
            self.velocity.as_str(),
            self.heading.as_str(),
            self.height.as_str(),
        ]
    }
}

pub fn format_record(record: &TelemetryRecord) -> DisplayRow {
    DisplayRow {
        time: record.time.to_string(),
        satellites: format_satellites(&record.satellites),
        latitude: format_field(DisplayField::Latitude, &record.latitude),
        longitude: format_field(DisplayField::Longitude, &record.longitude),
        velocity: format_field(DisplayField::Velocity, &record.velocity),
        heading: format_field(DisplayField::Heading, &record.heading),
        height: format_field(DisplayField::Height, &record.height),
    }
}

pub fn format_table(records: &[TelemetryRecord]) -> Vec<DisplayRow> {
    records.iter().map(format_record).collect()
}

/// Labelled value for the file-information panel
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SummaryItem {
    pub label: &'static str,
    pub value: String,
}

impl SummaryItem {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// File-information entries; optional metadata is left out when blank
pub fn header_summary(header: &LogHeader) -> Vec<SummaryItem> {
    let info = &header.vbox_info;
    let mut items = vec![SummaryItem::new("Creation Date", header.creation_date.as_str())];

    if !info.version.is_empty() {
        items.push(SummaryItem::new("VBOX Version", info.version.as_str()));
    }
    if !info.gps_type.is_empty() {
        items.push(SummaryItem::new("GPS Type", info.gps_type.as_str()));
    }
    if !info.serial_number.is_empty() {
        items.push(SummaryItem::new("Serial Number", info.serial_number.as_str()));
    }
    if info.log_rate > 0 {
        items.push(SummaryItem::new("Log Rate", format!("{} Hz", info.log_rate)));
    }
    if !info.software_version.is_empty() {
        items.push(SummaryItem::new(
            "Software Version",
            info.software_version.as_str(),
        ));
    }

    items
}

/// `(column name, unit)` pairs, empty when the header carries no units
pub fn channel_unit_rows(header: &LogHeader) -> Vec<(String, String)> {
    let units = match &header.channel_units {
        Some(units) if !units.is_empty() => units,
        _ => return Vec::new(),
    };

    header
        .column_names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let unit = units
                .get(i)
                .filter(|u| !u.is_empty())
                .cloned()
                .unwrap_or_else(|| "-".to_string());
            (name.clone(), unit)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VboxInfo;

    #[test]
    fn test_velocity_two_decimals() {
        assert_eq!(
            format_field(DisplayField::Velocity, &FieldValue::Numeric(12.3456)),
            "12.35"
        );
    }

    #[test]
    fn test_exact_ties_round_away_from_zero() {
        assert_eq!(
            format_field(DisplayField::Velocity, &FieldValue::Numeric(12.125)),
            "12.13"
        );
        assert_eq!(
            format_field(DisplayField::Heading, &FieldValue::Numeric(0.125)),
            "0.13°"
        );
        assert_eq!(
            format_field(DisplayField::Latitude, &FieldValue::Numeric(0.0078125)),
            "0.007813"
        );
        assert_eq!(
            format_field(DisplayField::Height, &FieldValue::Numeric(-12.125)),
            "-12.13"
        );
    }

    #[test]
    fn test_near_ties_follow_the_stored_value() {
        // 1.005 is stored just below the halfway point
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(2.5, 2), "2.50");
        assert_eq!(to_fixed(0.0, 2), "0.00");
        assert_eq!(to_fixed(1e300, 2), format!("{:.2}", 1e300));
    }

    #[test]
    fn test_heading_gets_degree_sign() {
        assert_eq!(
            format_field(DisplayField::Heading, &FieldValue::Numeric(90.0)),
            "90.00°"
        );
    }

    #[test]
    fn test_coordinates_six_decimals() {
        assert_eq!(
            format_field(DisplayField::Latitude, &FieldValue::Numeric(51.4779)),
            "51.477900"
        );
        assert_eq!(
            format_field(DisplayField::Longitude, &FieldValue::Numeric(-0.0014)),
            "-0.001400"
        );
    }

    #[test]
    fn test_strings_pass_through() {
        let dms = FieldValue::from("31°19'5.9838\"N");
        assert_eq!(format_field(DisplayField::Latitude, &dms), "31°19'5.9838\"N");
        let heading = FieldValue::from("090.00");
        assert_eq!(format_field(DisplayField::Heading, &heading), "090.00");
    }

    #[test]
    fn test_satellites() {
        let plain = Satellites {
            count: 7,
            has_dgps: false,
        };
        let dgps = Satellites {
            count: 11,
            has_dgps: true,
        };
        assert_eq!(format_satellites(&plain), "7");
        assert_eq!(format_satellites(&dgps), "11 (DGPS)");
    }

    #[test]
    fn test_format_record() {
        let record = TelemetryRecord {
            time: FieldValue::from("101530.20"),
            satellites: Satellites {
                count: 9,
                has_dgps: true,
            },
            latitude: FieldValue::Numeric(52.0),
            longitude: FieldValue::from("1°2'3.0000\"W"),
            velocity: FieldValue::Numeric(88.004),
            heading: FieldValue::Numeric(359.999),
            height: FieldValue::Numeric(-3.1),
        };
        let row = format_record(&record);
        assert_eq!(
            row.cells(),
            [
                "101530.20",
                "9 (DGPS)",
                "52.000000",
                "1°2'3.0000\"W",
                "88.00",
                "360.00°",
                "-3.10"
            ]
        );
    }

    #[test]
    fn test_header_summary_skips_blank_fields() {
        let header = LogHeader {
            creation_date: "2024-03-02T10:15:00.000Z".to_string(),
            vbox_info: VboxInfo {
                version: "VBOX3i".to_string(),
                log_rate: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let labels: Vec<&str> = header_summary(&header).iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Creation Date", "VBOX Version"]);
    }

    #[test]
    fn test_header_summary_log_rate() {
        let header = LogHeader {
            vbox_info: VboxInfo {
                log_rate: 20,
                ..Default::default()
            },
            ..Default::default()
        };
        let summary = header_summary(&header);
        assert_eq!(summary[1], SummaryItem::new("Log Rate", "20 Hz"));
    }

    #[test]
    fn test_channel_units() {
        let mut header = LogHeader {
            column_names: vec!["sats".into(), "time".into(), "velocity".into()],
            channel_units: None,
            ..Default::default()
        };
        assert!(channel_unit_rows(&header).is_empty());

        header.channel_units = Some(vec!["".into(), "s".into()]);
        assert_eq!(
            channel_unit_rows(&header),
            vec![
                ("sats".to_string(), "-".to_string()),
                ("time".to_string(), "s".to_string()),
                ("velocity".to_string(), "-".to_string()),
            ]
        );
    }
}
