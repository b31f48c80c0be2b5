//! CLI binary for VBO Telemetry
//!
//! Loads decoded VBOX logs and prints the file information, data table,
//! route summary and chart series.

use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, Command};
use glob::glob;
use std::path::PathBuf;
use vbo_telemetry::{
    build_log_view_with_metrics, load_log_file, plottable_points, JsonLogDecoder, LogView, Metric,
    TelemetryError, TABLE_COLUMNS,
};

fn build_command() -> Command {
    Command::new("VBO Viewer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Display decoded VBOX GPS logs as a table, route summary and chart series.")
        .arg(
            Arg::new("files")
                .help("Decoded .vbo files to view (JSON header/records documents, supports globbing)")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug logging (RUST_LOG overrides)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("table")
                .long("table")
                .help("Print the formatted data table (default when no other view is chosen)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("csv")
                .long("csv")
                .help("Print the formatted data table as CSV")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("route")
                .long("route")
                .help("Print route start, end, centroid and point count")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("series")
                .long("series")
                .help("Print a chart series (velocity, heading, height); repeatable")
                .value_name("METRIC")
                .value_parser(value_parser!(Metric))
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the complete view as JSON")
                .action(ArgAction::SetTrue),
        )
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Expand glob patterns; plain paths are passed through untouched
fn expand_patterns(patterns: &[&String]) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    for pattern in patterns {
        if !(pattern.contains('*') || pattern.contains('?')) {
            paths.push(PathBuf::from(pattern.as_str()));
            continue;
        }

        match glob(pattern) {
            Ok(glob_iter) => match glob_iter.collect::<Result<Vec<_>, _>>() {
                Ok(matched) => {
                    log::debug!("Glob pattern '{pattern}' matched {} files", matched.len());
                    paths.extend(matched);
                }
                Err(e) => eprintln!("Error expanding glob pattern '{pattern}': {e}"),
            },
            Err(e) => eprintln!("Invalid glob pattern '{pattern}': {e}"),
        }
    }

    paths
}

fn print_summary(view: &LogView) {
    println!("File Information");
    for item in &view.summary {
        println!("  {:<18} {}", item.label, item.value);
    }

    if !view.comments.is_empty() {
        println!("Comments");
        for comment in &view.comments {
            println!("  {comment}");
        }
    }

    if !view.channel_units.is_empty() {
        println!("Channel Units");
        for (name, unit) in &view.channel_units {
            println!("  {:<18} {}", name, unit);
        }
    }
}

fn print_table(view: &LogView) {
    let mut widths: Vec<usize> = TABLE_COLUMNS.iter().map(|c| c.chars().count()).collect();
    for row in &view.table {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = TABLE_COLUMNS
        .iter()
        .zip(&widths)
        .map(|(name, &w)| format!("{name:<w$}"))
        .collect();
    println!("{}", header.join("  "));

    for row in &view.table {
        let cells: Vec<String> = row
            .cells()
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:<w$}"))
            .collect();
        println!("{}", cells.join("  ").trim_end());
    }

    println!("Total Records: {}", view.total_records);
}

#[cfg(feature = "csv")]
fn print_csv(view: &LogView) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer.write_record(TABLE_COLUMNS)?;
    for row in &view.table {
        writer.write_record(row.cells())?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(not(feature = "csv"))]
fn print_csv(_view: &LogView) -> Result<()> {
    Err(anyhow::anyhow!("CSV output requires the 'csv' feature"))
}

fn print_route(view: &LogView) {
    if !view.has_valid_coordinates {
        println!("No valid coordinates");
        return;
    }

    let route = &view.route;
    println!("Route points: {}", route.point_count());
    println!(
        "Centroid: {:.6}, {:.6}",
        route.centroid.lat, route.centroid.lng
    );
    if let Some(start) = route.start {
        println!("Start:    {:.6}, {:.6}", start.lat, start.lng);
    }
    if let Some(end) = route.end {
        println!("End:      {:.6}, {:.6}", end.lat, end.lng);
    }
}

fn print_series(view: &LogView, metric: Metric) {
    let Some(series) = view.series.get(&metric) else {
        return;
    };

    println!("index,time,{metric}");
    for point in series {
        println!("{},{},{}", point.index, point.time, point.value);
    }

    let plotted = plottable_points(series).len();
    if plotted < series.len() {
        eprintln!(
            "Note: {} of {} {metric} values are not numeric and would not be plotted",
            series.len() - plotted,
            series.len()
        );
    }
}

fn main() -> Result<()> {
    let matches = build_command().get_matches();

    let debug = matches.get_flag("debug");
    let show_csv = matches.get_flag("csv");
    let show_route = matches.get_flag("route");
    let show_json = matches.get_flag("json");
    let metrics: Vec<Metric> = matches
        .get_many::<Metric>("series")
        .map(|values| values.copied().collect())
        .unwrap_or_default();
    let show_table =
        matches.get_flag("table") || !(show_csv || show_route || show_json || !metrics.is_empty());

    init_logging(debug);

    let file_patterns: Vec<&String> = matches
        .get_many::<String>("files")
        .map(|files| files.collect())
        .unwrap_or_default();

    let paths = expand_patterns(&file_patterns);
    if paths.is_empty() {
        eprintln!("Error: {}", TelemetryError::NoFile);
        eprintln!("Input patterns were: {file_patterns:?}");
        std::process::exit(1);
    }

    // Chart every metric for JSON output, otherwise only what was asked for
    let view_metrics: Vec<Metric> = if show_json {
        Metric::ALL.to_vec()
    } else {
        metrics.clone()
    };

    let mut processed_files = 0;

    for (index, path) in paths.iter().enumerate() {
        if index > 0 {
            println!();
        }

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown");

        let log = match load_log_file(path, &JsonLogDecoder) {
            Ok(log) => log,
            Err(e) => {
                eprintln!("Error processing {filename}: {e:#}");
                eprintln!("Continuing with next file...");
                continue;
            }
        };

        let view = build_log_view_with_metrics(&log, &view_metrics);
        processed_files += 1;

        if show_json {
            println!("{}", serde_json::to_string_pretty(&view)?);
            continue;
        }

        println!("Processing: {filename}");
        print_summary(&view);

        if show_table {
            print_table(&view);
        }
        if show_csv {
            print_csv(&view)?;
        }
        if show_route {
            print_route(&view);
        }
        for metric in &metrics {
            print_series(&view, *metric);
        }
    }

    if processed_files == 0 {
        eprintln!(
            "Error: No files were successfully processed out of {} files found.",
            paths.len()
        );
        eprintln!("Files must have a .vbo extension and contain a decoded log document.");
        eprintln!("Use --debug flag for more detailed error information.");
        std::process::exit(1);
    }

    Ok(())
}
