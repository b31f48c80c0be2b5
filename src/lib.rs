//! VBO Telemetry Library
//!
//! Normalization and aggregation for decoded VBOX GPS telemetry logs. Takes a
//! decoded log (header plus ordered records whose measurements may be numbers
//! or decoder-formatted strings) and derives the table, map and chart views.
//!
//! # Features
//!
//! - **`csv`** (default): CSV rendering of the table view in the CLI
//! - **`cli`** (default): Build the `vbo_view` command-line binary
//! - **`json`** (default): [`JsonLogDecoder`] and JSON output of [`LogView`]
//! - **`serde`**: Enable serialization/deserialization of types
//!
//! # Quick Start
//!
//! ```rust,no_run
//! # #[cfg(feature = "json")]
//! # fn main() -> vbo_telemetry::Result<()> {
//! use vbo_telemetry::{build_log_view, load_log_file, JsonLogDecoder};
//! use std::path::Path;
//!
//! let log = load_log_file(Path::new("session.vbo"), &JsonLogDecoder)?;
//! let view = build_log_view(&log);
//! if view.has_valid_coordinates {
//!     println!("{} route points", view.route.point_count());
//! } else {
//!     println!("No valid coordinates");
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "json"))]
//! # fn main() {}
//! ```
//!
//! # Public API
//!
//! ## Intake
//! - [`LogDecoder`] - Seam for the external log decoder
//! - [`load_log_file`] / [`load_log_text`] / [`load_selected_file`]
//!
//! ## Processing
//! - [`normalize_coordinate`] / [`parse_dms`] - Field normalizer
//! - [`is_valid_fix`] / [`classify_records`] - Validity filter
//! - [`aggregate_route`] - Route aggregator
//! - [`extract_series`] - Series extractor
//! - [`format_field`] / [`format_record`] - Display formatter
//! - [`build_log_view`] - All of the above in one pass

pub mod conversion;
pub mod display;
pub mod error;
pub mod filters;
pub mod parser;
pub mod pipeline;
pub mod route;
pub mod series;
pub mod types;

pub use conversion::*;
pub use display::*;
pub use error::*;
pub use filters::*;
pub use parser::*;
pub use pipeline::*;
pub use route::*;
pub use series::*;
pub use types::*;

// Re-export Result type for convenience
pub use anyhow::Result;
