use crate::error::TelemetryError;
use crate::parser::decoder::LogDecoder;
use crate::types::ParsedLog;
use crate::Result;
use anyhow::Context;
use log::debug;
use std::path::Path;

/// File extension accepted for intake
pub const LOG_EXTENSION: &str = "vbo";

/// Check for a `.vbo` extension (ASCII case-insensitive)
pub fn has_log_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(LOG_EXTENSION))
        .unwrap_or(false)
}

/// Decode in-memory log text, wrapping decoder failures as
/// [`TelemetryError::InvalidLog`]
pub fn load_log_text<D: LogDecoder + ?Sized>(text: &str, decoder: &D) -> Result<ParsedLog> {
    let log = decoder
        .decode(text)
        .map_err(|e| TelemetryError::InvalidLog(format!("{:#}", e)))?;

    debug!(
        "Decoded log: {} records, {} columns",
        log.records.len(),
        log.header.column_names.len()
    );

    Ok(log)
}

/// Read and decode a single `.vbo` file
pub fn load_log_file<D: LogDecoder + ?Sized>(path: &Path, decoder: &D) -> Result<ParsedLog> {
    if !has_log_extension(path) {
        return Err(TelemetryError::UnsupportedFile(path.display().to_string()).into());
    }

    let bytes = std::fs::read(path)
        .map_err(TelemetryError::from)
        .with_context(|| format!("Failed to read log file: {:?}", path))?;
    let text = String::from_utf8_lossy(&bytes);

    load_log_text(&text, decoder)
}

/// Load the first of the selected files; only one log is viewed at a time
pub fn load_selected_file<P, D>(paths: &[P], decoder: &D) -> Result<ParsedLog>
where
    P: AsRef<Path>,
    D: LogDecoder + ?Sized,
{
    let path = paths.first().ok_or(TelemetryError::NoFile)?;
    load_log_file(path.as_ref(), decoder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_extension_check_is_case_insensitive() {
        assert!(has_log_extension(Path::new("session.vbo")));
        assert!(has_log_extension(Path::new("SESSION.VBO")));
        assert!(!has_log_extension(Path::new("session.csv")));
        assert!(!has_log_extension(Path::new("vbo")));
    }

    #[test]
    fn test_decoder_error_is_wrapped() {
        let failing = |_: &str| -> Result<ParsedLog> { Err(anyhow!("no [data] section")) };
        let err = load_log_text("junk", &failing).unwrap_err();
        let telemetry = err.downcast_ref::<TelemetryError>().expect("typed error");
        assert!(matches!(telemetry, TelemetryError::InvalidLog(_)));
        assert_eq!(err.to_string(), "Invalid VBO file: no [data] section");
    }

    #[test]
    fn test_wrong_extension_is_rejected_before_reading() {
        let decoder = |_: &str| -> Result<ParsedLog> { Ok(ParsedLog::default()) };
        let err = load_log_file(Path::new("does/not/exist.txt"), &decoder).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TelemetryError>(),
            Some(TelemetryError::UnsupportedFile(_))
        ));
    }

    #[test]
    fn test_no_file_selected() {
        let decoder = |_: &str| -> Result<ParsedLog> { Ok(ParsedLog::default()) };
        let paths: Vec<&Path> = Vec::new();
        let err = load_selected_file(&paths, &decoder).unwrap_err();
        assert_eq!(err.to_string(), "No file selected");
    }
}
