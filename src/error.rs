use std::fmt;

/// Errors raised while taking a log in. The processing stages themselves
/// never fail.
#[derive(Debug)]
pub enum TelemetryError {
    /// I/O errors
    Io(std::io::Error),
    /// No input file was supplied
    NoFile,
    /// Input file does not carry the `.vbo` extension
    UnsupportedFile(String),
    /// The log decoder rejected the file contents
    InvalidLog(String),
    /// Malformed decoded-log JSON document
    #[cfg(feature = "json")]
    Json(serde_json::Error),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Io(err) => write!(f, "I/O error: {}", err),
            TelemetryError::NoFile => write!(f, "No file selected"),
            TelemetryError::UnsupportedFile(name) => {
                write!(f, "Please upload a .vbo file (got '{}')", name)
            }
            TelemetryError::InvalidLog(msg) => write!(f, "Invalid VBO file: {}", msg),
            #[cfg(feature = "json")]
            TelemetryError::Json(err) => write!(f, "Decoded log JSON error: {}", err),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::Io(err) => Some(err),
            #[cfg(feature = "json")]
            TelemetryError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TelemetryError {
    fn from(err: std::io::Error) -> Self {
        TelemetryError::Io(err)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for TelemetryError {
    fn from(err: serde_json::Error) -> Self {
        TelemetryError::Json(err)
    }
}
