use std::path::PathBuf;
use thiserror::Error;

// Only loading (and exporting) can fail. Every transformation stage of the
// pipeline is total and substitutes zero or null for dirty input instead.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Source not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Malformed source {}: {source}", path.display())]
    MalformedSource {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("CSV export error: {source}")]
    CsvExportError {
        #[from]
        source: csv::Error,
    },
}
