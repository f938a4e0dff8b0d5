// crates/choromap-core/src/error.rs

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ChoroError>;

/// All the ways the pipeline can fail.
///
/// There is no recovery strategy: every variant propagates up to the caller
/// (usually the CLI main) and terminates the run with a message.
#[derive(Debug, Error)]
pub enum ChoroError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("GeoJSON parse error: {0}")]
    Geo(#[from] geojson::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "fetch")]
    #[error("HTTP fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A plot field name with no row in the format table.
    #[error("Unknown plot field: {0}")]
    UnknownField(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}
