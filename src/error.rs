//! Errors raised at the load/save boundary. The aggregation core never fails.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// An input file could not be read
    #[error("error reading {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input document is not a GeoJSON feature collection
    #[error("error parsing {what} collection: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: geojson::Error,
    },

    /// A point feature carries no usable `[x, y]` position
    #[error("point feature {index} is invalid: {reason}")]
    InvalidPoint { index: usize, reason: String },

    /// The enriched collection could not be encoded
    #[error("error producing geojson: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
