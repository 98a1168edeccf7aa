//! Adapter error model.

use thiserror::Error;

/// Failure of a single fetch-and-parse invocation.
///
/// Callers get one generic failure signal; no partial results are ever
/// returned on error.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Network failure or non-success upstream status.
    #[error("failed to fetch catalog export: {0}")]
    Fetch(String),

    /// Malformed envelope or invalid JSON inside it.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl From<reqwest::Error> for AdapterError {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(err.to_string())
    }
}

/// Failure to decode the wrapped-JSON table export.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Body shorter than the fixed prefix + suffix.
    #[error("response body shorter than the gviz envelope")]
    TruncatedEnvelope,

    /// The text inside the envelope is not valid JSON of the table shape.
    #[error("invalid JSON inside gviz envelope: {0}")]
    Json(#[from] serde_json::Error),
}
