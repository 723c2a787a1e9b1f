//! Errors raised at the edges of the simulation
//!
//! The simulation itself never fails; these cover loading tuning files and
//! the asset loader contract.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to read or accept a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed tuning data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Reported by the asset loader when a model cannot be fetched or parsed.
///
/// The core only ever sees it as a `loadFailed` event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("asset `{0}` could not be fetched")]
    Fetch(String),
    #[error("asset `{0}` could not be parsed")]
    Parse(String),
}

impl LoadError {
    /// Name of the asset that failed
    pub fn asset(&self) -> &str {
        match self {
            LoadError::Fetch(asset) | LoadError::Parse(asset) => asset,
        }
    }
}
