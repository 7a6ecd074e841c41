//! Error types for loading wrapper configuration.

use thiserror::Error;

/// Errors from [`crate::ExtraOptions::from_json`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input was not a valid options object.
    #[error("invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),
}
