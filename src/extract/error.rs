//! Error types for tag metadata extraction

use thiserror::Error;

/// Errors raised while turning a raw payload into a catalog
///
/// Extraction is all-or-nothing: when any of these is returned no catalog
/// is produced.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A descriptor is missing a required field or has an unexpected shape
    #[error("Malformed payload at '{path}': {reason}")]
    MalformedPayload { path: String, reason: String },

    /// The payload text does not match the tag description schema
    #[error("Malformed payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExtractError {
    #[must_use]
    pub fn malformed(path: &str, reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
