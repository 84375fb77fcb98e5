//! Error types for tree filtering

use thiserror::Error;

/// Errors produced while building a filter pattern
#[derive(Debug, Error)]
pub enum FilterError {
    /// Regex failed to compile
    #[error("Invalid regex pattern '{pattern}': {reason}")]
    InvalidRegex { pattern: String, reason: String },
}

impl FilterError {
    #[must_use]
    pub fn regex_compile(pattern: &str, reason: &str) -> Self {
        Self::InvalidRegex {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }
}
