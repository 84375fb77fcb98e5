use std::fs;
use std::path::{Path, PathBuf};

use super::DiscoveryError;
use crate::extract::ExtractError;
use crate::payload::{TagPayload, parse_payload};

/// Provider of raw tag payloads
///
/// Implementations own transport concerns (connections, timeouts, retries);
/// a call either returns a complete payload or an error.
pub trait TagSource {
    /// Fetch the current tag description payload.
    ///
    /// # Errors
    /// Returns `DiscoveryError` if the payload cannot be obtained or parsed.
    fn fetch(&self) -> Result<TagPayload, DiscoveryError>;

    /// Human-readable name of the source for logs
    #[must_use]
    fn describe(&self) -> String;
}

/// Payload already held in memory
impl TagSource for TagPayload {
    fn fetch(&self) -> Result<TagPayload, DiscoveryError> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        "in-memory payload".to_string()
    }
}

/// Payload exported to a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TagSource for JsonFileSource {
    fn fetch(&self) -> Result<TagPayload, DiscoveryError> {
        let text = fs::read_to_string(&self.path).map_err(|source| DiscoveryError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_payload(&text).map_err(|e| DiscoveryError::Extract(ExtractError::Json(e)))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
