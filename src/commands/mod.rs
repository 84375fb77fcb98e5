//! Command implementations
//!
//! Each command is a module with an `execute` function that takes parsed CLI
//! args and runs one discovery cycle against the payload file. Rendering is
//! split from printing so the output can be checked in tests.

pub mod catalog;
pub mod select;
pub mod tree;

// Re-export execute functions for convenience
pub use catalog::execute as catalog;
pub use select::execute as select;
pub use tree::execute as tree;

use crate::TagtreeError;
use crate::config::TagtreeConfig;
use crate::discovery::{Discovery, JsonFileSource, discover};
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, TagtreeError>;

/// Pick the payload file from the command line, falling back to the config
///
/// # Errors
/// Returns `TagtreeError::InvalidInput` if neither names a payload.
pub fn resolve_payload(arg: Option<&Path>, config: &TagtreeConfig) -> Result<PathBuf> {
    arg.or(config.payload.as_deref())
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            TagtreeError::InvalidInput(
                "No payload given and no default payload configured".to_string(),
            )
        })
}

/// Run discovery against a JSON payload file
///
/// # Errors
/// Returns `TagtreeError::DiscoveryError` if the file cannot be read or extracted.
pub fn load(path: &Path) -> Result<Discovery> {
    Ok(discover(&JsonFileSource::new(path))?)
}
