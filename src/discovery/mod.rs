//! Tag discovery
//!
//! Runs one discovery cycle: fetch a payload from a [`TagSource`], extract the
//! catalog and build the tree. A cycle either produces both or neither.

mod traits;

pub use traits::{JsonFileSource, TagSource};

use crate::catalog::TagCatalog;
use crate::extract::{ExtractError, extract};
use crate::tree::{TagTree, build_tree};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// Errors from a discovery cycle
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The payload could not be read
    #[error("Failed to read tag payload '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload was read but could not be turned into a catalog
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Catalog and tree produced by one discovery cycle
#[derive(Debug, Clone)]
pub struct Discovery {
    pub catalog: TagCatalog,
    pub tree: TagTree,
}

/// Run a discovery cycle against a tag source
///
/// # Errors
///
/// Returns `DiscoveryError` if the source fails or its payload is malformed;
/// no partial catalog is returned.
pub fn discover<S: TagSource + ?Sized>(source: &S) -> Result<Discovery, DiscoveryError> {
    let payload = source.fetch()?;
    let catalog = extract(&payload)?;
    let tree = build_tree(&catalog);
    info!(
        source = %source.describe(),
        tags = catalog.len(),
        nodes = tree.len(),
        "tag discovery complete"
    );
    Ok(Discovery { catalog, tree })
}
