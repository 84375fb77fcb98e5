//! Tagtree - browse a controller's tag catalog as a tree
//!
//! This library turns the nested tag description a controller reports into a
//! flat catalog of dotted paths, builds a hierarchical tree from it, filters
//! that tree by label and collects selected tags for downstream use.
//!
//! ```
//! use tagtree::{extract::extract_json, filter::{FilterPattern, Visibility}, tree::build_tree};
//!
//! let json = r#"{"Counter": {"tag_type": "atomic", "data_type": "DINT", "dimensions": [5]}}"#;
//! let catalog = extract_json(json)?;
//! let tree = build_tree(&catalog);
//! let visibility = Visibility::compute(&tree, &FilterPattern::fixed("count"));
//! assert_eq!(visibility.visible_nodes(&tree).len(), 1);
//! # Ok::<(), tagtree::extract::ExtractError>(())
//! ```

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod extract;
pub mod filter;
pub mod output;
pub mod payload;
pub mod selection;
pub mod tree;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TagtreeError {
    /// Payload could not be turned into a catalog
    #[error("Extraction error: {0}")]
    ExtractError(#[from] extract::ExtractError),
    /// Tag discovery failed
    #[error("Discovery error: {0}")]
    DiscoveryError(#[from] discovery::DiscoveryError),
    /// Filter pattern could not be built
    #[error("Filter error: {0}")]
    FilterError(#[from] filter::FilterError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
