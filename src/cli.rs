//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for tagtree using the `clap` crate.
//!
//! # Commands
//!
//! - **catalog**: Print the flat tag catalog extracted from a payload
//! - **tree**: Print the tag tree, optionally filtered
//! - **select**: Collect tag paths and print the accumulated selection
//! - **config**: Print the effective configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Extract, browse and filter controller tag catalogs
#[derive(Parser, Debug)]
#[command(name = "tagtree", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Read configuration from this file instead of the default location
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the flat tag catalog
    #[command(visible_alias = "c")]
    Catalog {
        /// JSON payload exported from the controller
        #[arg(value_name = "PAYLOAD")]
        payload: Option<PathBuf>,

        /// Print the catalog as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Print the tag tree
    #[command(visible_alias = "t")]
    Tree {
        /// JSON payload exported from the controller
        #[arg(value_name = "PAYLOAD")]
        payload: Option<PathBuf>,

        /// Only show nodes visible under this pattern
        #[arg(short = 'f', long = "filter", value_name = "PATTERN")]
        filter: Option<String>,

        /// Interpret the filter as a regular expression
        #[arg(short = 'r', long = "regex")]
        regex: bool,

        /// Show `path(DataType)` next to each tag
        #[arg(long = "tooltips")]
        tooltips: bool,
    },

    /// Collect tag paths into a deduplicated selection
    #[command(visible_alias = "s")]
    Select {
        /// JSON payload exported from the controller
        #[arg(short = 'p', long = "payload", value_name = "PAYLOAD")]
        payload: Option<PathBuf>,

        /// Dotted tag paths to select
        #[arg(value_name = "PATH", required = true, num_args = 1..)]
        paths: Vec<String>,
    },

    /// Print the effective configuration
    Config,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tree_with_filter() {
        let args = ["tagtree", "tree", "tags.json", "-f", "motor", "--regex"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Tree { payload, filter, regex, tooltips } => {
                assert_eq!(payload, Some(PathBuf::from("tags.json")));
                assert_eq!(filter.as_deref(), Some("motor"));
                assert!(regex);
                assert!(!tooltips);
            }
            _ => panic!("Expected Tree command"),
        }
    }

    #[test]
    fn test_parse_select_paths() {
        let args = ["tagtree", "-q", "s", "-p", "tags.json", "A.B", "C"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert!(cli.quiet);
        match cli.command {
            Commands::Select { payload, paths } => {
                assert_eq!(payload, Some(PathBuf::from("tags.json")));
                assert_eq!(paths, vec!["A.B".to_string(), "C".to_string()]);
            }
            _ => panic!("Expected Select command"),
        }
    }

    #[test]
    fn test_select_requires_paths() {
        assert!(Cli::try_parse_from(["tagtree", "select"]).is_err());
    }

    #[test]
    fn test_catalog_payload_optional() {
        let cli = Cli::try_parse_from(["tagtree", "catalog", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Catalog { payload: None, json: true }));
    }
}
