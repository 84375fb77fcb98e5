//! Output formatting for CLI display
//!
//! Renders catalog entries, tree nodes and selections as lines of text.

use crate::catalog::TagMetadata;
use crate::tree::TreeNode;
use colored::Colorize;

/// Format a catalog entry for display
#[must_use]
pub fn catalog_entry(path: &str, metadata: &TagMetadata, quiet: bool) -> String {
    if quiet {
        return path.to_string();
    }
    let kind = if metadata.is_structure { " (structure)" } else { "" };
    format!("  {path}  {}{}{kind}", metadata.data_type, metadata.dimensions)
}

/// Format a tree node at the given depth (1 = top level)
///
/// Nodes carrying tag data are shown plainly; bare groups are dimmed.
#[must_use]
pub fn tree_node(node: &TreeNode, depth: usize, show_tooltip: bool) -> String {
    let indent = "    ".repeat(depth.saturating_sub(2));
    let branch = if depth > 1 { "└── " } else { "" };
    let label = if node.is_leaf() {
        node.label().normal()
    } else {
        node.label().dimmed()
    };

    match node.tooltip() {
        Some(tooltip) if show_tooltip => {
            format!("{indent}{branch}{label}  {}", tooltip.dimmed())
        }
        _ => format!("{indent}{branch}{label}"),
    }
}

/// Format an accumulated selection path
#[must_use]
pub fn selected_path(path: &str, quiet: bool) -> String {
    if quiet {
        path.to_string()
    } else {
        format!("  {} {path}", "✓".green())
    }
}
