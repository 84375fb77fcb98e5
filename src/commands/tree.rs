//! Tree command - print the tag tree, optionally filtered

use crate::{
    TagtreeError,
    filter::{FilterPattern, Visibility},
    output,
    tree::TagTree,
};
use std::path::Path;

type Result<T> = std::result::Result<T, TagtreeError>;

/// Execute the tree command
///
/// # Errors
/// Returns an error if the payload cannot be loaded or the pattern is invalid
pub fn execute(
    payload: &Path,
    pattern: &FilterPattern,
    show_tooltips: bool,
    quiet: bool,
) -> Result<()> {
    let discovery = super::load(payload)?;
    for line in render(&discovery.tree, pattern, show_tooltips, quiet) {
        println!("{line}");
    }
    Ok(())
}

/// Render the visible part of a tree as output lines
#[must_use]
pub fn render(
    tree: &TagTree,
    pattern: &FilterPattern,
    show_tooltips: bool,
    quiet: bool,
) -> Vec<String> {
    let visibility = Visibility::compute(tree, pattern);
    let visible = visibility.visible_nodes(tree);

    if visible.is_empty() {
        if !quiet {
            let message = if pattern.is_empty() {
                "No tags found in payload.".to_string()
            } else {
                format!("No tags match '{}'.", pattern.text())
            };
            return vec![message];
        }
        return Vec::new();
    }

    visible
        .into_iter()
        .map(|id| output::tree_node(tree.node(id), tree.depth(id), show_tooltips))
        .collect()
}
