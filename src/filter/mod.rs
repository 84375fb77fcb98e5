//! Tree filtering
//!
//! Decides which nodes of a [`TagTree`] stay visible for a [`FilterPattern`].
//! A node is visible if any of these holds:
//!
//! 1. its own label matches
//! 2. any descendant is visible
//! 3. its direct parent's label matches
//!
//! Rule 3 looks at the parent's label only, not at the parent's visibility,
//! so a matching structure surfaces its immediate members and nothing deeper.
//! Only labels are tested, never full paths.

pub mod error;
mod pattern;

pub use error::FilterError;
pub use pattern::{FilterMode, FilterPattern};

use crate::tree::{NodeId, TagTree};
use tracing::debug;

/// Check whether a single node is visible
///
/// Evaluates the rules directly and recursively. Use [`Visibility::compute`]
/// to evaluate a whole tree.
#[must_use]
pub fn is_visible(tree: &TagTree, id: NodeId, pattern: &FilterPattern) -> bool {
    let Some(node) = tree.get(id) else {
        return false;
    };
    if pattern.is_match(node.label()) {
        return true;
    }
    if node
        .children()
        .iter()
        .any(|child| is_visible(tree, *child, pattern))
    {
        return true;
    }
    node.parent()
        .is_some_and(|parent| pattern.is_match(tree.node(parent).label()))
}

/// Visibility flags for every node of a tree under one pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visibility {
    visible: Vec<bool>,
}

impl Visibility {
    /// Evaluate every node in one pass
    ///
    /// Each label is matched once. Nodes are visited from the highest id down,
    /// so children are settled before their parents.
    #[must_use]
    pub fn compute(tree: &TagTree, pattern: &FilterPattern) -> Self {
        let matches: Vec<bool> = tree
            .ids()
            .map(|id| pattern.is_match(tree.node(id).label()))
            .collect();
        let mut visible = vec![false; matches.len()];

        for id in tree.ids().rev() {
            let node = tree.node(id);
            visible[id.index()] = matches[id.index()]
                || node.children().iter().any(|c| visible[c.index()])
                || node.parent().is_some_and(|p| matches[p.index()]);
        }

        let result = Self { visible };
        debug!(
            pattern = pattern.text(),
            visible = result.visible_count(),
            total = tree.len(),
            "computed tree visibility"
        );
        result
    }

    #[must_use]
    pub fn is_visible(&self, id: NodeId) -> bool {
        self.visible.get(id.index()).copied().unwrap_or(false)
    }

    /// Number of visible nodes, root included
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// Visible nodes below the root in depth-first order
    #[must_use]
    pub fn visible_nodes(&self, tree: &TagTree) -> Vec<NodeId> {
        tree.depth_first()
            .filter(|id| self.is_visible(*id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Dimensions, TagCatalog, TagMetadata};
    use crate::testing::line_tree;
    use crate::tree::build_tree;

    fn visible_labels(tree: &TagTree, pattern: &FilterPattern) -> Vec<String> {
        Visibility::compute(tree, pattern)
            .visible_nodes(tree)
            .into_iter()
            .map(|id| tree.node(id).label().to_string())
            .collect()
    }

    #[test]
    fn test_empty_pattern_shows_everything() {
        let tree = line_tree();
        let pattern = FilterPattern::match_all();
        let visibility = Visibility::compute(&tree, &pattern);

        assert_eq!(visibility.visible_count(), tree.len());
        assert!(tree.ids().all(|id| is_visible(&tree, id, &pattern)));
    }

    #[test]
    fn test_self_match_pulls_in_ancestors() {
        let tree = line_tree();
        assert_eq!(
            visible_labels(&tree, &FilterPattern::fixed("temp")),
            vec!["Line1", "Zone[3]", "Temp"]
        );
    }

    #[test]
    fn test_parent_label_surfaces_direct_children_only() {
        let tree = line_tree();
        // "Motor" matches; its members show through rule 3, Line1 through rule 2
        assert_eq!(
            visible_labels(&tree, &FilterPattern::fixed("motor")),
            vec!["Line1", "Motor", "Speed", "Faults[8]"]
        );
        // "Line1" matches; only direct members surface, not Motor's members
        assert_eq!(
            visible_labels(&tree, &FilterPattern::fixed("line1")),
            vec!["Line1", "Motor", "Status", "Zone[3]"]
        );
    }

    #[test]
    fn test_matches_label_not_path() {
        let tree = line_tree();
        // "Line1.Motor" only appears in full paths
        assert!(visible_labels(&tree, &FilterPattern::fixed("Line1.Motor")).is_empty());
    }

    #[test]
    fn test_label_includes_dimensions() {
        let tree = line_tree();
        assert_eq!(
            visible_labels(&tree, &FilterPattern::fixed("[3,2]")),
            vec!["Grid[3,2]"]
        );
    }

    #[test]
    fn test_root_label_is_empty() {
        let tree = line_tree();
        assert!(!is_visible(&tree, TagTree::ROOT, &FilterPattern::fixed("x")));
        // A regex matching the empty root label surfaces every top-level node
        let pattern = FilterPattern::regex("^$").unwrap();
        assert!(is_visible(&tree, TagTree::ROOT, &pattern));
        assert_eq!(
            visible_labels(&tree, &pattern),
            vec!["Counter[5]", "Running", "Line1", "Grid[3,2]"]
        );
    }

    #[test]
    fn test_childless_group_hidden_without_match() {
        let catalog: TagCatalog = [("Solo", TagMetadata::atomic("DINT", Dimensions::SCALAR))]
            .into_iter()
            .collect();
        let tree = build_tree(&catalog);
        let solo = tree.find("Solo").unwrap();

        assert!(!is_visible(&tree, solo, &FilterPattern::fixed("other")));
        assert!(is_visible(&tree, solo, &FilterPattern::fixed("sol")));
    }

    #[test]
    fn test_visible_descendant_implies_visible_ancestors() {
        let tree = line_tree();
        for text in ["speed", "fault", "status", "z", "e", "counter", "nomatch"] {
            let visibility = Visibility::compute(&tree, &FilterPattern::fixed(text));
            for id in tree.depth_first() {
                if visibility.is_visible(id) {
                    let mut current = tree.node(id).parent();
                    while let Some(parent) = current {
                        if parent == TagTree::ROOT {
                            break;
                        }
                        assert!(visibility.is_visible(parent), "hidden ancestor for '{text}'");
                        current = tree.node(parent).parent();
                    }
                }
            }
        }
    }

    #[test]
    fn test_compute_agrees_with_recursive_rule() {
        let tree = line_tree();
        for text in ["line", "zone", "o", "[8]", "STRING", "nomatch"] {
            let pattern = FilterPattern::fixed(text);
            let visibility = Visibility::compute(&tree, &pattern);
            for id in tree.ids() {
                assert_eq!(
                    visibility.is_visible(id),
                    is_visible(&tree, id, &pattern),
                    "disagreement on '{}' for '{text}'",
                    tree.node(id).label()
                );
            }
        }
    }

    #[test]
    fn test_unknown_node_is_not_visible() {
        let tree = line_tree();
        let empty = build_tree(&TagCatalog::new());
        let last = tree.ids().last().unwrap();

        let visibility = Visibility::compute(&empty, &FilterPattern::match_all());
        assert!(!visibility.is_visible(last));
        assert!(!is_visible(&empty, last, &FilterPattern::match_all()));
    }
}
