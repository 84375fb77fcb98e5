//! Selection collection
//!
//! Turns the nodes a user selected in the tree into full tag paths and merges
//! them into a [`SelectionAccumulator`] that outlives tree rebuilds.

use crate::tree::{NodeId, TagTree};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Full paths of the selected nodes, in the order given
///
/// Nodes without tag data (bare groups, or ids foreign to `tree`) are skipped.
#[must_use]
pub fn collect(tree: &TagTree, selected: &[NodeId]) -> Vec<String> {
    selected
        .iter()
        .filter_map(|id| {
            let path = tree.get(*id).and_then(|node| node.path());
            if path.is_none() {
                debug!(node = id.index(), "ignoring selected node without tag data");
            }
            path
        })
        .map(str::to_string)
        .collect()
}

/// Ordered, deduplicated set of selected tag paths
///
/// Grows only through [`accumulate`](Self::accumulate); the owner decides when
/// to [`clear`](Self::clear) it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionAccumulator {
    paths: IndexSet<String>,
}

impl SelectionAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append paths not already present, keeping first-seen order
    ///
    /// Returns how many paths were added.
    pub fn accumulate<I, S>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.paths.len();
        self.paths.extend(paths.into_iter().map(Into::into));
        self.paths.len() - before
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.paths.clear();
    }
}

/// Merge `paths` into `accumulator`, returning how many were new
pub fn accumulate<I, S>(paths: I, accumulator: &mut SelectionAccumulator) -> usize
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    accumulator.accumulate(paths)
}
