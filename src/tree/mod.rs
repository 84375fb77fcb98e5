//! Tag tree construction
//!
//! [`build_tree`] turns a flat [`TagCatalog`] into a rooted, ordered tree by
//! splitting each dotted path into segments:
//!
//! ```text
//! Line1            (LineType)     Line1
//! Line1.Motor      (MotorType)    └── Motor
//! Line1.Motor.Speed (REAL)            └── Speed
//! ```
//!
//! Nodes live in an arena owned by [`TagTree`] and refer to each other by
//! [`NodeId`]. A node's parent link is an index, used only for upward lookups
//! during filtering. Every node is pushed after its parent, so a child always
//! has a larger id than its parent.
//!
//! A node whose path is a catalog key carries that tag's [`TagEntry`], set
//! together with its label when the node is created. Structure tags therefore
//! carry an entry and own member children at the same time. Nodes for prefixes
//! that are not catalog keys carry no entry.

mod label;

pub use label::{format_label, format_tooltip};

use crate::catalog::{PATH_DELIMITER, TagCatalog, TagMetadata};
use std::collections::HashMap;
use tracing::debug;

/// Handle to a node inside a [`TagTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the tree's arena
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Tag data attached to a node built from a catalog path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    /// Full dotted path the node was built from
    pub path: String,
    pub metadata: TagMetadata,
    /// `path(DataType)`
    pub tooltip: String,
}

/// A single node of the tag tree
#[derive(Debug, Clone)]
pub struct TreeNode {
    name: String,
    label: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    entry: Option<TagEntry>,
}

impl TreeNode {
    /// Path segment this node represents
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display label, including array dimensions for tag nodes
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in catalog order
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[must_use]
    pub const fn entry(&self) -> Option<&TagEntry> {
        self.entry.as_ref()
    }

    /// Full dotted path, for nodes carrying tag data
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.entry.as_ref().map(|e| e.path.as_str())
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&str> {
        self.entry.as_ref().map(|e| e.tooltip.as_str())
    }

    /// Whether the node carries tag metadata (and can be selected)
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.entry.is_some()
    }

    /// Whether the node groups other nodes, or is a bare path prefix
    #[must_use]
    pub fn is_group(&self) -> bool {
        !self.children.is_empty() || self.entry.is_none()
    }
}

/// Rooted, ordered tree of tag nodes
///
/// The root is a group node with an empty name. Trees are built once per
/// discovery and replaced wholesale on the next one.
#[derive(Debug, Clone)]
pub struct TagTree {
    nodes: Vec<TreeNode>,
    by_path: HashMap<String, NodeId>,
}

impl TagTree {
    /// Id of the root node
    pub const ROOT: NodeId = NodeId(0);

    /// Tree holding only the root node
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![TreeNode {
                name: String::new(),
                label: String::new(),
                parent: None,
                children: Vec::new(),
                entry: None,
            }],
            by_path: HashMap::new(),
        }
    }

    /// Root node
    #[must_use]
    pub fn root(&self) -> &TreeNode {
        &self.nodes[Self::ROOT.0]
    }

    /// Look up a node
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    /// Look up a node by id
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    /// Resolve a dotted path (full or prefix) to its node
    #[must_use]
    pub fn find(&self, path: &str) -> Option<NodeId> {
        self.by_path.get(path).copied()
    }

    /// Number of nodes, root included
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds nothing but the root
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// All node ids in arena order (parents before children)
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = NodeId> + ExactSizeIterator {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Depth of a node below the root (root is 0)
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.get(id).and_then(TreeNode::parent);
        while let Some(parent) = current {
            depth += 1;
            current = self.nodes[parent.0].parent;
        }
        depth
    }

    /// Pre-order walk below the root, in catalog order
    #[must_use]
    pub fn depth_first(&self) -> DepthFirst<'_> {
        let mut stack: Vec<NodeId> = self.root().children.clone();
        stack.reverse();
        DepthFirst { tree: self, stack }
    }

    /// Nodes carrying tag data, depth-first
    pub fn leaves(&self) -> impl Iterator<Item = (&str, &TagMetadata)> {
        self.depth_first()
            .filter_map(|id| self.nodes[id.0].entry.as_ref())
            .map(|entry| (entry.path.as_str(), &entry.metadata))
    }

    fn push(
        &mut self,
        parent: NodeId,
        name: &str,
        prefix: &str,
        metadata: Option<&TagMetadata>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        let (label, entry) = match metadata {
            Some(metadata) => (
                format_label(name, metadata.dimensions),
                Some(TagEntry {
                    path: prefix.to_string(),
                    metadata: metadata.clone(),
                    tooltip: format_tooltip(prefix, metadata),
                }),
            ),
            None => (name.to_string(), None),
        };
        self.nodes.push(TreeNode {
            name: name.to_string(),
            label,
            parent: Some(parent),
            children: Vec::new(),
            entry,
        });
        self.nodes[parent.0].children.push(id);
        self.by_path.insert(prefix.to_string(), id);
        id
    }
}

impl Default for TagTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-order iterator over a [`TagTree`], excluding the root
pub struct DepthFirst<'a> {
    tree: &'a TagTree,
    stack: Vec<NodeId>,
}

impl Iterator for DepthFirst<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.nodes[id.0].children.iter().rev().copied());
        Some(id)
    }
}

/// Build a tag tree from a catalog
///
/// Paths are processed in catalog order and each shared prefix is materialized
/// once. No sorting is done at any level.
#[must_use]
pub fn build_tree(catalog: &TagCatalog) -> TagTree {
    let mut tree = TagTree::new();

    for path in catalog.paths() {
        let mut parent = TagTree::ROOT;
        let mut prefix_len = 0;

        for (i, segment) in path.split(PATH_DELIMITER).enumerate() {
            prefix_len += segment.len() + usize::from(i > 0);
            let prefix = &path[..prefix_len];

            // A prefix that is itself a tag gets its entry and label on creation
            parent = match tree.find(prefix) {
                Some(id) => id,
                None => tree.push(parent, segment, prefix, catalog.get(prefix)),
            };
        }
    }

    debug!(nodes = tree.len(), tags = catalog.len(), "built tag tree");
    tree
}
