//! Select command - collect tag paths into the selection accumulator

use crate::{
    TagtreeError, output,
    selection::{SelectionAccumulator, collect},
    tree::{NodeId, TagTree},
};
use std::path::Path;
use tracing::warn;

type Result<T> = std::result::Result<T, TagtreeError>;

/// Execute the select command
///
/// # Errors
/// Returns an error if the payload cannot be loaded
pub fn execute(payload: &Path, paths: &[String], quiet: bool) -> Result<()> {
    let discovery = super::load(payload)?;
    let mut accumulator = SelectionAccumulator::new();
    let added = select_paths(&discovery.tree, paths, &mut accumulator);

    if !quiet {
        println!("Selected {added} tag(s):");
    }
    for path in accumulator.iter() {
        println!("{}", output::selected_path(path, quiet));
    }
    Ok(())
}

/// Resolve dotted paths to nodes and merge them into `accumulator`
///
/// Paths that do not name a tag in the tree, including bare prefixes that only
/// group other tags, are skipped with a warning. Returns how many new paths
/// were added.
pub fn select_paths(
    tree: &TagTree,
    paths: &[String],
    accumulator: &mut SelectionAccumulator,
) -> usize {
    let nodes: Vec<NodeId> = paths
        .iter()
        .filter_map(|path| match tree.find(path) {
            Some(id) if tree.node(id).entry().is_some() => Some(id),
            Some(_) => {
                warn!(path = %path, "path is a group without tag data");
                None
            }
            None => {
                warn!(path = %path, "no such tag in payload");
                None
            }
        })
        .collect();

    accumulator.accumulate(collect(tree, &nodes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Dimensions, TagCatalog, TagMetadata};
    use crate::testing::line_tree;
    use crate::tree::build_tree;

    #[test]
    fn test_select_paths_skips_unknown_and_duplicates() {
        let tree = line_tree();
        let mut acc = SelectionAccumulator::new();
        let paths = vec![
            "Line1.Motor.Speed".to_string(),
            "Line1.Missing".to_string(),
            "Counter".to_string(),
            "Line1.Motor.Speed".to_string(),
        ];

        assert_eq!(select_paths(&tree, &paths, &mut acc), 2);
        let selected: Vec<&str> = acc.iter().collect();
        assert_eq!(selected, vec!["Line1.Motor.Speed", "Counter"]);

        assert_eq!(select_paths(&tree, &paths, &mut acc), 0);
    }

    #[test]
    fn test_select_paths_skips_prefix_without_tag_data() {
        let catalog: TagCatalog = [
            ("Area.Cell", TagMetadata::atomic("DINT", Dimensions::SCALAR)),
            ("Area.Robot", TagMetadata::atomic("BOOL", Dimensions::SCALAR)),
        ]
        .into_iter()
        .collect();
        let tree = build_tree(&catalog);
        let mut acc = SelectionAccumulator::new();

        assert!(tree.find("Area").is_some());
        assert_eq!(select_paths(&tree, &["Area".to_string()], &mut acc), 0);
        assert!(acc.is_empty());

        let paths = vec!["Area".to_string(), "Area.Robot".to_string()];
        assert_eq!(select_paths(&tree, &paths, &mut acc), 1);
        assert_eq!(acc.iter().collect::<Vec<_>>(), vec!["Area.Robot"]);
    }
}
