//! Catalog command - print the flat tag catalog

use crate::{TagtreeError, catalog::TagCatalog, output};
use std::path::Path;

type Result<T> = std::result::Result<T, TagtreeError>;

/// Execute the catalog command
///
/// # Errors
/// Returns an error if the payload cannot be loaded or serialized
pub fn execute(payload: &Path, json: bool, quiet: bool) -> Result<()> {
    let discovery = super::load(payload)?;
    for line in render(&discovery.catalog, json, quiet)? {
        println!("{line}");
    }
    Ok(())
}

/// Render the catalog as output lines
///
/// # Errors
/// Returns `TagtreeError::SerializationError` if JSON rendering fails
pub fn render(catalog: &TagCatalog, json: bool, quiet: bool) -> Result<Vec<String>> {
    if json {
        return Ok(vec![serde_json::to_string_pretty(catalog)?]);
    }

    let mut lines = Vec::with_capacity(catalog.len() + 1);
    if catalog.is_empty() {
        if !quiet {
            lines.push("No tags found in payload.".to_string());
        }
        return Ok(lines);
    }
    if !quiet {
        lines.push(format!("Tags in payload ({}):", catalog.len()));
    }
    lines.extend(
        catalog
            .iter()
            .map(|(path, meta)| output::catalog_entry(path, meta, quiet)),
    );
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::line_catalog;

    #[test]
    fn test_render_quiet_lists_paths() {
        let lines = render(&line_catalog(), false, true).unwrap();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "Counter");
        assert_eq!(lines[9], "Grid");
    }

    #[test]
    fn test_render_with_header() {
        let lines = render(&line_catalog(), false, false).unwrap();
        assert_eq!(lines[0], "Tags in payload (10):");
        assert_eq!(lines[1], "  Counter  DINT[5]");
    }

    #[test]
    fn test_render_json_parses_back() {
        let lines = render(&line_catalog(), true, false).unwrap();
        let parsed: TagCatalog = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(parsed, line_catalog());
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(
            render(&TagCatalog::new(), false, false).unwrap(),
            vec!["No tags found in payload.".to_string()]
        );
        assert!(render(&TagCatalog::new(), false, true).unwrap().is_empty());
    }
}
