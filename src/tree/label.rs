//! Display label and tooltip formatting for tree nodes

use crate::catalog::{Dimensions, TagMetadata};

/// Format the display label of a tag node
///
/// Scalars show their bare name; arrays append the strictly positive
/// dimensions in slot order.
///
/// # Examples
/// ```
/// # use tagtree::catalog::Dimensions;
/// # use tagtree::tree::format_label;
/// assert_eq!(format_label("Counter", Dimensions::SCALAR), "Counter");
/// assert_eq!(format_label("Counter", Dimensions::new(5, 0, 0)), "Counter[5]");
/// assert_eq!(format_label("Counter", Dimensions::new(3, 2, 0)), "Counter[3,2]");
/// ```
#[must_use]
pub fn format_label(name: &str, dimensions: Dimensions) -> String {
    format!("{name}{dimensions}")
}

/// Format the tooltip of a tag node: `path(DataType)`
#[must_use]
pub fn format_tooltip(path: &str, metadata: &TagMetadata) -> String {
    format!("{path}({})", metadata.data_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_skips_zero_slots() {
        assert_eq!(format_label("Grid", Dimensions::new(0, 2, 0)), "Grid[2]");
        assert_eq!(format_label("Cube", Dimensions::new(2, 0, 4)), "Cube[2,4]");
    }

    #[test]
    fn test_tooltip_format() {
        let meta = TagMetadata::atomic("BOOL", Dimensions::array(8));
        assert_eq!(format_tooltip("Line1.Motor.Faults", &meta), "Line1.Motor.Faults(BOOL)");
    }
}
