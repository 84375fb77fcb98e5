//! Flat tag catalog
//!
//! The extractor turns a raw controller payload into a [`TagCatalog`]: an ordered
//! mapping from dotted tag path (e.g. `Recipe.Name`) to the [`TagMetadata`] the
//! controller reported for it. Insertion order is preserved and becomes the
//! order of nodes in the tree built from the catalog.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between a structure and its members in a dotted path
pub const PATH_DELIMITER: char = '.';

/// Array shape of a tag
///
/// Three slots in declaration order. A `0` in a slot means the tag has no array
/// dimension there, so `[0, 0, 0]` is a scalar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dimensions(pub [u32; 3]);

impl Dimensions {
    /// Shape of a scalar tag
    pub const SCALAR: Self = Self([0, 0, 0]);

    #[must_use]
    pub const fn new(first: u32, second: u32, third: u32) -> Self {
        Self([first, second, third])
    }

    /// One-dimensional shape, as reported for structure members
    #[must_use]
    pub const fn array(len: u32) -> Self {
        Self([len, 0, 0])
    }

    /// Build a shape from a reported list, padding missing slots with `0`
    ///
    /// Returns `None` if more than three dimensions are given.
    ///
    /// # Examples
    /// ```
    /// # use tagtree::catalog::Dimensions;
    /// assert_eq!(Dimensions::from_slice(&[4]), Some(Dimensions::new(4, 0, 0)));
    /// assert_eq!(Dimensions::from_slice(&[]), Some(Dimensions::SCALAR));
    /// assert_eq!(Dimensions::from_slice(&[1, 2, 3, 4]), None);
    /// ```
    #[must_use]
    pub fn from_slice(dims: &[u32]) -> Option<Self> {
        if dims.len() > 3 {
            return None;
        }
        let mut slots = [0; 3];
        slots[..dims.len()].copy_from_slice(dims);
        Some(Self(slots))
    }

    #[must_use]
    pub fn is_scalar(&self) -> bool {
        *self == Self::SCALAR
    }

    /// Strictly positive slots, in slot order
    pub fn active(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied().filter(|d| *d > 0)
    }
}

/// Writes the bracketed shape (`[3,2]`), or nothing for a scalar
impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_scalar() {
            return Ok(());
        }
        let parts: Vec<String> = self.active().map(|d| d.to_string()).collect();
        write!(f, "[{}]", parts.join(","))
    }
}

/// Metadata reported for one fully-qualified tag path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagMetadata {
    /// Primitive type name, or the structure's type name for structured tags
    pub data_type: String,
    /// Array shape
    pub dimensions: Dimensions,
    /// True only for composite (non-string) types that own member tags
    pub is_structure: bool,
}

impl TagMetadata {
    /// Metadata for a scalar-like tag (primitives and strings)
    #[must_use]
    pub fn atomic(data_type: impl Into<String>, dimensions: Dimensions) -> Self {
        Self {
            data_type: data_type.into(),
            dimensions,
            is_structure: false,
        }
    }

    /// Metadata for a structure that owns member tags
    #[must_use]
    pub fn structure(type_name: impl Into<String>, dimensions: Dimensions) -> Self {
        Self {
            data_type: type_name.into(),
            dimensions,
            is_structure: true,
        }
    }
}

/// Ordered mapping from dotted tag path to [`TagMetadata`]
///
/// Keys are unique. Re-inserting a path replaces its metadata but keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagCatalog {
    entries: IndexMap<String, TagMetadata>,
}

impl TagCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert metadata for a path, returning the previous metadata if any
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        metadata: TagMetadata,
    ) -> Option<TagMetadata> {
        self.entries.insert(path.into(), metadata)
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&TagMetadata> {
        self.entries.get(path)
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagMetadata)> {
        self.entries.iter().map(|(path, meta)| (path.as_str(), meta))
    }

    /// Paths in insertion order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(S, TagMetadata)> for TagCatalog {
    fn from_iter<I: IntoIterator<Item = (S, TagMetadata)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(p, m)| (p.into(), m)).collect(),
        }
    }
}
