//! Raw tag-source payload
//!
//! The controller describes its tags as a nested JSON object keyed by tag name.
//! Every entry declares its kind in `tag_type`:
//!
//! ```text
//! {
//!   "Counter": { "tag_type": "atomic", "data_type": "DINT", "dimensions": [5, 0, 0] },
//!   "Recipe":  { "tag_type": "struct",
//!                "data_type": { "name": "RecipeType",
//!                               "internal_tags": { "Name": { "tag_type": "struct",
//!                                                            "data_type": { "name": "STRING" },
//!                                                            "array": 0 } } } }
//! }
//! ```
//!
//! Top-level tags report a full `dimensions` list; structure members report a
//! single `array` length instead. Key order is preserved.

use indexmap::IndexMap;
use serde::Deserialize;

/// Top-level tag descriptions, keyed by tag name in reported order
pub type TagPayload = IndexMap<String, TagDescriptor>;

/// Member descriptions of a structure type, keyed by member name
pub type MemberMap = IndexMap<String, TagDescriptor>;

/// Description of one tag or structure member
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "tag_type", rename_all = "lowercase")]
pub enum TagDescriptor {
    /// Primitive-valued tag
    Atomic {
        /// Primitive type name (e.g. `DINT`, `BOOL`)
        data_type: String,
        #[serde(default)]
        dimensions: Option<Vec<u32>>,
        #[serde(default)]
        array: Option<u32>,
    },
    /// Tag composed of named members
    Struct {
        data_type: StructType,
        #[serde(default)]
        dimensions: Option<Vec<u32>>,
        #[serde(default)]
        array: Option<u32>,
    },
}

/// Type descriptor of a structured tag
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StructType {
    /// Structure type name
    pub name: String,
    /// Members of the structure; required unless the type is the string type
    #[serde(default)]
    pub internal_tags: Option<MemberMap>,
}

impl TagDescriptor {
    /// Atomic descriptor with no array shape
    #[must_use]
    pub fn atomic(data_type: impl Into<String>) -> Self {
        Self::Atomic {
            data_type: data_type.into(),
            dimensions: None,
            array: None,
        }
    }

    /// Structured descriptor owning the given members
    #[must_use]
    pub fn structure(type_name: impl Into<String>, members: MemberMap) -> Self {
        Self::Struct {
            data_type: StructType {
                name: type_name.into(),
                internal_tags: Some(members),
            },
            dimensions: None,
            array: None,
        }
    }

    /// Structured descriptor without members (strings, or malformed structures)
    #[must_use]
    pub fn opaque(type_name: impl Into<String>) -> Self {
        Self::Struct {
            data_type: StructType {
                name: type_name.into(),
                internal_tags: None,
            },
            dimensions: None,
            array: None,
        }
    }

    /// Set the top-level dimensions list
    #[must_use]
    pub fn with_dimensions(mut self, dims: &[u32]) -> Self {
        match &mut self {
            Self::Atomic { dimensions, .. } | Self::Struct { dimensions, .. } => {
                *dimensions = Some(dims.to_vec());
            }
        }
        self
    }

    /// Set the member array length
    #[must_use]
    pub fn with_array(mut self, len: u32) -> Self {
        match &mut self {
            Self::Atomic { array, .. } | Self::Struct { array, .. } => *array = Some(len),
        }
        self
    }

    /// Reported dimensions list, if any
    #[must_use]
    pub fn dimensions(&self) -> Option<&[u32]> {
        match self {
            Self::Atomic { dimensions, .. } | Self::Struct { dimensions, .. } => {
                dimensions.as_deref()
            }
        }
    }

    /// Reported member array length, `0` when absent
    #[must_use]
    pub fn array_len(&self) -> u32 {
        match self {
            Self::Atomic { array, .. } | Self::Struct { array, .. } => array.unwrap_or(0),
        }
    }
}

/// Parse a JSON payload
///
/// Input that is empty or whitespace-only is an empty payload, not an error.
///
/// # Errors
///
/// Returns `serde_json::Error` if the text is not valid JSON or does not match
/// the tag description schema.
pub fn parse_payload(json: &str) -> Result<TagPayload, serde_json::Error> {
    if json.trim().is_empty() {
        return Ok(TagPayload::new());
    }
    serde_json::from_str(json)
}
