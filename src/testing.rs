//! Testing utilities for tagtree
//!
//! Payload fixtures shared by the unit tests of the extraction, tree, filter
//! and selection modules.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::TagCatalog;
use crate::extract::extract;
use crate::payload::{MemberMap, TagDescriptor, TagPayload};
use crate::tree::{TagTree, build_tree};

/// Build an ordered member map from `(name, descriptor)` pairs
#[must_use]
pub fn members(entries: Vec<(&str, TagDescriptor)>) -> MemberMap {
    entries
        .into_iter()
        .map(|(name, descriptor)| (name.to_string(), descriptor))
        .collect()
}

/// A recipe structure with one string member and one hidden member
///
/// ```text
/// Recipe : RecipeType
///   Name    : STRING
///   _hidden : DINT
/// ```
#[must_use]
pub fn recipe_payload() -> TagPayload {
    let mut payload = TagPayload::new();
    payload.insert(
        "Recipe".to_string(),
        TagDescriptor::structure(
            "RecipeType",
            members(vec![
                ("Name", TagDescriptor::opaque("STRING").with_array(0)),
                ("_hidden", TagDescriptor::atomic("DINT")),
            ]),
        ),
    );
    payload
}

/// A production line payload exercising arrays, nesting and hidden members
///
/// ```text
/// Counter  : DINT[5]
/// Running  : BOOL
/// Line1    : LineType
///   Motor    : MotorType
///     Speed    : REAL
///     Faults   : BOOL[8]
///     _pad     : SINT                (hidden)
///   Status   : STRING
///   ZZZZZZZZZZLine1Reserved : SINT   (hidden)
///   Zone     : ZoneType[3]
///     Temp     : REAL
/// Grid     : INT[3,2]
/// ```
#[must_use]
pub fn line_payload() -> TagPayload {
    let motor = TagDescriptor::structure(
        "MotorType",
        members(vec![
            ("Speed", TagDescriptor::atomic("REAL")),
            ("Faults", TagDescriptor::atomic("BOOL").with_array(8)),
            ("_pad", TagDescriptor::atomic("SINT")),
        ]),
    );
    let zone = TagDescriptor::structure(
        "ZoneType",
        members(vec![("Temp", TagDescriptor::atomic("REAL"))]),
    )
    .with_array(3);
    let line = TagDescriptor::structure(
        "LineType",
        members(vec![
            ("Motor", motor),
            ("Status", TagDescriptor::opaque("STRING")),
            ("ZZZZZZZZZZLine1Reserved", TagDescriptor::atomic("SINT")),
            ("Zone", zone),
        ]),
    );

    let mut payload = TagPayload::new();
    payload.insert(
        "Counter".to_string(),
        TagDescriptor::atomic("DINT").with_dimensions(&[5, 0, 0]),
    );
    payload.insert("Running".to_string(), TagDescriptor::atomic("BOOL"));
    payload.insert("Line1".to_string(), line);
    payload.insert(
        "Grid".to_string(),
        TagDescriptor::atomic("INT").with_dimensions(&[3, 2, 0]),
    );
    payload
}

/// Catalog extracted from [`line_payload`]
///
/// # Panics
/// Panics if the fixture fails to extract.
#[must_use]
pub fn line_catalog() -> TagCatalog {
    extract(&line_payload()).expect("line payload fixture should extract")
}

/// Tree built from [`line_catalog`]
#[must_use]
pub fn line_tree() -> TagTree {
    build_tree(&line_catalog())
}
