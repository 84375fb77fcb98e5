//! Metadata extraction
//!
//! Walks a [`TagPayload`] and flattens it into a [`TagCatalog`]:
//!
//! - atomic entries become scalar-like metadata with their primitive type
//! - structured entries of the string type are terminal and never recursed into
//! - every other structured entry is recorded as a structure and its members are
//!   extracted under `parent.member` paths; a structure with no visible members
//!   is recorded as a plain tag of its structure type
//!
//! Members whose names start with `_` or `ZZZZZZZZZZ` are controller internals and
//! are skipped together with anything beneath them. Members only report an array
//! length, which lands in the first dimension slot.

pub mod error;

pub use error::ExtractError;

use crate::catalog::{Dimensions, PATH_DELIMITER, TagCatalog, TagMetadata};
use crate::payload::{self, MemberMap, TagDescriptor};
use tracing::{debug, info};

/// Type name of the controller's string structure
pub const STRING_TYPE: &str = "STRING";

/// Member name prefixes the controller uses for internal fields
pub const HIDDEN_MEMBER_PREFIXES: [&str; 2] = ["_", "ZZZZZZZZZZ"];

type Result<T> = std::result::Result<T, ExtractError>;

/// Check whether a structure member is an internal field
///
/// # Examples
/// ```
/// # use tagtree::extract::is_hidden_member;
/// assert!(is_hidden_member("_internal"));
/// assert!(is_hidden_member("ZZZZZZZZZZreserved"));
/// assert!(!is_hidden_member("ZZZZ"));
/// assert!(!is_hidden_member("Speed"));
/// ```
#[must_use]
pub fn is_hidden_member(name: &str) -> bool {
    HIDDEN_MEMBER_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

/// Flatten a payload into a catalog
///
/// # Errors
///
/// Returns `ExtractError::MalformedPayload` if a top-level tag reports more than
/// three dimensions, or a non-string structure has no member list.
pub fn extract(payload: &payload::TagPayload) -> Result<TagCatalog> {
    let mut catalog = TagCatalog::new();

    for (name, descriptor) in payload {
        let dimensions = match descriptor.dimensions() {
            None => Dimensions::SCALAR,
            Some(dims) => Dimensions::from_slice(dims).ok_or_else(|| {
                let reason = format!("expected at most 3 dimensions, got {}", dims.len());
                ExtractError::malformed(name, reason)
            })?,
        };
        record(&mut catalog, name, descriptor, dimensions)?;
    }

    info!(tags = catalog.len(), top_level = payload.len(), "extracted tag catalog");
    Ok(catalog)
}

/// Parse a JSON payload and flatten it into a catalog
///
/// # Errors
///
/// Returns `ExtractError::Json` if the text does not match the payload schema,
/// or any error [`extract`] returns.
pub fn extract_json(json: &str) -> Result<TagCatalog> {
    let payload = payload::parse_payload(json)?;
    extract(&payload)
}

fn record(
    catalog: &mut TagCatalog,
    path: &str,
    descriptor: &TagDescriptor,
    dimensions: Dimensions,
) -> Result<()> {
    match descriptor {
        TagDescriptor::Atomic { data_type, .. } => {
            catalog.insert(path, TagMetadata::atomic(data_type.as_str(), dimensions));
        }
        TagDescriptor::Struct { data_type, .. } if data_type.name == STRING_TYPE => {
            if data_type.internal_tags.is_some() {
                debug!(path, "not descending into string members");
            }
            catalog.insert(path, TagMetadata::atomic(STRING_TYPE, dimensions));
        }
        TagDescriptor::Struct { data_type, .. } => {
            let members = data_type.internal_tags.as_ref().ok_or_else(|| {
                ExtractError::malformed(
                    path,
                    format!("structure type '{}' has no internal_tags", data_type.name),
                )
            })?;
            catalog.insert(path, TagMetadata::structure(data_type.name.as_str(), dimensions));
            let before = catalog.len();
            extract_members(catalog, path, members)?;

            // No visible members: keep the position but record it as a plain tag
            if catalog.len() == before {
                debug!(path, "structure has no visible members");
                catalog.insert(path, TagMetadata::atomic(data_type.name.as_str(), dimensions));
            }
        }
    }
    Ok(())
}

fn extract_members(catalog: &mut TagCatalog, parent: &str, members: &MemberMap) -> Result<()> {
    for (name, member) in members {
        if is_hidden_member(name) {
            debug!(parent, member = %name, "skipping hidden member");
            continue;
        }
        let path = format!("{parent}{PATH_DELIMITER}{name}");
        record(catalog, &path, member, Dimensions::array(member.array_len()))?;
    }
    Ok(())
}
