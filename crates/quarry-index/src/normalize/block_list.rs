//! Flattening of rich block-list content into a searchable text field.

use std::error::Error;

use crate::{fields, value_set::ValueSet};

/// Error produced by a [`TextExtractor`].
pub type ExtractError = Box<dyn Error + Send + Sync>;

/// Read access to the content repository.
///
/// Block-list properties are stored as structured data that is not part
/// of the raw value-set, so indexing resolves the owning node and reads
/// the property through this collaborator.
pub trait ContentStore {
    /// Returns the raw value of the property with `key` on the node with
    /// `node_id`, or `None` when the node or the property does not exist.
    fn property_value(&self, node_id: i64, key: &str) -> Option<String>;
}

/// Extraction of plain searchable text from structured block-list
/// content.
pub trait TextExtractor {
    /// Returns a plain-text representation of the raw block-list value.
    fn searchable_text(&self, raw: &str) -> Result<String, ExtractError>;
}

/// Adds a plain-text representation of the block-list property with
/// `key` as one new searchable field.
///
/// The owning node is resolved from the value-set's document id; the
/// property value is read through `store` and flattened through
/// `extractor`. The new field is named `new_key` when given, otherwise
/// `<key>_search`. An extraction failure is logged with the property key
/// and node id and never aborts indexing of the rest of the document.
pub fn index_block_list(
    set: &mut ValueSet,
    store: &dyn ContentStore,
    extractor: &dyn TextExtractor,
    key: &str,
    new_key: Option<&str>,
) {
    let Ok(node_id) = set.id.parse::<i64>() else {
        return;
    };

    let Some(raw) = store.property_value(node_id, key) else {
        return;
    };

    let target = new_key.map_or_else(
        || format!("{key}{}", fields::SEARCH_SUFFIX),
        str::to_string,
    );

    match extractor.searchable_text(&raw) {
        Ok(text) if !text.trim().is_empty() => {
            set.try_add(target, text);
        }
        Ok(_) => {}
        Err(error) => {
            tracing::error!(
                node_id,
                property = key,
                error = %error,
                "failed extracting searchable text from block list"
            );
        }
    }
}
