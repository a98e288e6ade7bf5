//! The indexing normalization pipeline.
//!
//! Runs once per document at index-write time, deriving synthetic
//! searchable fields from the raw content fields in a [`ValueSet`]:
//! CSV/path expansions, reference (UDI) expansions, date decompositions,
//! boolean encodings, boost-word buckets, lower-cased duplicates and the
//! hierarchical visibility flag.
//!
//! Every step fails closed: on a missing source field, a malformed value
//! or a parse failure the value-set is left unmodified for that field and
//! indexing of the document continues. Steps are guarded against double
//! application by skipping when their target field already exists.

mod block_list;
mod boost_words;
mod dates;
mod udi;
mod visibility;

pub use block_list::{ContentStore, ExtractError, TextExtractor, index_block_list};
pub use boost_words::{add_boost_words, add_boost_words_from};
pub use dates::{index_date, index_date_extended, index_date_with_format};
pub use udi::index_udis;
pub use visibility::add_hide_from_search;

use uuid::Uuid;

use crate::{
    fields,
    value_set::{Category, IndexValue, ValueSet},
};

/// The fields that get lower-cased duplicates by default.
const DEFAULT_LCI_FIELDS: [&str; 3] = [fields::NODE_NAME, fields::TITLE, fields::TEASER];

/// Adds a search-friendly version of the `path` field where the ancestor
/// IDs are separated by spaces instead of commas.
pub fn index_path(set: &mut ValueSet) {
    index_csv(set, fields::PATH);
}

/// If a field with `key` exists, adds a `<key>_search` field in which
/// commas in the value have been replaced by spaces, making each
/// comma-separated entry matchable as a whole term.
pub fn index_csv(set: &mut ValueSet, key: &str) {
    let Some(value) = set.first_string(key) else {
        return;
    };
    set.try_add(
        format!("{key}{}", fields::SEARCH_SUFFIX),
        value.replace(',', " "),
    );
}

/// Adds a field with the given boolean value.
///
/// The engine has no native boolean type, so the value is encoded as the
/// literal `"1"` or `"0"`.
pub fn add_boolean(set: &mut ValueSet, key: &str, value: bool) {
    set.try_add(key, if value { "1" } else { "0" });
}

/// If the field with `key` holds an integer, adds a deterministic GUID
/// representation of it under `new_key`.
///
/// Used for fields that must be joined against GUID-keyed data. The
/// integer's bits become the low four bytes of an otherwise zero GUID, so
/// the mapping is stable across indexing runs.
pub fn add_int32_as_guid(set: &mut ValueSet, key: &str, new_key: &str) {
    let Some(value) = set.first_i32(key) else {
        return;
    };
    let guid = Uuid::from_u128(u128::from(value.cast_unsigned()));
    set.try_add(new_key, guid.hyphenated().to_string());
}

/// Adds lower-cased duplicates of the default text fields (`nodeName`,
/// `title` and `teaser`) under the `_lci` suffix.
pub fn add_default_lci_fields(set: &mut ValueSet) {
    add_lci_fields(set, &DEFAULT_LCI_FIELDS);
}

/// Adds lower-cased duplicates of the given fields under the `_lci`
/// suffix. Content documents only.
pub fn add_lci_fields<S: AsRef<str>>(set: &mut ValueSet, names: &[S]) {
    for name in names {
        add_lci_field(set, name.as_ref());
    }
}

/// Adds a lower-cased duplicate of the field with `name` under
/// `<name>_lci`, so case-insensitive exact and prefix matching works
/// without engine-level case folding.
///
/// Restricted to content documents; skipped when the `_lci` field
/// already exists.
pub fn add_lci_field(set: &mut ValueSet, name: &str) {
    if set.category != Category::Content {
        return;
    }

    let lci_key = format!("{name}{}", fields::LCI_SUFFIX);
    if set.contains(&lci_key) {
        return;
    }

    let lowered: Vec<String> = set
        .values_of(name)
        .iter()
        .map(|value| value.as_text().to_lowercase())
        .collect();

    for value in lowered {
        set.add(lci_key.clone(), value);
    }
}

/// Returns the path of a value-set as ancestor IDs, parsed from the
/// comma-joined `path` field. Unparsable entries are skipped.
pub(crate) fn path_ids(set: &ValueSet) -> Vec<i32> {
    set.first_string(fields::PATH)
        .map(|path| {
            path.split(',')
                .filter_map(|id| id.trim().parse().ok())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_set() -> ValueSet {
        ValueSet::new("1045", Category::Content)
    }

    #[test]
    fn index_path_splits_ancestor_ids() {
        let mut set = content_set();
        set.add(fields::PATH, "-1,1012,1045");

        index_path(&mut set);

        assert_eq!(
            set.first_string(fields::PATH_SEARCH).as_deref(),
            Some("-1 1012 1045")
        );
    }

    #[test]
    fn index_csv_skips_missing_field() {
        let mut set = content_set();
        index_csv(&mut set, "related");
        assert!(!set.contains("related_search"));
    }

    #[test]
    fn index_csv_does_not_overwrite_existing_target() {
        let mut set = content_set();
        set.add("related", "1,2");
        set.add("related_search", "kept");

        index_csv(&mut set, "related");

        assert_eq!(set.first_string("related_search").as_deref(), Some("kept"));
    }

    #[test]
    fn add_boolean_encodes_as_digit() {
        let mut set = content_set();
        add_boolean(&mut set, "featured", true);
        add_boolean(&mut set, "archived", false);
        assert_eq!(set.first_string("featured").as_deref(), Some("1"));
        assert_eq!(set.first_string("archived").as_deref(), Some("0"));
    }

    #[test]
    fn add_int32_as_guid_is_deterministic() {
        let mut set = content_set();
        set.add("creatorID", 1234);

        add_int32_as_guid(&mut set, "creatorID", "creatorGuid");

        assert_eq!(
            set.first_string("creatorGuid").as_deref(),
            Some("00000000-0000-0000-0000-0000000004d2")
        );
    }

    #[test]
    fn add_int32_as_guid_skips_non_numeric_values() {
        let mut set = content_set();
        set.add("creatorID", "not a number");
        add_int32_as_guid(&mut set, "creatorID", "creatorGuid");
        assert!(!set.contains("creatorGuid"));
    }

    #[test]
    fn lci_fields_are_lower_cased_duplicates() {
        let mut set = content_set();
        set.add(fields::NODE_NAME, "Front Page");
        set.add(fields::TITLE, "Welcome HOME");

        add_default_lci_fields(&mut set);

        assert_eq!(set.first_string("nodeName_lci").as_deref(), Some("front page"));
        assert_eq!(set.first_string("title_lci").as_deref(), Some("welcome home"));
        // No teaser on this node, so no teaser_lci either.
        assert!(!set.contains("teaser_lci"));
    }

    #[test]
    fn lci_fields_skip_media_documents() {
        let mut set = ValueSet::new("2000", Category::Media);
        set.add(fields::NODE_NAME, "Photo.jpg");

        add_default_lci_fields(&mut set);

        assert!(!set.contains("nodeName_lci"));
    }

    #[test]
    fn lci_field_keeps_every_value_of_a_multi_valued_field() {
        let mut set = content_set();
        set.add("title", "One");
        set.add("title", "TWO");

        add_lci_field(&mut set, "title");

        let values: Vec<String> = set
            .values_of("title_lci")
            .iter()
            .map(IndexValue::as_text)
            .collect();
        assert_eq!(values, vec!["one", "two"]);
    }

    #[test]
    fn lci_field_is_guarded_against_double_application() {
        let mut set = content_set();
        set.add("title", "One");

        add_lci_field(&mut set, "title");
        add_lci_field(&mut set, "title");

        assert_eq!(set.values_of("title_lci").len(), 1);
    }

    #[test]
    fn path_ids_skips_malformed_entries() {
        let mut set = content_set();
        set.add(fields::PATH, "-1,abc,1045");
        assert_eq!(path_ids(&set), vec![-1, 1045]);
    }
}
