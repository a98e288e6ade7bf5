//! Expansion of typed entity references into searchable GUID forms.

use uuid::Uuid;

use crate::{fields, value_set::ValueSet};

/// Parses the entity references in the field with `key` and adds a
/// `<key>_search` field with searchable versions of them.
///
/// References look like `scheme://type/<id>` and are comma-separated.
/// For a GUID-bearing reference both the 32-hex and the hyphenated
/// string form of the GUID are emitted, so the reference matches
/// regardless of how a query formats it. For a non-GUID reference the
/// trailing path segment is emitted instead. The type of the referenced
/// entity is not carried over.
pub fn index_udis(set: &mut ValueSet, key: &str) {
    let Some(value) = set.first_string(key) else {
        return;
    };

    let mut expanded: Vec<String> = Vec::new();

    for piece in value.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let tail = piece.rsplit('/').next().unwrap_or(piece);
        if let Ok(guid) = Uuid::parse_str(tail) {
            expanded.push(guid.simple().to_string());
            expanded.push(guid.hyphenated().to_string());
        } else if !tail.is_empty() {
            expanded.push(tail.to_string());
        }
    }

    if expanded.is_empty() {
        return;
    }

    set.try_add(
        format!("{key}{}", fields::SEARCH_SUFFIX),
        expanded.join(" "),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_set::Category;

    fn content_set() -> ValueSet {
        ValueSet::new("1045", Category::Content)
    }

    #[test]
    fn guid_reference_emits_both_formats() {
        let mut set = content_set();
        set.add("related", "umb://document/4f3b2a1c9d8e4f00a1b2c3d4e5f60718");

        index_udis(&mut set, "related");

        assert_eq!(
            set.first_string("related_search").as_deref(),
            Some(
                "4f3b2a1c9d8e4f00a1b2c3d4e5f60718 \
                 4f3b2a1c-9d8e-4f00-a1b2-c3d4e5f60718"
            )
        );
    }

    #[test]
    fn hyphenated_guid_reference_is_accepted() {
        let mut set = content_set();
        set.add("related", "umb://media/4f3b2a1c-9d8e-4f00-a1b2-c3d4e5f60718");

        index_udis(&mut set, "related");

        let value = set.first_string("related_search").unwrap();
        assert!(value.contains("4f3b2a1c9d8e4f00a1b2c3d4e5f60718"));
        assert!(value.contains("4f3b2a1c-9d8e-4f00-a1b2-c3d4e5f60718"));
    }

    #[test]
    fn non_guid_reference_emits_trailing_segment() {
        let mut set = content_set();
        set.add("related", "route://site/some-page");

        index_udis(&mut set, "related");

        assert_eq!(set.first_string("related_search").as_deref(), Some("some-page"));
    }

    #[test]
    fn multiple_references_are_space_joined() {
        let mut set = content_set();
        set.add(
            "related",
            "umb://document/4f3b2a1c9d8e4f00a1b2c3d4e5f60718, route://site/about",
        );

        index_udis(&mut set, "related");

        let value = set.first_string("related_search").unwrap();
        assert_eq!(value.split(' ').count(), 3);
        assert!(value.ends_with("about"));
    }

    #[test]
    fn missing_field_is_skipped() {
        let mut set = content_set();
        index_udis(&mut set, "related");
        assert!(!set.contains("related_search"));
    }

    #[test]
    fn value_with_no_parseable_references_is_skipped() {
        let mut set = content_set();
        set.add("related", " , ,");
        index_udis(&mut set, "related");
        assert!(!set.contains("related_search"));
    }
}
