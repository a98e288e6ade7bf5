//! Extraction of boost words into per-tier fields.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::{
    fields,
    value_set::{Category, ValueSet},
};

/// Splits the boost words of the default boost-word field
/// ([`fields::BOOST_WORDS`]) into per-tier fields.
pub fn add_boost_words(set: &mut ValueSet) {
    add_boost_words_from(set, fields::BOOST_WORDS);
}

/// Splits the boost words of the given field into per-tier fields.
///
/// The source field holds a JSON array of `{"value": ..., "boost": ...}`
/// objects. Values are trimmed, lower-cased and grouped by their boost
/// tier; one `<field>_<boost>` field is emitted per distinct tier with
/// the space-joined words of that tier, enabling per-tier relevance
/// boosting at query time. Entries with a boost of zero or less, blank
/// values and non-object array entries are skipped; a payload that is
/// not a JSON array leaves the value-set untouched. Content documents
/// only.
pub fn add_boost_words_from(set: &mut ValueSet, field: &str) {
    if set.category != Category::Content {
        return;
    }

    let Some(raw) = set.first_string(field) else {
        return;
    };

    let Ok(Value::Array(entries)) = serde_json::from_str(&raw) else {
        return;
    };

    let mut tiers: BTreeMap<i64, Vec<String>> = BTreeMap::new();

    for entry in &entries {
        let Value::Object(object) = entry else {
            continue;
        };

        let boost = object.get("boost").and_then(Value::as_i64).unwrap_or(0);
        let word = object
            .get("value")
            .and_then(Value::as_str)
            .map(|value| value.trim().to_lowercase())
            .unwrap_or_default();

        if boost <= 0 || word.is_empty() {
            continue;
        }

        tiers.entry(boost).or_default().push(word);
    }

    for (boost, words) in tiers {
        set.try_add(format!("{field}_{boost}"), words.join(" "));
    }
}
