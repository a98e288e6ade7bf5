//! Configuration for the search pipeline.

use quarry_query::{Field, FieldList};
use serde::Deserialize;

use crate::fields;

/// Locale letters kept during term normalization by default.
pub const DEFAULT_EXTRA_LETTERS: &str = "æøåÆØÅ";

/// The name of the engine index searched by default.
pub const DEFAULT_INDEX_NAME: &str = "ExternalIndex";

/// A searchable field as it appears in configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigField {
    /// The name of the field in the index.
    pub name: String,
    /// Optional relevance boost.
    #[serde(default)]
    pub boost: Option<u32>,
    /// Optional fuzzy factor in the open interval `(0, 1)`.
    #[serde(default)]
    pub fuzz: Option<f32>,
}

/// Configuration of the search pipeline.
///
/// All values have sensible defaults, so an empty configuration file is
/// valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// The name of the engine index to search when the options do not
    /// specify one.
    pub index_name: String,
    /// The fields used for text search. When empty, the pipeline's
    /// built-in default applies.
    pub text_fields: Vec<ConfigField>,
    /// Locale letters kept during term normalization, in addition to
    /// ASCII word characters.
    pub extra_letters: String,
    /// Subtree roots whose descendants are hidden from search at
    /// indexing time.
    pub hidden_roots: Vec<i32>,
    /// Fields that get lower-cased `_lci` duplicates at indexing time.
    pub lci_fields: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_name: DEFAULT_INDEX_NAME.to_string(),
            text_fields: Vec::new(),
            extra_letters: DEFAULT_EXTRA_LETTERS.to_string(),
            hidden_roots: Vec::new(),
            lci_fields: vec![
                fields::NODE_NAME.to_string(),
                fields::TITLE.to_string(),
                fields::TEASER.to_string(),
            ],
        }
    }
}

impl SearchConfig {
    /// Returns the configured text fields as a [`FieldList`].
    pub fn field_list(&self) -> FieldList {
        self.text_fields
            .iter()
            .map(|field| Field::new(field.name.clone(), field.boost, field.fuzz))
            .collect()
    }
}
