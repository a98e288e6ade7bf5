//! The mutable value-set a document carries through indexing.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::fields::formats;

/// The category of the document being indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// A content node.
    Content,
    /// A media node.
    Media,
    /// A member node.
    Member,
}

/// A single raw field value.
///
/// Values arrive from the content repository as strings, integers or
/// dates; modeling them as a tagged union lets the indexing steps match
/// exhaustively instead of type-checking at runtime. A multi-valued field
/// is represented as multiple entries under one key in the
/// [`ValueSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum IndexValue {
    /// A string value.
    String(String),
    /// An integer value.
    Integer(i64),
    /// A date value.
    Date(NaiveDateTime),
}

impl IndexValue {
    /// Returns the textual form of the value, as it would be written to
    /// the index.
    pub fn as_text(&self) -> String {
        match self {
            Self::String(value) => value.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Date(value) => value.format(formats::CMS).to_string(),
        }
    }
}

impl From<String> for IndexValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for IndexValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i64> for IndexValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for IndexValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for IndexValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<NaiveDateTime> for IndexValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Date(value)
    }
}

/// The value-set of one document being written to the index.
///
/// Maps field names to ordered lists of raw values. Owned exclusively by
/// the indexing pipeline for the duration of one document's preparation
/// and handed to the engine's writer afterwards.
#[derive(Debug, Clone)]
pub struct ValueSet {
    /// The document id, numeric for content and media nodes but stored as
    /// a string, matching what the engine's writer expects.
    pub id: String,
    /// The category of the document.
    pub category: Category,
    values: BTreeMap<String, Vec<IndexValue>>,
}

impl ValueSet {
    /// Creates a new, empty value-set for the document with the given id.
    pub fn new(id: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            category,
            values: BTreeMap::new(),
        }
    }

    /// Returns whether a field with the given key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Appends a value to the field with the given key, creating the
    /// field if it does not exist.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<IndexValue>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    /// Replaces the values of the field with the given key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<IndexValue>) {
        self.values.insert(key.into(), vec![value.into()]);
    }

    /// Adds a value under the given key only if the field does not
    /// already exist. Returns whether the value was added.
    pub fn try_add(&mut self, key: impl Into<String>, value: impl Into<IndexValue>) -> bool {
        let key = key.into();
        if self.values.contains_key(&key) {
            return false;
        }
        self.values.insert(key, vec![value.into()]);
        true
    }

    /// Returns the values of the field with the given key, or an empty
    /// slice if the field does not exist.
    pub fn values_of(&self, key: &str) -> &[IndexValue] {
        self.values.get(key).map_or(&[], Vec::as_slice)
    }

    /// Returns the first value of the field with the given key.
    pub fn first(&self, key: &str) -> Option<&IndexValue> {
        self.values.get(key).and_then(|values| values.first())
    }

    /// Returns the textual form of the first value of the field with the
    /// given key.
    pub fn first_string(&self, key: &str) -> Option<String> {
        self.first(key).map(IndexValue::as_text)
    }

    /// Returns the first value of the field with the given key as a
    /// 32-bit integer, converting a numeric string if necessary.
    pub fn first_i32(&self, key: &str) -> Option<i32> {
        match self.first(key)? {
            IndexValue::Integer(value) => i32::try_from(*value).ok(),
            IndexValue::String(value) => value.trim().parse().ok(),
            IndexValue::Date(_) => None,
        }
    }

    /// Returns an iterator over all fields and their values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[IndexValue])> {
        self.values
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }
}
