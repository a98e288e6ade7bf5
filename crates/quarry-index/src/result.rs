//! Search hits and their typed field accessors.

use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

/// One matching document as returned by the engine.
///
/// Field values come back from the index as strings; the typed accessors
/// parse on demand and return `None` for a missing key or an unparsable
/// value. A hit never panics or errors over a malformed stored value.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    /// The document ID.
    pub id: String,
    /// The engine relevance score, when the engine reports one.
    pub score: Option<f32>,
    /// The stored field values of the document.
    pub values: BTreeMap<String, String>,
}

impl SearchHit {
    /// Creates a hit without field values.
    pub fn new(id: impl Into<String>, score: Option<f32>) -> Self {
        Self {
            id: id.into(),
            score,
            values: BTreeMap::new(),
        }
    }

    /// Adds a stored field value.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Returns the stored value of `key`.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the stored value of `key` parsed as an `i32`.
    pub fn get_i32(&self, key: &str) -> Option<i32> {
        self.get_string(key)?.parse().ok()
    }

    /// Returns the stored value of `key` parsed as an `i64`.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get_string(key)?.parse().ok()
    }

    /// Returns the stored value of `key` parsed as a UUID. Both the
    /// hyphenated and the compact 32-digit form parse.
    pub fn get_uuid(&self, key: &str) -> Option<Uuid> {
        Uuid::parse_str(self.get_string(key)?).ok()
    }
}
