//! Boolean query composition and compilation for quarry search.
//!
//! This crate builds the textual queries sent to a Lucene-style search
//! engine (`field:value` syntax, `AND`/`OR` operators, wildcards, fuzzy
//! matching and negated groups):
//!
//! - **Fields**: [`Field`] and [`FieldList`] describe the searchable
//!   fields of a use case, including per-field boost and fuzzy factors,
//!   and compile a list of search terms into a query fragment.
//! - **Composition**: [`QueryList`] is a boolean query-fragment tree
//!   (AND/OR, optionally negated) and the sole serialization point to
//!   the engine's query syntax.
//! - **Terms**: [`parse_terms`] normalizes free text into search terms.
//! - **Escaping**: [`escape`] escapes engine-reserved characters.
//!
//! # Example
//!
//! ```
//! use quarry_query::{Field, FieldList, QueryList};
//!
//! let mut fields = FieldList::new();
//! fields.add(Field::boosted("title", 40));
//! fields.add(Field::plain("teaser"));
//!
//! let mut query = QueryList::new();
//! query.add(fields.compile(&["rust".to_string()], false)).unwrap();
//! query.add("hideFromSearch:0").unwrap();
//!
//! assert!(query.render().contains(" AND "));
//! ```

#![warn(missing_docs)]

mod error;
mod escape;
mod field;
mod query_list;
mod terms;

pub use error::QueryError;
pub use escape::escape;
pub use field::{Field, FieldList};
pub use query_list::{Fragment, QueryList, QueryOperator};
pub use terms::parse_terms;
