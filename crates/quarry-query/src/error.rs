//! Error types for query composition.

use thiserror::Error;

/// Errors that can occur when composing a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A blank string was added to a [`crate::QueryList`].
    ///
    /// Raw fragments are engine query text; a blank fragment would render
    /// as a stray operator and indicates a bug in query construction.
    #[error("cannot add an empty fragment to a query list")]
    EmptyFragment,
}
