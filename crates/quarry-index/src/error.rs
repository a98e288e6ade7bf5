//! Error types for the quarry-index crate.

use quarry_query::QueryError;
use thiserror::Error;

/// Errors that can occur when compiling or executing a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// No index is registered under the requested name.
    ///
    /// Lookup failures are fatal to the operation; a different index is
    /// never silently substituted.
    #[error("search index '{0}' not found")]
    IndexNotFound(String),

    /// The index exists but does not define a searcher, or no searcher is
    /// registered under the requested name.
    #[error("no searcher available for '{0}'")]
    SearcherNotFound(String),

    /// Every pipeline phase was skipped, so the compiled query has no
    /// fragments. Executing an empty `()` group would rely on
    /// engine-specific semantics, so it is rejected here instead.
    #[error("compiled query is empty, nothing to execute")]
    EmptyQuery,

    /// Query construction failed while a pipeline phase appended to the
    /// query list. Indicates a bug in a phase implementation.
    #[error("query construction failed: {0}")]
    Query(#[from] QueryError),

    /// The engine reported an error while executing the query.
    #[error("search engine error: {0}")]
    Engine(String),
}
