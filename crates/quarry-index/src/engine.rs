//! The boundary to the full-text engine.
//!
//! The engine itself is a black box. These traits cover the two lookups
//! and the single execution call the search layer needs; everything else
//! about the engine (storage, analyzers, ranking) stays on the other
//! side. Lookup failures are errors, not fallbacks: a missing index or
//! searcher is never silently substituted with another one.

use crate::{error::SearchError, result::SearchHit};

/// The raw results of one engine execution, before pagination.
#[derive(Debug, Clone, Default)]
pub struct EngineResults {
    /// The total number of matching documents, independent of how many
    /// hits were returned.
    pub total: u64,
    /// The matching documents in engine rank order.
    pub hits: Vec<SearchHit>,
}

/// Executes raw queries against one index.
pub trait Searcher {
    /// Executes the raw query and returns the matching documents.
    fn execute(&self, raw_query: &str) -> Result<EngineResults, SearchError>;
}

/// A named engine index.
pub trait Index {
    /// The name of the index.
    fn name(&self) -> &str;

    /// Returns the searcher of this index, or
    /// [`SearchError::SearcherNotFound`] when the index does not define
    /// one.
    fn searcher(&self) -> Result<&dyn Searcher, SearchError>;
}

/// The engine's registry of indexes and searchers.
pub trait SearchEngine {
    /// Looks up the index registered under `name`, or
    /// [`SearchError::IndexNotFound`].
    fn index_by_name(&self, name: &str) -> Result<&dyn Index, SearchError>;

    /// Looks up a standalone searcher registered under `name`, or
    /// [`SearchError::SearcherNotFound`].
    fn searcher_by_name(&self, name: &str) -> Result<&dyn Searcher, SearchError>;
}
