//! Document indexing normalization and search execution for quarry.
//!
//! This crate is the layer between application search intent and a
//! Lucene-style full-text engine. It covers both halves of the search
//! lifecycle:
//!
//! - **Indexing** ([`normalize`], [`ValueSet`]): once per document at
//!   index-write time, derive the synthetic searchable fields (CSV and
//!   path expansions, date decompositions, lower-cased duplicates,
//!   boost-word buckets, the visibility flag) the query side relies on.
//! - **Querying** ([`SearchOptions`], [`QueryPipeline`]): compile typed
//!   search options into one raw engine query through an ordered,
//!   per-use-case overridable phase list.
//! - **Execution** ([`SearchHelper`]): resolve the searcher, run the
//!   compiled query, paginate the hits and hand back typed results,
//!   including grouped fan-out searches.
//!
//! The engine itself stays a black box behind the traits in [`engine`];
//! this crate never touches index storage, analyzers or ranking.

#![warn(missing_docs)]

mod config;
pub mod engine;
mod error;
pub mod fields;
mod groups;
pub mod normalize;
mod options;
mod pipeline;
mod result;
mod search;
mod value_set;

pub use config::{ConfigField, DEFAULT_EXTRA_LETTERS, DEFAULT_INDEX_NAME, SearchConfig};
pub use engine::{EngineResults, Index, SearchEngine, Searcher};
pub use error::SearchError;
pub use groups::{GroupParams, GroupQuery, GroupResultList, GroupedResults, SearchGroup};
pub use options::SearchOptions;
pub use pipeline::{CompiledQuery, Phase, QueryContext, QueryPipeline, effective_text_fields, phases};
pub use result::SearchHit;
pub use search::{SearchHelper, SearchResultList};
pub use value_set::{Category, IndexValue, ValueSet};
