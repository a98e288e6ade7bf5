//! The search helper tying pipeline, engine and pagination together.

use serde::Serialize;

use crate::{
    config::SearchConfig,
    engine::SearchEngine,
    error::SearchError,
    groups::{GroupParams, GroupResultList, GroupedResults, SearchGroup},
    options::SearchOptions,
    pipeline::QueryPipeline,
    result::SearchHit,
};

/// The result of one search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResultList {
    /// The raw engine query, retained only for debug searches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_query: Option<String>,
    /// The total number of matching documents, independent of
    /// pagination.
    pub total: u64,
    /// The hits of the current page.
    pub hits: Vec<SearchHit>,
}

/// Runs searches against an engine.
///
/// Owns the query pipeline and the engine handle. A search resolves the
/// searcher, compiles the options, executes the query once, then applies
/// the pagination window to the returned hits. Pagination is a slice of
/// the result stream, never part of the query text.
#[derive(Debug)]
pub struct SearchHelper<E> {
    /// The engine searches run against.
    engine: E,
    /// The pipeline compiling options into queries.
    pipeline: QueryPipeline,
}

impl<E: SearchEngine> SearchHelper<E> {
    /// Creates a helper with the default pipeline for `config`.
    pub fn new(engine: E, config: SearchConfig) -> Self {
        Self::with_pipeline(engine, QueryPipeline::new(config))
    }

    /// Creates a helper with a custom pipeline.
    pub fn with_pipeline(engine: E, pipeline: QueryPipeline) -> Self {
        Self { engine, pipeline }
    }

    /// Returns the pipeline.
    pub fn pipeline(&self) -> &QueryPipeline {
        &self.pipeline
    }

    /// Returns the pipeline for modification, to replace or remove
    /// phases.
    pub fn pipeline_mut(&mut self) -> &mut QueryPipeline {
        &mut self.pipeline
    }

    /// Performs a search with the given options.
    ///
    /// Fails with [`SearchError::EmptyQuery`] when every pipeline phase
    /// was skipped; an empty query is never handed to the engine.
    pub fn search(&self, options: &SearchOptions) -> Result<SearchResultList, SearchError> {
        let index_name = options
            .index
            .as_deref()
            .unwrap_or(&self.pipeline.config().index_name);
        let index = self.engine.index_by_name(index_name)?;
        let searcher = index.searcher()?;

        let compiled = self.pipeline.compile(options)?;
        let Some(raw) = compiled.raw() else {
            return Err(SearchError::EmptyQuery);
        };

        tracing::debug!(index = index.name(), query = %raw, "executing search");

        let results = searcher.execute(&raw)?;

        let total = results.total;
        let hits: Vec<SearchHit> = results
            .hits
            .into_iter()
            .skip(options.offset)
            .take(options.limit.unwrap_or(usize::MAX))
            .collect();

        tracing::debug!(index = index.name(), total, returned = hits.len(), "search done");

        Ok(SearchResultList {
            raw_query: options.debug.then_some(raw),
            total,
            hits,
        })
    }

    /// Performs a grouped search: one search per group over the shared
    /// search text, each with its own pagination window.
    ///
    /// A group whose options compile to an empty query contributes an
    /// empty result list instead of failing the whole grouped search.
    pub fn search_grouped(
        &self,
        params: &GroupParams,
        groups: &[SearchGroup],
    ) -> Result<GroupedResults, SearchError> {
        let mut results = Vec::with_capacity(groups.len());

        for group in groups {
            let query = params.query_for(group);
            let options = group
                .options(&query)
                .with_pagination(query.offset, query.limit);

            let list = match self.search(&options) {
                Ok(list) => list,
                Err(SearchError::EmptyQuery) => SearchResultList {
                    raw_query: None,
                    total: 0,
                    hits: Vec::new(),
                },
                Err(error) => return Err(error),
            };

            results.push(GroupResultList {
                id: group.id,
                name: group.name.clone(),
                offset: query.offset,
                limit: query.limit,
                total: list.total,
                hits: list.hits,
            });
        }

        Ok(GroupedResults { groups: results })
    }
}
