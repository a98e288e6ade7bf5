//! The query option pipeline.
//!
//! Compiles a [`SearchOptions`] into one top-level AND-type
//! [`QueryList`] through a fixed but overridable sequence of phases:
//!
//! 1. **Type scoping**: OR group over `nodeTypeAlias:<alias>` terms.
//! 2. **Text search**: normalized terms compiled against the effective
//!    field list.
//! 3. **Path scoping**: OR group over `path_search:<id>` terms, one per
//!    requested ancestor.
//! 4. **Visibility**: `hideFromSearch:0` unless disabled.
//!
//! Each phase is independently skippable based on its guard condition,
//! phases never remove work done by earlier phases, and everything
//! combines under a single outer AND. A use case overrides a phase by
//! replacing it in the pipeline rather than by subclassing.

use std::fmt;

use quarry_query::{Field, FieldList, QueryError, QueryList, QueryOperator, parse_terms};

use crate::{config::SearchConfig, fields, options::SearchOptions};

/// The default text fields with their boosts, used when neither the
/// options nor the configuration supply a field list.
const DEFAULT_TEXT_FIELDS: [(&str, u32); 3] = [
    (fields::NODE_NAME, 50),
    (fields::TITLE, 40),
    (fields::TEASER, 20),
];

/// The fallback fields used when a use case explicitly supplies an
/// empty field list. Text search is never silently skipped.
const FALLBACK_TEXT_FIELDS: [&str; 3] = ["nodeName_lci", "contentTeasertext_lci", "contentBody_lci"];

/// Identifies a phase in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Content-type scoping.
    ContentTypes,
    /// Free-text search.
    Text,
    /// Ancestor (path) scoping.
    Path,
    /// The `hideFromSearch` visibility filter.
    Visibility,
    /// A caller-defined phase.
    Custom(&'static str),
}

/// The shared mutable state a pipeline run threads through its phases.
#[derive(Debug, Default)]
pub struct QueryContext {
    /// The top-level AND-type query list the phases append to.
    pub query: QueryList,
    /// The normalized search terms, populated by the text phase.
    pub terms: Vec<String>,
    /// The effective field list, populated by the text phase.
    pub fields: FieldList,
}

/// A single pipeline phase.
///
/// Phases only append to the context; returning an error indicates a bug
/// in query construction and aborts compilation.
pub type PhaseFn =
    Box<dyn Fn(&SearchOptions, &SearchConfig, &mut QueryContext) -> Result<(), QueryError> + Send + Sync>;

/// The compiled form of one search, retained for introspection.
///
/// Exposes the three artifacts debugging tooling needs (the query tree,
/// the normalized terms and the effective field list) directly, instead
/// of requiring any inspection of the options object.
#[derive(Debug)]
pub struct CompiledQuery {
    /// The compiled query tree.
    pub query: QueryList,
    /// The normalized search terms, empty when no text phase ran.
    pub terms: Vec<String>,
    /// The effective text field list, empty when no text phase ran.
    pub fields: FieldList,
}

impl CompiledQuery {
    /// Returns the raw engine query, or `None` when every phase was
    /// skipped and the query has no fragments.
    pub fn raw(&self) -> Option<String> {
        (!self.query.is_empty()).then(|| self.query.render())
    }
}

/// An ordered list of phases that compiles search options into a query.
pub struct QueryPipeline {
    /// Pipeline-wide configuration.
    config: SearchConfig,
    /// The phases, run in order.
    phases: Vec<(Phase, PhaseFn)>,
}

impl QueryPipeline {
    /// Creates a pipeline with the default phase sequence.
    pub fn new(config: SearchConfig) -> Self {
        let mut pipeline = Self::empty(config);
        pipeline.push_phase(Phase::ContentTypes, phases::content_types);
        pipeline.push_phase(Phase::Text, phases::text);
        pipeline.push_phase(Phase::Path, phases::path);
        pipeline.push_phase(Phase::Visibility, phases::visibility);
        pipeline
    }

    /// Creates a pipeline without any phases.
    pub fn empty(config: SearchConfig) -> Self {
        Self {
            config,
            phases: Vec::new(),
        }
    }

    /// Returns the pipeline configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the phases in execution order.
    pub fn phases(&self) -> impl Iterator<Item = Phase> + '_ {
        self.phases.iter().map(|(phase, _)| *phase)
    }

    /// Appends a phase to the end of the pipeline.
    pub fn push_phase<F>(&mut self, phase: Phase, run: F)
    where
        F: Fn(&SearchOptions, &SearchConfig, &mut QueryContext) -> Result<(), QueryError>
            + Send
            + Sync
            + 'static,
    {
        self.phases.push((phase, Box::new(run)));
    }

    /// Replaces the given phase in place, or appends it when not
    /// present.
    pub fn set_phase<F>(&mut self, phase: Phase, run: F)
    where
        F: Fn(&SearchOptions, &SearchConfig, &mut QueryContext) -> Result<(), QueryError>
            + Send
            + Sync
            + 'static,
    {
        match self.phases.iter_mut().find(|(existing, _)| *existing == phase) {
            Some((_, slot)) => *slot = Box::new(run),
            None => self.push_phase(phase, run),
        }
    }

    /// Removes the given phase from the pipeline.
    pub fn without_phase(&mut self, phase: Phase) {
        self.phases.retain(|(existing, _)| *existing != phase);
    }

    /// Compiles the given options into a query.
    pub fn compile(&self, options: &SearchOptions) -> Result<CompiledQuery, QueryError> {
        let mut context = QueryContext::default();

        for (_, run) in &self.phases {
            run(options, &self.config, &mut context)?;
        }

        Ok(CompiledQuery {
            query: context.query,
            terms: context.terms,
            fields: context.fields,
        })
    }
}

impl fmt::Debug for QueryPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryPipeline")
            .field("config", &self.config)
            .field("phases", &self.phases().collect::<Vec<_>>())
            .finish()
    }
}

/// Computes the field list used for text search.
///
/// Pure: the options are never mutated. Options-supplied fields win,
/// then configured fields, then the built-in boosted triplet. An
/// explicitly empty options list falls back to the lower-cased triplet
/// so text search is never silently dropped.
pub fn effective_text_fields(options: &SearchOptions, config: &SearchConfig) -> FieldList {
    match &options.text_fields {
        Some(list) if list.is_valid() => list.clone(),
        Some(_) => FieldList::from_names(FALLBACK_TEXT_FIELDS),
        None => {
            let configured = config.field_list();
            if configured.is_valid() {
                configured
            } else {
                DEFAULT_TEXT_FIELDS
                    .iter()
                    .map(|(name, boost)| Field::boosted(*name, *boost))
                    .collect()
            }
        }
    }
}

/// The default pipeline phases.
///
/// Exposed so use cases can compose their own pipelines from the
/// standard building blocks.
pub mod phases {
    use super::{
        FieldList, QueryContext, QueryError, QueryList, QueryOperator, SearchConfig,
        SearchOptions, effective_text_fields, fields, parse_terms,
    };

    /// Type scoping: appends an OR group over `nodeTypeAlias:<alias>`
    /// terms. Skipped when no content types are requested.
    pub fn content_types(
        options: &SearchOptions,
        _config: &SearchConfig,
        context: &mut QueryContext,
    ) -> Result<(), QueryError> {
        if options.content_types.is_empty() {
            return Ok(());
        }

        let mut group = QueryList::with_operator(QueryOperator::Or);
        for alias in &options.content_types {
            group.add(format!("{}:{}", fields::NODE_TYPE_ALIAS, alias))?;
        }
        context.query.add(group)
    }

    /// Text search: normalizes the search text into terms and compiles
    /// them against the effective field list. Skipped entirely when the
    /// normalized text has no terms left: no constraint is added, which
    /// is distinct from matching nothing.
    pub fn text(
        options: &SearchOptions,
        config: &SearchConfig,
        context: &mut QueryContext,
    ) -> Result<(), QueryError> {
        let Some(text) = options.text.as_deref() else {
            return Ok(());
        };

        let terms = parse_terms(text, &config.extra_letters);
        if terms.is_empty() {
            return Ok(());
        }

        let fields: FieldList = effective_text_fields(options, config);
        let fragment = fields.compile(&terms, options.allow_leading_wildcard);

        context.terms = terms;
        context.fields = fields;
        context.query.add(fragment)
    }

    /// Ancestor scoping: appends an OR group of `path_search:<id>`
    /// terms, matching self-or-descendant of each requested root.
    /// Skipped when no root IDs are requested.
    pub fn path(
        options: &SearchOptions,
        _config: &SearchConfig,
        context: &mut QueryContext,
    ) -> Result<(), QueryError> {
        if options.root_ids.is_empty() {
            return Ok(());
        }

        let mut group = QueryList::with_operator(QueryOperator::Or);
        for id in &options.root_ids {
            group.add(format!("{}:{id}", fields::PATH_SEARCH))?;
        }
        context.query.add(group)
    }

    /// Visibility: appends `hideFromSearch:0` unless explicitly
    /// disabled.
    pub fn visibility(
        options: &SearchOptions,
        _config: &SearchConfig,
        context: &mut QueryContext,
    ) -> Result<(), QueryError> {
        if options.disable_hide_from_search {
            return Ok(());
        }
        context
            .query
            .add(format!("{}:0", fields::HIDE_FROM_SEARCH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> QueryPipeline {
        QueryPipeline::new(SearchConfig::default())
    }

    #[test]
    fn default_options_only_filter_visibility() {
        let compiled = pipeline().compile(&SearchOptions::new()).unwrap();
        assert_eq!(compiled.raw().as_deref(), Some("(hideFromSearch:0)"));
        assert!(compiled.terms.is_empty());
    }

    #[test]
    fn all_phases_combine_under_one_outer_and() {
        let options = SearchOptions::new()
            .with_text("rust")
            .with_root_ids([1012])
            .with_content_types(["newsPage"]);

        let raw = pipeline().compile(&options).unwrap().raw().unwrap();

        assert!(raw.starts_with("((nodeTypeAlias:newsPage) AND "));
        assert!(raw.contains("(path_search:1012)"));
        assert!(raw.ends_with(" AND hideFromSearch:0)"));
    }

    #[test]
    fn type_scoping_is_an_or_group() {
        let options = SearchOptions::new().with_content_types(["newsPage", "eventPage"]);
        let raw = pipeline().compile(&options).unwrap().raw().unwrap();
        assert!(raw.contains("(nodeTypeAlias:newsPage OR nodeTypeAlias:eventPage)"));
    }

    #[test]
    fn path_scoping_is_an_or_group_per_root() {
        let options = SearchOptions::new().with_root_ids([1012, 2024]);
        let raw = pipeline().compile(&options).unwrap().raw().unwrap();
        assert!(raw.contains("(path_search:1012 OR path_search:2024)"));
    }

    #[test]
    fn disabled_visibility_filter_is_absent() {
        let options = SearchOptions::new().without_visibility_filter();
        let compiled = pipeline().compile(&options).unwrap();
        assert!(compiled.raw().is_none());
    }

    #[test]
    fn text_reduced_to_no_terms_adds_no_fragment() {
        // Distinct from a query that matches nothing: the text phase is
        // skipped entirely.
        let options = SearchOptions::new().with_text("!!! ???");
        let raw = pipeline().compile(&options).unwrap().raw().unwrap();
        assert_eq!(raw, "(hideFromSearch:0)");
    }

    #[test]
    fn text_search_uses_default_boosted_triplet() {
        let options = SearchOptions::new().with_text("rust");
        let compiled = pipeline().compile(&options).unwrap();
        let raw = compiled.raw().unwrap();

        assert!(raw.contains("nodeName:(rust rust*)^50"));
        assert!(raw.contains("title:(rust rust*)^40"));
        assert!(raw.contains("teaser:(rust rust*)^20"));
        assert_eq!(compiled.terms, vec!["rust"]);
        assert_eq!(compiled.fields.len(), 3);
    }

    #[test]
    fn explicitly_empty_field_list_falls_back_to_lci_triplet() {
        let options = SearchOptions::new()
            .with_text("rust")
            .with_text_fields(FieldList::new());

        let raw = pipeline().compile(&options).unwrap().raw().unwrap();

        assert!(raw.contains("nodeName_lci:(rust rust*)"));
        assert!(raw.contains("contentTeasertext_lci:(rust rust*)"));
        assert!(raw.contains("contentBody_lci:(rust rust*)"));
    }

    #[test]
    fn configured_field_list_wins_over_default() {
        let config: SearchConfig = toml::from_str(
            r#"
            [[text_fields]]
            name = "heading"
            boost = 10
            "#,
        )
        .unwrap();

        let options = SearchOptions::new().with_text("rust");
        let raw = QueryPipeline::new(config)
            .compile(&options)
            .unwrap()
            .raw()
            .unwrap();

        assert!(raw.contains("heading:(rust rust*)^10"));
        assert!(!raw.contains("nodeName:"));
    }

    #[test]
    fn options_fields_win_over_configuration() {
        let options = SearchOptions::new()
            .with_text("rust")
            .with_text_fields(FieldList::from_names(["summary"]));

        let raw = pipeline().compile(&options).unwrap().raw().unwrap();

        assert!(raw.contains("summary:(rust rust*)"));
        assert!(!raw.contains("nodeName:"));
    }

    #[test]
    fn replacing_a_phase_changes_only_that_phase() {
        let mut pipeline = pipeline();
        pipeline.set_phase(Phase::Visibility, |_, _, context| {
            context.query.add("published:1")
        });

        let raw = pipeline.compile(&SearchOptions::new()).unwrap().raw().unwrap();

        assert_eq!(raw, "(published:1)");
    }

    #[test]
    fn removing_a_phase_skips_it() {
        let mut pipeline = pipeline();
        pipeline.without_phase(Phase::Visibility);

        let compiled = pipeline.compile(&SearchOptions::new()).unwrap();

        assert!(compiled.raw().is_none());
    }

    #[test]
    fn custom_phase_appends_after_defaults() {
        let mut pipeline = pipeline();
        pipeline.push_phase(Phase::Custom("language"), |_, _, context| {
            context.query.add("language:en")
        });

        let raw = pipeline.compile(&SearchOptions::new()).unwrap().raw().unwrap();

        assert_eq!(raw, "(hideFromSearch:0 AND language:en)");
        assert_eq!(pipeline.phases().count(), 5);
    }

    #[test]
    fn leading_wildcard_flag_reaches_the_compiler() {
        let options = SearchOptions::new()
            .with_text("rust")
            .with_text_fields(FieldList::from_names(["title"]))
            .with_leading_wildcard();

        let raw = pipeline().compile(&options).unwrap().raw().unwrap();

        assert!(raw.contains("title:(rust rust* *rust *rust*)"));
    }
}
