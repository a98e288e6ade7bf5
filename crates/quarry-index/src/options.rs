//! Typed search options.

use quarry_query::FieldList;

/// The typed options of one search.
///
/// Constructed per incoming request, adjusted through the builder-style
/// setters, and treated as immutable once handed to the pipeline for
/// compilation.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// The text to search for. `None` or blank text adds no text
    /// constraint at all, which is distinct from a query that matches
    /// nothing.
    pub text: Option<String>,
    /// Ancestor scope: at least one of these IDs must appear in the path
    /// of a result.
    pub root_ids: Vec<i32>,
    /// Type scope: aliases of the content types to search.
    pub content_types: Vec<String>,
    /// Disables the `hideFromSearch` visibility filter.
    pub disable_hide_from_search: bool,
    /// Whether the search runs in debug mode, retaining the raw query on
    /// the result list.
    pub debug: bool,
    /// Whether terms may also match with leading wildcards (inside
    /// words). Off by default; leading wildcards are expensive for the
    /// engine.
    pub allow_leading_wildcard: bool,
    /// The fields used for text search. `None` falls back to the
    /// configured or default field list; an explicitly empty list falls
    /// back to the lower-cased default triplet.
    pub text_fields: Option<FieldList>,
    /// The name of the engine index to search. `None` uses the
    /// configured default.
    pub index: Option<String>,
    /// Pagination offset, applied to the result stream after execution.
    pub offset: usize,
    /// Pagination limit, applied to the result stream after execution.
    pub limit: Option<usize>,
}

impl SearchOptions {
    /// Creates options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text to search for.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the ancestor scope.
    pub fn with_root_ids(mut self, root_ids: impl IntoIterator<Item = i32>) -> Self {
        self.root_ids = root_ids.into_iter().collect();
        self
    }

    /// Sets the type scope.
    pub fn with_content_types<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content_types = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Disables the `hideFromSearch` visibility filter.
    pub fn without_visibility_filter(mut self) -> Self {
        self.disable_hide_from_search = true;
        self
    }

    /// Enables debug mode.
    pub fn with_debug(mut self) -> Self {
        self.debug = true;
        self
    }

    /// Allows leading wildcards in text search.
    pub fn with_leading_wildcard(mut self) -> Self {
        self.allow_leading_wildcard = true;
        self
    }

    /// Sets the fields used for text search.
    pub fn with_text_fields(mut self, fields: FieldList) -> Self {
        self.text_fields = Some(fields);
        self
    }

    /// Sets the engine index to search.
    pub fn with_index(mut self, name: impl Into<String>) -> Self {
        self.index = Some(name.into());
        self
    }

    /// Sets the pagination window.
    pub fn with_pagination(mut self, offset: usize, limit: usize) -> Self {
        self.offset = offset;
        self.limit = Some(limit);
        self
    }
}
