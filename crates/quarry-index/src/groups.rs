//! Grouped search.
//!
//! A grouped search runs one search per group against the same search
//! text and aggregates the per-group result lists. There is no
//! cross-group ranking; each group paginates independently.

use std::{collections::BTreeMap, fmt};

use serde::Serialize;

use crate::{options::SearchOptions, result::SearchHit};

/// Builds the options of one group from the resolved group query.
pub type GroupOptionsFn = Box<dyn Fn(&GroupQuery) -> SearchOptions + Send + Sync>;

/// The resolved query of one group within a grouped search: the shared
/// search text plus the group's own pagination window.
#[derive(Debug, Clone)]
pub struct GroupQuery {
    /// The search text, shared across all groups.
    pub text: Option<String>,
    /// The group's pagination offset.
    pub offset: usize,
    /// The group's pagination limit.
    pub limit: usize,
}

/// One group of a grouped search.
pub struct SearchGroup {
    /// A stable ID, used to address per-group pagination parameters.
    pub id: i64,
    /// A display name, echoed on the group's result list.
    pub name: String,
    /// The default number of hits per page.
    pub limit: usize,
    /// Builds the group's search options.
    options: GroupOptionsFn,
}

impl SearchGroup {
    /// Creates a group. The `options` callback decides what the group
    /// actually searches, typically by scoping content types or roots.
    pub fn new<F>(id: i64, name: impl Into<String>, limit: usize, options: F) -> Self
    where
        F: Fn(&GroupQuery) -> SearchOptions + Send + Sync + 'static,
    {
        Self {
            id,
            name: name.into(),
            limit,
            options: Box::new(options),
        }
    }

    /// Builds the group's search options for the given query.
    pub(crate) fn options(&self, query: &GroupQuery) -> SearchOptions {
        (self.options)(query)
    }
}

impl fmt::Debug for SearchGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchGroup")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

/// The caller-supplied parameters of a grouped search: the shared search
/// text and optional per-group pagination overrides keyed by group ID.
#[derive(Debug, Clone, Default)]
pub struct GroupParams {
    /// The search text, shared across all groups.
    pub text: Option<String>,
    /// Per-group limit overrides.
    limits: BTreeMap<i64, usize>,
    /// Per-group offsets.
    offsets: BTreeMap<i64, usize>,
}

impl GroupParams {
    /// Creates parameters for the given search text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Overrides the limit of the group with `group_id`.
    pub fn with_limit(mut self, group_id: i64, limit: usize) -> Self {
        self.limits.insert(group_id, limit);
        self
    }

    /// Sets the offset of the group with `group_id`.
    pub fn with_offset(mut self, group_id: i64, offset: usize) -> Self {
        self.offsets.insert(group_id, offset);
        self
    }

    /// Resolves the query of one group: the override when present,
    /// otherwise the group's own default limit and offset zero.
    pub(crate) fn query_for(&self, group: &SearchGroup) -> GroupQuery {
        GroupQuery {
            text: self.text.clone(),
            offset: self.offsets.get(&group.id).copied().unwrap_or(0),
            limit: self.limits.get(&group.id).copied().unwrap_or(group.limit),
        }
    }
}

/// The result list of one group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupResultList {
    /// The group ID.
    pub id: i64,
    /// The group's display name.
    pub name: String,
    /// The pagination offset that was applied.
    pub offset: usize,
    /// The pagination limit that was applied.
    pub limit: usize,
    /// The total number of matching documents in this group.
    pub total: u64,
    /// The hits of the current page.
    pub hits: Vec<SearchHit>,
}

/// The aggregated result of a grouped search.
#[derive(Debug, Clone, Serialize)]
pub struct GroupedResults {
    /// The individual groups making up the overall result, in the order
    /// the groups were given.
    pub groups: Vec<GroupResultList>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: i64, limit: usize) -> SearchGroup {
        SearchGroup::new(id, format!("group {id}"), limit, |query| {
            SearchOptions::new().with_text(query.text.clone().unwrap_or_default())
        })
    }

    #[test]
    fn params_fall_back_to_the_group_default() {
        let params = GroupParams::new("rust");
        let query = params.query_for(&group(1, 10));
        assert_eq!(query.limit, 10);
        assert_eq!(query.offset, 0);
        assert_eq!(query.text.as_deref(), Some("rust"));
    }

    #[test]
    fn overrides_only_apply_to_their_group() {
        let params = GroupParams::new("rust").with_limit(1, 5).with_offset(1, 20);

        let first = params.query_for(&group(1, 10));
        assert_eq!((first.offset, first.limit), (20, 5));

        let second = params.query_for(&group(2, 10));
        assert_eq!((second.offset, second.limit), (0, 10));
    }
}
