//! Boolean query-fragment trees.

use std::fmt;

use crate::QueryError;

/// The boolean operator joining the children of a [`QueryList`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryOperator {
    /// All children must match.
    #[default]
    And,
    /// At least one child must match.
    Or,
}

impl QueryOperator {
    /// Returns the textual form used in the rendered query.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// A child of a [`QueryList`]: either a raw query fragment or a nested
/// group.
///
/// Only these two kinds exist; anything else a caller might want to add
/// has to be rendered to query text first, which keeps ad-hoc string
/// concatenation out of the higher-level combinators.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// A raw engine query fragment, e.g. `hideFromSearch:0`.
    Raw(String),
    /// A nested boolean group with its own operator and exclusion flag.
    Group(QueryList),
}

impl From<String> for Fragment {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

impl From<&str> for Fragment {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_string())
    }
}

impl From<QueryList> for Fragment {
    fn from(value: QueryList) -> Self {
        Self::Group(value)
    }
}

/// A node in a boolean query tree.
///
/// Children are joined by the list's [`QueryOperator`], wrapped in
/// parentheses and optionally negated as a whole. Nested groups render
/// recursively with their own operator and exclusion flag, enabling
/// arbitrary nesting of included and excluded sub-groups.
///
/// `QueryList` is the sole serialization point to the engine's textual
/// query syntax: all higher-level combinators route through [`add`],
/// never concatenate query strings ad hoc.
///
/// [`add`]: QueryList::add
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryList {
    operator: QueryOperator,
    exclude: bool,
    children: Vec<Fragment>,
}

impl QueryList {
    /// Creates a new AND-type query list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new query list with the given operator.
    pub fn with_operator(operator: QueryOperator) -> Self {
        Self {
            operator,
            ..Self::default()
        }
    }

    /// Creates a new query list whose rendered group is negated.
    pub fn excluding(operator: QueryOperator) -> Self {
        Self {
            operator,
            exclude: true,
            children: Vec::new(),
        }
    }

    /// Returns the operator joining the children of this list.
    pub fn operator(&self) -> QueryOperator {
        self.operator
    }

    /// Returns whether the rendered group is negated.
    pub fn is_exclude(&self) -> bool {
        self.exclude
    }

    /// Returns the number of children in this list.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns whether this list has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the children of this list.
    pub fn children(&self) -> &[Fragment] {
        &self.children
    }

    /// Adds a sub query to the list.
    ///
    /// Accepts raw query text or a nested [`QueryList`]. A blank raw
    /// fragment is a programming error in query construction and is
    /// rejected with [`QueryError::EmptyFragment`]. An empty nested group
    /// is omitted entirely: whether the engine treats `()` as matching
    /// everything or nothing is engine-specific, so empty groups never
    /// reach the rendered query.
    pub fn add(&mut self, fragment: impl Into<Fragment>) -> Result<(), QueryError> {
        match fragment.into() {
            Fragment::Raw(raw) if raw.trim().is_empty() => Err(QueryError::EmptyFragment),
            Fragment::Group(group) if group.is_empty() => Ok(()),
            fragment => {
                self.children.push(fragment);
                Ok(())
            }
        }
    }

    /// Renders this list as a raw engine query.
    ///
    /// All children are joined with the list's operator, the result is
    /// wrapped in parentheses, and the whole group is prefixed with `-`
    /// when the list is excluding. A list with zero children renders as
    /// the empty group `()`; parents never contain such groups (see
    /// [`add`](Self::add)), so this only occurs for a top-level empty
    /// list.
    pub fn render(&self) -> String {
        let inner: Vec<String> = self
            .children
            .iter()
            .map(|child| match child {
                Fragment::Raw(raw) => raw.clone(),
                Fragment::Group(group) => group.render(),
            })
            .collect();

        format!(
            "{}({})",
            if self.exclude { "-" } else { "" },
            inner.join(&format!(" {} ", self.operator.as_str()))
        )
    }
}

impl fmt::Display for QueryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
