//! Searchable field descriptors and the query term compiler.

use crate::escape;

/// A single searchable field.
///
/// A field may carry a boost value that biases relevance weight in the
/// compiled query, and a fuzzy factor that enables edit-distance matching.
/// A field with neither is a plain exact/prefix match field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The name of the field in the index.
    pub name: String,
    /// Optional relevance boost. A boost of `0` acts as an opt-out and is
    /// excluded from the boosted clause group.
    pub boost: Option<u32>,
    /// Optional fuzzy factor. Only values in the open interval `(0, 1)`
    /// produce a fuzzy clause; anything else is ignored, not clamped.
    pub fuzz: Option<f32>,
}

impl Field {
    /// Creates a new field with the given boost and fuzzy factors.
    pub fn new(name: impl Into<String>, boost: Option<u32>, fuzz: Option<f32>) -> Self {
        Self {
            name: name.into(),
            boost,
            fuzz,
        }
    }

    /// Creates a plain field without boost or fuzzy matching.
    pub fn plain(name: impl Into<String>) -> Self {
        Self::new(name, None, None)
    }

    /// Creates a field with a relevance boost.
    pub fn boosted(name: impl Into<String>, boost: u32) -> Self {
        Self::new(name, Some(boost), None)
    }

    /// Creates a field with a fuzzy factor.
    pub fn fuzzy(name: impl Into<String>, fuzz: f32) -> Self {
        Self::new(name, None, Some(fuzz))
    }

    /// Returns whether this field contributes a boosted clause.
    fn has_boost(&self) -> bool {
        self.boost.is_some_and(|b| b != 0)
    }

    /// Returns whether this field contributes a fuzzy clause.
    fn has_fuzz(&self) -> bool {
        self.fuzz.is_some_and(|f| f > 0.0 && f < 1.0)
    }
}

/// An ordered list of searchable fields.
///
/// The order only affects the ordering of generated clauses, never the
/// semantics of the compiled query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldList {
    fields: Vec<Field>,
}

impl FieldList {
    /// Creates a new, empty field list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list of plain fields from the given names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: names.into_iter().map(Field::plain).collect(),
        }
    }

    /// Adds a field to the end of the list.
    pub fn add(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Adds all of the given fields to the end of the list.
    pub fn add_all<I: IntoIterator<Item = Field>>(&mut self, fields: I) {
        self.fields.extend(fields);
    }

    /// Returns the number of fields in the list.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns whether the list is valid for compilation, which is when it
    /// contains at least one field.
    pub fn is_valid(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Returns whether at least one field has a non-zero boost value.
    pub fn has_boost_values(&self) -> bool {
        self.fields.iter().any(Field::has_boost)
    }

    /// Returns whether at least one field has a fuzzy factor in `(0, 1)`.
    pub fn has_fuzzy_values(&self) -> bool {
        self.fields.iter().any(Field::has_fuzz)
    }

    /// Returns an iterator over the fields in the list.
    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    /// Compiles the given search terms into a raw engine query fragment.
    ///
    /// Terms are conjunctive: each term produces one parenthesized clause
    /// and the clauses are joined with ` AND `, so a hit must match every
    /// term. Within a clause, three OR-joined groups are emitted:
    ///
    /// 1. one boosted sub-clause per field with a non-zero boost:
    ///    `field:(t t*)^boost`;
    /// 2. one fuzzy sub-clause per field with a fuzzy factor in `(0, 1)`:
    ///    `field:t~fuzz`;
    /// 3. one plain sub-clause per field, always: `field:(t t*)`.
    ///
    /// With `leading_wildcard` enabled, the prefix form `(t t*)` becomes
    /// the four-variant form `(t t* *t *t*)` so terms also match inside
    /// words.
    ///
    /// Terms are expected to already be tokenized and lower-cased (see
    /// [`crate::parse_terms`]); each term is escaped for the engine syntax
    /// before insertion. An empty field list yields an empty `()` clause
    /// per term; callers are expected to supply a fallback field list
    /// beforehand rather than silently skipping text search.
    pub fn compile(&self, terms: &[String], leading_wildcard: bool) -> String {
        let mut out = String::new();

        for (i, term) in terms.iter().enumerate() {
            let escaped = escape(term);

            if i > 0 {
                out.push_str(" AND ");
            }

            out.push('(');

            if self.is_valid() {
                let mut groups: Vec<String> = Vec::new();

                if self.has_boost_values() {
                    let boosted: Vec<String> = self
                        .fields
                        .iter()
                        .filter(|f| f.has_boost())
                        .map(|f| {
                            format!(
                                "{}:{}^{}",
                                f.name,
                                wildcard_group(&escaped, leading_wildcard),
                                f.boost.unwrap_or_default()
                            )
                        })
                        .collect();
                    groups.push(boosted.join(" OR "));
                }

                if self.has_fuzzy_values() {
                    let fuzzy: Vec<String> = self
                        .fields
                        .iter()
                        .filter(|f| f.has_fuzz())
                        .map(|f| format!("{}:{}~{}", f.name, escaped, f.fuzz.unwrap_or_default()))
                        .collect();
                    groups.push(fuzzy.join(" OR "));
                }

                let plain: Vec<String> = self
                    .fields
                    .iter()
                    .map(|f| format!("{}:{}", f.name, wildcard_group(&escaped, leading_wildcard)))
                    .collect();
                groups.push(plain.join(" OR "));

                out.push_str(&groups.join(" OR "));
            }

            out.push(')');
        }

        out
    }
}

impl FromIterator<Field> for FieldList {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FieldList {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Renders the exact-or-prefix match group for a term.
fn wildcard_group(escaped: &str, leading_wildcard: bool) -> String {
    if leading_wildcard {
        format!("({escaped} {escaped}* *{escaped} *{escaped}*)")
    } else {
        format!("({escaped} {escaped}*)")
    }
}
