//! Computation of the hierarchical visibility flag.

use std::collections::HashSet;

use super::path_ids;
use crate::{fields, value_set::ValueSet};

/// Adds the `hideFromSearch` field indicating whether the document should
/// be excluded from search results.
///
/// The flag becomes `"1"` (overwriting any existing value) when at least
/// one ID in the document's ancestor path is in `hidden_roots`, which
/// lets call sites hide whole subtrees without tagging every descendant.
/// Otherwise an existing value is kept as-is (an existing `"1"` is never
/// downgraded) and `"0"` is added only when the field is absent.
pub fn add_hide_from_search(set: &mut ValueSet, hidden_roots: &HashSet<i32>) {
    if path_ids(set).iter().any(|id| hidden_roots.contains(id)) {
        set.set(fields::HIDE_FROM_SEARCH, "1");
        return;
    }

    if set.contains(fields::HIDE_FROM_SEARCH) {
        return;
    }

    set.try_add(fields::HIDE_FROM_SEARCH, "0");
}
