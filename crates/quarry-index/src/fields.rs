//! Field name and format conventions for the synthetic index fields.
//!
//! These names are part of the interoperability contract with any
//! existing index or consumer, and must not change.

/// The node's ancestor-ID path, comma-joined (e.g. `-1,1012,1045`).
pub const PATH: &str = "path";

/// Space-joined ancestor IDs, enabling ancestor-ID term matching.
pub const PATH_SEARCH: &str = "path_search";

/// Visibility flag, `"1"` when the node is hidden from search.
pub const HIDE_FROM_SEARCH: &str = "hideFromSearch";

/// The node's name.
pub const NODE_NAME: &str = "nodeName";

/// The node's title.
pub const TITLE: &str = "title";

/// The node's teaser text.
pub const TEASER: &str = "teaser";

/// The node's content-type alias, used for type scoping.
pub const NODE_TYPE_ALIAS: &str = "nodeTypeAlias";

/// JSON array of `{value, boost}` pairs for per-tier boosting.
pub const BOOST_WORDS: &str = "searchBoostWords";

/// Creation date of the node.
pub const CREATE_DATE: &str = "createDate";

/// Last update date of the node.
pub const UPDATE_DATE: &str = "updateDate";

/// Editorial content date of the node.
pub const CONTENT_DATE: &str = "contentDate";

/// Suffix for searchable expansions (CSV, references, block lists).
pub const SEARCH_SUFFIX: &str = "_search";

/// Suffix for lower-cased duplicate fields.
pub const LCI_SUFFIX: &str = "_lci";

/// Suffix for range-queryable date fields.
pub const RANGE_SUFFIX: &str = "_range";

/// Date formats used by the indexing pipeline.
pub mod formats {
    /// Zero-padded numeric date format that string-sorts chronologically,
    /// enabling lexicographic range queries (`yyyyMMddHHmmss000`).
    pub const SORTABLE: &str = "%Y%m%d%H%M%S000";

    /// The format the CMS uses when adding date values to the index
    /// (`dd-MM-yyyy HH:mm:ss`).
    pub const CMS: &str = "%d-%m-%Y %H:%M:%S";
}
