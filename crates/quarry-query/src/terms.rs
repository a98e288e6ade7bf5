//! Normalization of free text into search terms.

/// Characters outside the allow-list that are still kept during
/// normalization.
const KEPT_PUNCTUATION: &[char] = &['-', '@', '.', '_'];

/// Normalizes free text into a list of individual search terms.
///
/// Characters outside the allow-list are stripped: ASCII word characters
/// (letters, digits, underscore), the locale letters in `extra_letters`,
/// hyphen, `@`, `.` and space. The
/// remainder is lower-cased and split on whitespace, dropping empty
/// entries. The resulting terms are ready for [`crate::FieldList::compile`].
///
/// Returns an empty list for blank input; callers treat that as "no text
/// constraint", which is distinct from a query that matches nothing.
///
/// # Example
///
/// ```
/// use quarry_query::parse_terms;
///
/// let terms = parse_terms("Grønne ænder! (2023)", "æøåÆØÅ");
/// assert_eq!(terms, vec!["grønne", "ænder", "2023"]);
/// ```
pub fn parse_terms(text: &str, extra_letters: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let stripped: String = text
        .chars()
        .filter(|c| {
            c.is_ascii_alphanumeric()
                || *c == ' '
                || KEPT_PUNCTUATION.contains(c)
                || extra_letters.contains(*c)
        })
        .collect();

    stripped
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
