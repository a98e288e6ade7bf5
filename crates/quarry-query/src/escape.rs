//! Escaping of engine-reserved characters.

/// Characters reserved by the engine's query syntax.
///
/// `&&` and `||` are two-character operators, but escaping the individual
/// characters is sufficient to neutralize them.
const RESERVED: &str = "+-&|!(){}[]^\"~*?:\\/";

/// Escapes engine-reserved characters in a search term.
///
/// Every reserved character is prefixed with a backslash so the term is
/// matched literally instead of being interpreted as query syntax.
///
/// # Example
///
/// ```
/// use quarry_query::escape;
///
/// assert_eq!(escape("c++"), "c\\+\\+");
/// assert_eq!(escape("plain"), "plain");
/// ```
pub fn escape(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if RESERVED.contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_term_unchanged() {
        assert_eq!(escape("hello"), "hello");
    }

    #[test]
    fn empty_term() {
        assert_eq!(escape(""), "");
    }

    #[test]
    fn escapes_every_reserved_character() {
        for c in "+-&|!(){}[]^\"~*?:\\/".chars() {
            let escaped = escape(&c.to_string());
            assert_eq!(escaped, format!("\\{c}"), "character {c:?}");
        }
    }

    #[test]
    fn escapes_boolean_operators() {
        assert_eq!(escape("a&&b"), "a\\&\\&b");
        assert_eq!(escape("a||b"), "a\\|\\|b");
    }

    #[test]
    fn mixed_content() {
        assert_eq!(escape("rust:async"), "rust\\:async");
        assert_eq!(escape("(1+1)"), "\\(1\\+1\\)");
    }

    #[test]
    fn non_ascii_untouched() {
        assert_eq!(escape("smørrebrød"), "smørrebrød");
    }
}
