/// Whitespace as browsers see it in a query box: Unicode whitespace plus the
/// byte order mark U+FEFF, which pasted spreadsheet text often carries
#[inline]
pub fn is_query_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Trim query whitespace (including U+FEFF) from both ends
#[inline]
pub fn trim_query(text: &str) -> &str {
    text.trim_matches(is_query_whitespace)
}

/// Check if a character separates keywords in a user query
///
/// ASCII and full-width semicolons and commas, the enumeration comma `、`,
/// and any query whitespace.
#[inline]
pub fn is_keyword_delimiter(c: char) -> bool {
    matches!(c, ';' | '；' | ',' | '，' | '、') || is_query_whitespace(c)
}

/// Split a query into trimmed, non-empty keywords
///
/// Runs of consecutive delimiters produce no empty keywords. A query made
/// only of delimiters yields an empty list.
pub fn split_keywords(query: &str) -> Vec<&str> {
    query
        .split(is_keyword_delimiter)
        .map(trim_query)
        .filter(|k| !k.is_empty())
        .collect()
}
