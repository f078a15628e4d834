use crate::core::keywords::{split_keywords, trim_query};
use crate::core::taxonomy::Taxonomy;

/// Decide whether a posting's major requirement matches a user query
///
/// # Rules
/// 1. A blank query matches everything
/// 2. An empty requirement never matches a non-blank query
/// 3. Otherwise the query is split into keywords and the posting matches if
///    any keyword satisfies either direction:
///    - Direction A: the requirement contains the keyword (case-insensitive)
///    - Direction B: the keyword is a listed major of some category and the
///      requirement names that category
///
/// The major lookup in direction B is exact equality, not substring: a
/// partial major name such as "新闻" never bridges to "新闻传播学类".
pub fn fuzzy_match(requirement: &str, query: &str, taxonomy: &Taxonomy) -> bool {
    if trim_query(query).is_empty() {
        return true;
    }
    if requirement.is_empty() {
        return false;
    }

    let normalized_requirement = requirement.to_lowercase();

    split_keywords(query)
        .into_iter()
        .any(|keyword| keyword_matches(&normalized_requirement, keyword, taxonomy))
}

/// Evaluate one keyword against an already lower-cased requirement
fn keyword_matches(normalized_requirement: &str, keyword: &str, taxonomy: &Taxonomy) -> bool {
    let raw_keyword = trim_query(keyword);
    let normalized_keyword = raw_keyword.to_lowercase();
    if normalized_keyword.is_empty() {
        return false;
    }

    // Direction A
    if normalized_requirement.contains(&normalized_keyword) {
        return true;
    }

    // Direction B
    taxonomy
        .iter()
        .filter(|(_, majors)| {
            majors
                .iter()
                .any(|major| major == raw_keyword || major.to_lowercase() == normalized_keyword)
        })
        .any(|(category, _)| normalized_requirement.contains(&category.to_lowercase()))
}

/// Matcher bound to one taxonomy
///
/// Holds no mutable state; share it across threads behind an `Arc` and call
/// [`ProfessionMatcher::matches`] once per (posting, query) pair.
#[derive(Debug, Clone, Default)]
pub struct ProfessionMatcher {
    taxonomy: Taxonomy,
}

impl ProfessionMatcher {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self { taxonomy }
    }

    pub fn with_default_taxonomy() -> Self {
        Self {
            taxonomy: Taxonomy::builtin(),
        }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Match requirement text against a query using this matcher's taxonomy
    pub fn matches(&self, requirement: &str, query: &str) -> bool {
        fuzzy_match(requirement, query, &self.taxonomy)
    }

    /// Match a raw cell value; anything other than a string is treated as
    /// "no requirement stated"
    pub fn matches_cell(&self, cell: Option<&serde_json::Value>, query: &str) -> bool {
        let requirement = match cell {
            Some(serde_json::Value::String(text)) => text.as_str(),
            _ => "",
        };

        self.matches(requirement, query)
    }
}
