// Core algorithm exports
pub mod filters;
pub mod keywords;
pub mod matcher;
pub mod taxonomy;

pub use filters::{detect_major_column, extract_unique_values, filter_rows, resolve_column, FilterOutcome};
pub use keywords::{is_keyword_delimiter, is_query_whitespace, split_keywords, trim_query};
pub use matcher::{fuzzy_match, ProfessionMatcher};
pub use taxonomy::{Category, Taxonomy, TaxonomyError};
