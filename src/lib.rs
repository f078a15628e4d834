//! Profession Match - taxonomy-aware major filtering for job posting tables
//!
//! This library provides the matching engine that decides whether a posting's
//! "required major" cell matches a user's query. Specific majors the user
//! holds are bridged to the broad categories postings usually state through
//! a [`Taxonomy`].

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{fuzzy_match, ProfessionMatcher, Taxonomy, TaxonomyError};
pub use crate::models::{PostingRow, PostingTable, TableError};
