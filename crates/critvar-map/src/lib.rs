//! Similarity matching of dataset columns against critical variables.
//!
//! The pipeline is leaf-first:
//!
//! - [`normalize_text`] canonicalizes column names and synonyms
//! - [`similarity`] scores two normalized strings (Ratcliff-Obershelp)
//! - [`build_candidates`] normalizes every column once per search
//! - [`match_variable`] picks the best column for one variable, or
//!   aggregates diet columns by food category
//! - [`SearchEngine`] runs the matcher for a whole catalogue
//! - [`compute_statistics`], [`improvement_suggestions`] and
//!   [`classify_quality`] summarize the results
//!
//! Matching is total: degenerate input (no columns, no variables, blank
//! synonyms) yields `found = false` results rather than errors.

#![deny(unsafe_code)]

pub mod candidates;
pub mod engine;
pub mod matcher;
pub mod patterns;
pub mod score;
pub mod stats;
pub mod utils;

pub use candidates::{Candidate, build_candidates};
pub use engine::{SearchEngine, search_candidates};
pub use matcher::{DIET_NO_MATCH_NOTE, diet_notes, match_diet, match_standard, match_variable};
pub use patterns::{FRUIT_KEYWORDS, VEGETABLE_KEYWORDS, classify_diet_column};
pub use score::similarity;
pub use stats::{classify_quality, compute_statistics, improvement_suggestions};
pub use utils::{normalize_text, round_to};
