//! Fuzzy Matcher
//!
//! Classifies how a query relates to a text value. Strategies, in order of
//! specificity (first hit wins):
//!
//! 1. Exact match (score: 1.0)
//! 2. Exact word match (score: 0.95)
//! 3. Substring match (score: 0.8)
//! 4. Levenshtein edit distance (score: 0.4-0.6)
//!
//! The edit distance budget grows with the query length: no typos up to 2
//! characters, 1 up to 4, 2 up to 8, then 3.
//!
//! # Example
//!
//! ```rust
//! use rolodex_core::fuzzy::{fuzzy_match, fuzzy_match_array, MatchTier};
//!
//! assert_eq!(fuzzy_match("john", "John Doe").tier, MatchTier::Word);
//! assert_eq!(fuzzy_match_array("rust", &["go", "rustacean"]).tier, MatchTier::Substring);
//! ```

mod strategies;
mod types;

pub use strategies::{
    edit_distance_match, exact_match, fuzzy_match, fuzzy_match_array, substring_match,
    word_match, EXACT_SCORE, SUBSTRING_SCORE, WORD_SCORE,
};
pub use types::{MatchResult, MatchTier};
