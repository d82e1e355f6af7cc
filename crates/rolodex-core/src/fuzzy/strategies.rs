//! Fuzzy matching strategies
//!
//! Each strategy expects a trimmed, lowercase query and item and returns
//! `None` when it does not apply. `fuzzy_match` runs them in order of
//! specificity and keeps the first hit.

use super::types::{MatchResult, MatchTier};
use crate::distance::{levenshtein_distance, max_edit_distance};

pub const EXACT_SCORE: f64 = 1.0;
pub const WORD_SCORE: f64 = 0.95;
pub const SUBSTRING_SCORE: f64 = 0.8;

/// Fuzzy scores are `FUZZY_BASE + similarity * FUZZY_SPAN`, i.e. within [0.4, 0.6].
const FUZZY_BASE: f64 = 0.4;
const FUZZY_SPAN: f64 = 0.2;

/// Try exact match (score: 1.0)
#[inline]
pub fn exact_match(query: &str, item: &str) -> Option<MatchResult> {
    if query == item {
        Some(MatchResult::new(MatchTier::Exact, EXACT_SCORE))
    } else {
        None
    }
}

/// Try exact word match (score: 0.95)
/// Matches when query equals one whitespace-delimited word of item
#[inline]
pub fn word_match(query: &str, item: &str) -> Option<MatchResult> {
    if item.split_whitespace().any(|word| word == query) {
        Some(MatchResult::new(MatchTier::Word, WORD_SCORE))
    } else {
        None
    }
}

/// Try substring match (score: 0.8)
/// Uses SIMD via memchr on native, pure Rust on WASM
#[inline]
pub fn substring_match(query: &str, item: &str) -> Option<MatchResult> {
    #[cfg(all(not(target_arch = "wasm32"), feature = "simd"))]
    let found = memchr::memmem::find(item.as_bytes(), query.as_bytes()).is_some();

    #[cfg(any(target_arch = "wasm32", not(feature = "simd")))]
    let found = item.contains(query);

    if found {
        Some(MatchResult::new(MatchTier::Substring, SUBSTRING_SCORE))
    } else {
        None
    }
}

/// Try edit distance match (score: 0.4-0.6)
///
/// The whole item is tried first. If it is too far away, the closest word of
/// the item (first one on ties) is used instead, and similarity is measured
/// against that word's length.
pub fn edit_distance_match(query: &str, item: &str) -> Option<MatchResult> {
    let query_len = query.chars().count();
    let max_distance = max_edit_distance(query_len);

    let whole = levenshtein_distance(query, item);
    let (distance, compared_len) = if whole <= max_distance {
        (whole, item.chars().count())
    } else {
        item.split_whitespace()
            .map(|word| (levenshtein_distance(query, word), word.chars().count()))
            .filter(|(distance, _)| *distance <= max_distance)
            .min_by_key(|(distance, _)| *distance)?
    };

    let longest = query_len.max(compared_len);
    if longest == 0 {
        return None;
    }

    let similarity = 1.0 - distance as f64 / longest as f64;
    Some(MatchResult::new(
        MatchTier::Fuzzy,
        FUZZY_BASE + similarity * FUZZY_SPAN,
    ))
}

/// Apply all strategies in order, return first match
pub fn score_match(query_lower: &str, item_lower: &str) -> Option<MatchResult> {
    exact_match(query_lower, item_lower)
        .or_else(|| word_match(query_lower, item_lower))
        .or_else(|| substring_match(query_lower, item_lower))
        .or_else(|| edit_distance_match(query_lower, item_lower))
}

/// Classify how `query` relates to `text`.
///
/// Both sides are trimmed and lowercased. Blank input on either side is never
/// a match.
pub fn fuzzy_match(query: &str, text: &str) -> MatchResult {
    let query_lower = query.trim().to_lowercase();
    let text_lower = text.trim().to_lowercase();
    if query_lower.is_empty() || text_lower.is_empty() {
        return MatchResult::none();
    }

    score_match(&query_lower, &text_lower).unwrap_or_default()
}

/// Best `fuzzy_match` of `query` across `texts`. The earliest text wins ties.
pub fn fuzzy_match_array<S: AsRef<str>>(query: &str, texts: &[S]) -> MatchResult {
    texts
        .iter()
        .map(|text| fuzzy_match(query, text.as_ref()))
        .fold(MatchResult::none(), |best, candidate| {
            if candidate.score > best.score {
                candidate
            } else {
                best
            }
        })
}
