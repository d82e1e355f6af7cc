//! Case-insensitive Levenshtein edit distance

use strsim::levenshtein;

/// Edit distance between `a` and `b`, ignoring case.
///
/// Insertions, deletions and substitutions all cost 1. Lengths are measured in
/// characters, so `levenshtein_distance("", s)` is the char count of `s`.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

/// Largest edit distance still accepted as a fuzzy match for a query of
/// `query_len` characters.
#[inline]
pub fn max_edit_distance(query_len: usize) -> usize {
    match query_len {
        0..=2 => 0,
        3..=4 => 1,
        5..=8 => 2,
        _ => 3,
    }
}
