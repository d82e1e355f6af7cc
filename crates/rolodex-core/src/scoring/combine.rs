//! Score combination across fields

use super::field::FieldMatch;
use serde::{Deserialize, Serialize};

/// Bonus added per matching field beyond the first
const MULTI_FIELD_BONUS: f64 = 0.1;

/// Per-record outcome of a search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    /// Fields the query touched, never with tier `None`
    pub matches: Vec<FieldMatch>,
    /// Relevance in [0, 1]
    pub total_score: f64,
}

impl ScoringResult {
    /// No match at all
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(matches: Vec<FieldMatch>, total_score: f64) -> Self {
        Self {
            matches,
            total_score,
        }
    }

    pub fn is_match(&self) -> bool {
        self.total_score > 0.0
    }

    /// Whether any attributed match is `Exact` or `Word` tier
    pub fn has_exact_match(&self) -> bool {
        self.matches.iter().any(|m| m.tier.is_exact())
    }
}

/// Fold field matches into one score: the best field plus 0.1 for every
/// additional matching field, capped at 1.0.
///
/// Non-matches are dropped; the rest keep their order.
pub fn combine_field_scores<I>(field_matches: I) -> ScoringResult
where
    I: IntoIterator<Item = FieldMatch>,
{
    let matches: Vec<FieldMatch> = field_matches
        .into_iter()
        .filter(|m| m.tier.is_match() && m.score > 0.0)
        .collect();

    if matches.is_empty() {
        return ScoringResult::empty();
    }

    let base = matches.iter().map(|m| m.score).fold(0.0_f64, f64::max);
    let bonus = MULTI_FIELD_BONUS * (matches.len() - 1) as f64;
    let total_score = (base + bonus).min(1.0);

    ScoringResult::new(matches, total_score)
}
