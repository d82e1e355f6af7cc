//! Ranking order over scoring results

use super::combine::ScoringResult;
use std::cmp::Ordering;

/// Total order for best-first sorting. `Less` means `a` ranks before `b`.
///
/// Higher total score first, then more attributed matches, then results with
/// an exact-tier match. Anything still tied compares `Equal`.
pub fn compare(a: &ScoringResult, b: &ScoringResult) -> Ordering {
    b.total_score
        .partial_cmp(&a.total_score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.matches.len().cmp(&a.matches.len()))
        .then_with(|| b.has_exact_match().cmp(&a.has_exact_match()))
}

/// Stable best-first sort of anything carrying a `ScoringResult`
pub fn sort_by_rank<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> &ScoringResult,
{
    items.sort_by(|a, b| compare(key(a), key(b)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy::MatchTier;
    use crate::scoring::field::{FieldKind, FieldMatch};

    fn scored(total_score: f64, tiers: &[MatchTier]) -> ScoringResult {
        ScoringResult::new(
            tiers
                .iter()
                .map(|tier| FieldMatch::new(FieldKind::Name, *tier, total_score))
                .collect(),
            total_score,
        )
    }

    #[test]
    fn test_sorts_by_score_descending() {
        let mut results: Vec<ScoringResult> = [0.9, 0.3, 0.6, 0.1]
            .iter()
            .map(|s| scored(*s, &[MatchTier::Fuzzy]))
            .collect();
        results.sort_by(compare);
        let scores: Vec<f64> = results.iter().map(|r| r.total_score).collect();
        assert_eq!(scores, vec![0.9, 0.6, 0.3, 0.1]);
    }

    #[test]
    fn test_more_matches_wins_tie() {
        let one = scored(0.8, &[MatchTier::Substring]);
        let two = scored(0.8, &[MatchTier::Substring, MatchTier::Fuzzy]);
        assert_eq!(compare(&two, &one), Ordering::Less);
        assert_eq!(compare(&one, &two), Ordering::Greater);
    }

    #[test]
    fn test_exact_tier_wins_tie() {
        let fuzzy = scored(0.8, &[MatchTier::Fuzzy]);
        let word = scored(0.8, &[MatchTier::Word]);
        assert_eq!(compare(&word, &fuzzy), Ordering::Less);
        assert_eq!(compare(&fuzzy, &word), Ordering::Greater);
    }

    #[test]
    fn test_full_tie_is_equal_and_stable() {
        let a = scored(0.5, &[MatchTier::Exact]);
        let b = scored(0.5, &[MatchTier::Word]);
        assert_eq!(compare(&a, &b), Ordering::Equal);

        let mut items = vec![("first", a), ("second", b)];
        sort_by_rank(&mut items, |(_, s)| s);
        assert_eq!(items[0].0, "first");
        assert_eq!(items[1].0, "second");
    }

    #[test]
    fn test_score_dominates_match_count() {
        let high = scored(0.9, &[MatchTier::Fuzzy]);
        let many = scored(0.5, &[MatchTier::Exact, MatchTier::Exact, MatchTier::Exact]);
        assert_eq!(compare(&high, &many), Ordering::Less);
    }
}
