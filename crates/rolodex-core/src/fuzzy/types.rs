//! Match tiers and results

use serde::{Deserialize, Serialize};

/// How a query relates to a single text value, from strongest to weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Query equals the whole text
    Exact,
    /// Query equals one whitespace-delimited word of the text
    Word,
    /// Text contains the query
    Substring,
    /// Within the allowed edit distance of the text or one of its words
    Fuzzy,
    /// No relation
    None,
}

impl MatchTier {
    /// Whether this tier counts as an exact hit (`Exact` or `Word`).
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact | Self::Word)
    }

    pub fn is_match(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Reported kind. `Exact` and `Word` share the `"exact"` kind and differ
    /// only by score.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Exact | Self::Word => "exact",
            Self::Substring => "substring",
            Self::Fuzzy => "fuzzy",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Word => write!(f, "word"),
            Self::Substring => write!(f, "substring"),
            Self::Fuzzy => write!(f, "fuzzy"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Outcome of matching one query string against one text value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub tier: MatchTier,
    /// Base score in [0, 1]
    pub score: f64,
}

impl MatchResult {
    pub fn new(tier: MatchTier, score: f64) -> Self {
        Self { tier, score }
    }

    /// The "no match" sentinel: tier `None`, score 0.
    pub const fn none() -> Self {
        Self {
            tier: MatchTier::None,
            score: 0.0,
        }
    }

    pub fn is_match(&self) -> bool {
        self.tier.is_match() && self.score > 0.0
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_and_word_share_kind() {
        assert_eq!(MatchTier::Exact.kind(), "exact");
        assert_eq!(MatchTier::Word.kind(), "exact");
        assert_ne!(MatchTier::Exact, MatchTier::Word);
        assert!(MatchTier::Word.is_exact());
        assert!(!MatchTier::Substring.is_exact());
    }

    #[test]
    fn test_none_sentinel() {
        let none = MatchResult::none();
        assert_eq!(none.tier, MatchTier::None);
        assert_eq!(none.score, 0.0);
        assert!(!none.is_match());
        assert_eq!(MatchResult::default(), none);
    }

    #[test]
    fn test_tier_serializes_snake_case() {
        let json = serde_json::to_string(&MatchTier::Substring).unwrap();
        assert_eq!(json, "\"substring\"");
    }
}
