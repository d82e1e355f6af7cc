//! Field weighting

use crate::fuzzy::{MatchResult, MatchTier};
use serde::{Deserialize, Serialize};

/// Which record attribute produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Name,
    Tag,
    Note,
}

impl FieldKind {
    /// Weight multiplier applied to matches in this field
    pub fn weight(&self) -> f64 {
        match self {
            Self::Name => 1.0,
            Self::Tag => 0.9,
            Self::Note => 0.7,
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Tag => write!(f, "tag"),
            Self::Note => write!(f, "note"),
        }
    }
}

/// A match result attributed to a field, with the field weight applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldMatch {
    pub field: FieldKind,
    pub tier: MatchTier,
    pub score: f64,
}

impl FieldMatch {
    pub fn new(field: FieldKind, tier: MatchTier, score: f64) -> Self {
        Self { field, tier, score }
    }
}

/// Weight a match by the field it came from. The tier passes through.
pub fn score_field(field: FieldKind, result: MatchResult) -> FieldMatch {
    FieldMatch::new(field, result.tier, result.score * field.weight())
}
