//! Field scoring, combination and ranking
//!
//! - [`score_field`] weights a match by its field (name 1.0, tag 0.9, note 0.7)
//! - [`combine_field_scores`] folds field matches into one [`ScoringResult`]
//! - [`compare`] orders results best-first

mod combine;
mod field;
mod rank;

pub use combine::{combine_field_scores, ScoringResult};
pub use field::{score_field, FieldKind, FieldMatch};
pub use rank::{compare, sort_by_rank};
