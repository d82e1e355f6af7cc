//! Conjunctive multi-word scoring of records
//!
//! Every word of the query has to match somewhere in the record (name, any
//! tag or the note). The record score is the mean of the per-word best
//! scores plus a small bonus per extra word. Field attribution is computed
//! separately from the whole query string and does not feed the score.

use super::record::Searchable;
use crate::fuzzy::{fuzzy_match, fuzzy_match_array};
use crate::scoring::{score_field, FieldKind, FieldMatch, ScoringResult};
use serde::Serialize;

#[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
use rayon::prelude::*;

/// Record count from which `score_records` fans out to the rayon pool
pub const PARALLEL_THRESHOLD: usize = 1000;

const WORD_BONUS_STEP: f64 = 0.05;
const WORD_BONUS_CAP: f64 = 0.2;

/// A record paired with its score for one query
#[derive(Debug, Serialize)]
pub struct ScoredRecord<'a, R> {
    pub record: &'a R,
    pub scoring: ScoringResult,
}

impl<'a, R> ScoredRecord<'a, R> {
    pub fn new(record: &'a R, scoring: ScoringResult) -> Self {
        Self { record, scoring }
    }
}

/// Best unweighted score `word` reaches in any field of `record`
fn best_word_score<R: Searchable + ?Sized>(record: &R, word: &str) -> f64 {
    let mut best = fuzzy_match(word, record.name())
        .score
        .max(fuzzy_match_array(word, record.tags()).score);

    if let Some(note) = record.note() {
        best = best.max(fuzzy_match(word, note).score);
    }

    best
}

/// Weighted matches of the whole query per field, in name, tag, note order
fn attribute_fields<R: Searchable + ?Sized>(record: &R, query: &str) -> Vec<FieldMatch> {
    let name = fuzzy_match(query, record.name());
    let tags = fuzzy_match_array(query, record.tags());
    let note = record.note().map(|note| fuzzy_match(query, note));

    [
        Some((FieldKind::Name, name)),
        Some((FieldKind::Tag, tags)),
        note.map(|note| (FieldKind::Note, note)),
    ]
    .into_iter()
    .flatten()
    .filter(|(_, result)| result.is_match())
    .map(|(field, result)| score_field(field, result))
    .collect()
}

/// Score one record against a (possibly multi-word) query.
///
/// Returns an empty result if the query is blank or any word fails to match.
pub fn score_record<R: Searchable + ?Sized>(record: &R, query: &str) -> ScoringResult {
    let words: Vec<&str> = query.split_whitespace().collect();
    if words.is_empty() {
        return ScoringResult::empty();
    }

    let mut sum = 0.0;
    for word in &words {
        let best = best_word_score(record, word);
        if best <= 0.0 {
            return ScoringResult::empty();
        }
        sum += best;
    }

    let average = sum / words.len() as f64;
    let bonus = (WORD_BONUS_STEP * (words.len() - 1) as f64).min(WORD_BONUS_CAP);
    let total_score = (average + bonus).min(1.0);

    ScoringResult::new(attribute_fields(record, query), total_score)
}

/// Score every record, keeping input order. Sorting is left to the caller.
#[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
pub fn score_records<'a, R: Searchable>(records: &'a [R], query: &str) -> Vec<ScoredRecord<'a, R>> {
    if records.len() >= PARALLEL_THRESHOLD {
        records
            .par_iter()
            .map(|record| ScoredRecord::new(record, score_record(record, query)))
            .collect()
    } else {
        score_sequential(records, query)
    }
}

/// Score every record, keeping input order. Sorting is left to the caller.
#[cfg(any(target_arch = "wasm32", not(feature = "parallel")))]
pub fn score_records<'a, R: Searchable>(records: &'a [R], query: &str) -> Vec<ScoredRecord<'a, R>> {
    score_sequential(records, query)
}

fn score_sequential<'a, R: Searchable>(records: &'a [R], query: &str) -> Vec<ScoredRecord<'a, R>> {
    records
        .iter()
        .map(|record| ScoredRecord::new(record, score_record(record, query)))
        .collect()
}
