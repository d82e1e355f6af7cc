//! SearchEngine - filters, ranks and limits scored records

use super::orchestrator::{score_records, ScoredRecord};
use super::record::Searchable;
use crate::error::{SearchError, SearchResult};
use crate::scoring::{sort_by_rank, ScoringResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A ranked search hit
pub type SearchHit<'a, R> = ScoredRecord<'a, R>;

/// Search configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Records must score strictly above this (0.0-1.0)
    pub min_score: f64,
    /// Maximum hits to return, unlimited if `None`
    pub max_results: Option<usize>,
    /// Score given to every record when the query is blank (0.0-1.0)
    pub neutral_score: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_score: 0.0,
            max_results: None,
            neutral_score: 1.0,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> SearchResult<()> {
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(SearchError::InvalidConfig(format!(
                "min_score must be within [0, 1], got {}",
                self.min_score
            )));
        }
        if !(0.0..=1.0).contains(&self.neutral_score) {
            return Err(SearchError::InvalidConfig(format!(
                "neutral_score must be within [0, 1], got {}",
                self.neutral_score
            )));
        }
        if self.max_results == Some(0) {
            return Err(SearchError::InvalidConfig(
                "max_results must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Runs queries over caller-owned record slices.
///
/// Holds configuration only, so one engine can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    /// Create a new SearchEngine with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration
    pub fn with_config(config: SearchConfig) -> SearchResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search `records` for `query`, best hits first.
    ///
    /// A blank query returns every record in input order with the neutral
    /// score and no field matches. Otherwise records at or below `min_score`
    /// are dropped, the rest are ranked and truncated to `max_results`.
    pub fn search<'a, R: Searchable>(&self, records: &'a [R], query: &str) -> Vec<SearchHit<'a, R>> {
        if query.trim().is_empty() {
            debug!(records = records.len(), "blank query, returning all records unranked");
            return records
                .iter()
                .map(|record| {
                    ScoredRecord::new(
                        record,
                        ScoringResult::new(Vec::new(), self.config.neutral_score),
                    )
                })
                .collect();
        }

        let mut hits: Vec<SearchHit<'a, R>> = score_records(records, query)
            .into_iter()
            .filter(|hit| hit.scoring.total_score > self.config.min_score)
            .collect();

        sort_by_rank(&mut hits, |hit| &hit.scoring);

        if let Some(limit) = self.config.max_results {
            hits.truncate(limit);
        }

        debug!(
            query = query,
            candidates = records.len(),
            hits = hits.len(),
            "search complete"
        );

        hits
    }
}
