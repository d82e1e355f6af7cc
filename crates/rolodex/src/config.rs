//! Search options resolved from flags and environment

use std::path::PathBuf;

use clap::Args;
use rolodex_core::SearchConfig;

use crate::error::Result;

/// Options shared by commands that run a search.
///
/// Each flag falls back to a `ROLODEX_*` environment variable, then to the
/// engine default.
#[derive(Args, Debug, Clone, Default)]
pub struct SearchOptions {
    /// JSON file with the records to search
    #[arg(long, short = 'r', env = "ROLODEX_RECORDS")]
    pub records: PathBuf,

    /// Only return records scoring strictly above this (0.0-1.0)
    #[arg(long, env = "ROLODEX_MIN_SCORE")]
    pub min_score: Option<f64>,

    /// Maximum number of results
    #[arg(long, short = 'n', env = "ROLODEX_MAX_RESULTS")]
    pub limit: Option<usize>,

    /// Score reported for every record when the query is blank (0.0-1.0)
    #[arg(long, env = "ROLODEX_NEUTRAL_SCORE")]
    pub neutral_score: Option<f64>,
}

impl SearchOptions {
    /// Build a validated engine configuration
    pub fn to_config(&self) -> Result<SearchConfig> {
        let defaults = SearchConfig::default();
        let config = SearchConfig {
            min_score: self.min_score.unwrap_or(defaults.min_score),
            max_results: self.limit.or(defaults.max_results),
            neutral_score: self.neutral_score.unwrap_or(defaults.neutral_score),
        };
        config.validate()?;
        Ok(config)
    }
}
