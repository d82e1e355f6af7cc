//! Search error types

use thiserror::Error;

/// Errors raised when setting up a search.
///
/// Matching and scoring themselves never fail; degenerate input just scores 0.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// A configuration value is out of range
    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for search setup
pub type SearchResult<T> = Result<T, SearchError>;
