//! Common error type for the rolodex CLI.

use rolodex_core::SearchError;
use thiserror::Error;

/// Error type for CLI operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Search setup error
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Result type alias using the CLI Error.
pub type Result<T> = std::result::Result<T, Error>;
