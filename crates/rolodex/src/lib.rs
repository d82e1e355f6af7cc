//! # Rolodex CLI Library
//!
//! Infrastructure behind the `rolodex` binary:
//! - **config**: search options from flags and `ROLODEX_*` environment variables
//! - **records**: JSON record file loading
//! - **output**: JSON views of ranked hits and match results
//! - **error**: Common error type
//! - **logging**: tracing setup
//!
//! The matching and ranking itself lives in `rolodex-core`.

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod records;

pub use config::SearchOptions;
pub use error::{Error, Result};
pub use output::{HitView, MatchResultView, MatchView};
pub use records::{load_records, parse_records};
