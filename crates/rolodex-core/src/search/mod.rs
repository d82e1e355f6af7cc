//! Record search
//!
//! [`score_record`] and [`score_records`] score caller-owned records against a
//! query without filtering or sorting. [`SearchEngine`] is the usual entry
//! point: it drops non-matches, ranks the rest with
//! [`compare`](crate::scoring::compare) and applies the configured limit.
//!
//! # Example
//!
//! ```rust
//! use rolodex_core::search::{Contact, SearchEngine};
//!
//! let records = vec![
//!     Contact::new("1", "John Smith").with_tags(["engineer"]),
//!     Contact::new("2", "Jane Doe"),
//! ];
//!
//! let hits = SearchEngine::new().search(&records, "john engineer");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].record.id, "1");
//! ```

mod engine;
mod orchestrator;
mod record;

pub use engine::{SearchConfig, SearchEngine, SearchHit};
pub use orchestrator::{score_record, score_records, ScoredRecord, PARALLEL_THRESHOLD};
pub use record::{Contact, Searchable};
