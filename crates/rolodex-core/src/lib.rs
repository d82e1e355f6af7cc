//! Rolodex Core Engine
//!
//! Fuzzy matching and relevance ranking for address-book records (names,
//! tags and free-text notes). Everything here is pure and synchronous, so it
//! runs identically in browser (WASM) and server (native) environments and
//! can be called from any number of threads.
//!
//! # Features
//!
//! - `native` - Enable all native optimizations (SIMD, parallel)
//! - `simd` - SIMD-accelerated substring search via memchr
//! - `parallel` - Parallel scoring via rayon for large record sets
//! - `wasm` - WASM-compatible build (excludes native-only features)
//!
//! # Example
//!
//! ```rust
//! use rolodex_core::{fuzzy_match, levenshtein_distance, Contact, MatchTier, SearchEngine};
//!
//! assert_eq!(levenshtein_distance("John", "jon"), 1);
//! assert_eq!(fuzzy_match("soft", "Software").tier, MatchTier::Substring);
//!
//! let records = vec![Contact::new("1", "John Smith"), Contact::new("2", "Jon Snow")];
//! let hits = SearchEngine::new().search(&records, "john");
//! assert_eq!(hits[0].record.id, "1");
//! ```

pub mod distance;
pub mod error;
pub mod fuzzy;
pub mod scoring;
pub mod search;

// Re-export main types at crate root
pub use distance::{levenshtein_distance, max_edit_distance};
pub use error::{SearchError, SearchResult};
pub use fuzzy::{fuzzy_match, fuzzy_match_array, MatchResult, MatchTier};
pub use scoring::{
    combine_field_scores, compare, score_field, sort_by_rank, FieldKind, FieldMatch,
    ScoringResult,
};
pub use search::{
    score_record, score_records, Contact, ScoredRecord, SearchConfig, SearchEngine, SearchHit,
    Searchable,
};
