//! The full generate-filter-combine search.
//!
//! [`MatchSearch`] materializes the valid lineups of a model once and hands
//! out lazy [`AcceptedMatches`] iterators over them. [`SearchRunner`] drives
//! a complete run and returns a [`SearchResult`] with the accepted count and
//! per-rule [`SearchStats`].
//!
//! The search is single-threaded and deterministic: the same model always
//! yields the same matches in the same order.

mod config;
mod runner;

pub use config::SearchConfig;
pub use runner::{AcceptedMatches, MatchSearch, SearchResult, SearchRunner, SearchStats};
