//! Exhaustive volleyball lineup search.
//!
//! Given who can play which position and who prefers which, finds every
//! match (three sets) whose lineups satisfy both the per-set rules and the
//! match-wide fairness rules:
//!
//! - **Model** ([`model`]): roster, eligibility, quota players, cannons,
//!   preferences and exemptions, loaded from TOML or built in code.
//! - **Lineups** ([`lineup`]): enumerate every structural assignment for one
//!   set, then keep those with distinct players, a cannon, and enough quota
//!   players on court.
//! - **Matches** ([`matchup`]): combine valid lineups into unordered triples
//!   and keep those where every participant plays at least two sets and
//!   every non-exempt preference is met at least once.
//! - **Search** ([`search`]): wires the stages together lazily and counts
//!   what each rule rejected.
//! - **Report** ([`report`]): text and JSON rendering.
//!
//! # Examples
//!
//! ```
//! use volley_lineup::model::RosterConfig;
//! use volley_lineup::search::{SearchConfig, SearchRunner};
//!
//! let model = RosterConfig::example().unwrap().build().unwrap();
//! let result = SearchRunner::run(&model, &SearchConfig::default().with_max_matches(1));
//! assert!(result.accepted <= 1);
//! ```
//!
//! There is no scoring: every accepted match is as good as any other. A
//! roster that cannot satisfy its constraints yields zero matches rather
//! than an error.

pub mod error;
pub mod lineup;
pub mod matchup;
pub mod model;
pub mod report;
pub mod search;

pub use error::{LineupError, ModelError};
