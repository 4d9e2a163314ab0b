//! Matches: three set-lineups judged together.
//!
//! # Key Components
//!
//! - [`Match`]: an unordered triple of [`SetLineup`](crate::lineup::SetLineup)s
//! - [`IndexTriples`] / [`triples`]: the combiner, every `i < j < k` triple
//!   of an indexed sequence
//! - [`FairnessValidator`]: playing time and preferred-role coverage
//!
//! The number of candidates is `C(V, 3)` for `V` valid lineups. That is the
//! cost of an exhaustive search, and nothing here tries to avoid it.

mod combiner;
mod types;
mod validator;

pub use combiner::{triple_count, triples, IndexTriples};
pub use types::{Match, SETS_PER_MATCH};
pub use validator::{FairnessValidator, MatchViolation};
