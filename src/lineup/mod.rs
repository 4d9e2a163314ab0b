//! Single-set lineups.
//!
//! - [`SetLineup`]: one player per role for one set
//! - [`LineupGenerator`]: every structural candidate of a model, lazily
//! - [`LineupValidator`]: the per-set rules (distinct players, a cannon,
//!   the on-court quota)

mod generator;
mod types;
mod validator;

pub use generator::LineupGenerator;
pub use types::SetLineup;
pub use validator::{LineupValidator, LineupViolation};
