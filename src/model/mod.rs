//! Constraint model: who can play where, and what the team wants.
//!
//! # Key Components
//!
//! - **Identifiers**: [`Player`], [`Role`], [`RoleSet`]
//! - **Configuration**: [`RosterConfig`] and [`MatchRules`], loadable from TOML
//! - **Model**: [`ConstraintModel`], the resolved read-only input shared by
//!   every stage of the search
//!
//! A model that can never produce a match (for example, a preference for a
//! player who is eligible nowhere) is still a valid model. The search
//! reports zero matches for it.

mod config;
mod constraints;
mod types;

pub use config::{MatchRules, RosterConfig, EXAMPLE_ROSTER};
pub use constraints::ConstraintModel;
pub use types::{Player, Role, RoleSet};
