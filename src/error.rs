//! Error types.
//!
//! Every error here is raised while loading or constructing input. The
//! search itself cannot fail: an unsatisfiable roster simply produces no
//! matches.

use thiserror::Error;

use crate::model::Role;

/// Error raised while loading or building a constraint model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid roster: {0}")]
    Invalid(String),
}

/// Error raised when assembling a [`SetLineup`](crate::lineup::SetLineup)
/// from explicit role assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineupError {
    #[error("role `{0}` is not assigned")]
    MissingRole(Role),

    #[error("role `{0}` is assigned more than once")]
    DuplicateRole(Role),
}
