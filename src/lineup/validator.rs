//! Per-set lineup rules.

use std::fmt;

use super::types::SetLineup;
use crate::model::{ConstraintModel, Player};

/// The first rule a rejected lineup breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineupViolation {
    /// The same player fills two roles.
    DuplicatePlayer(Player),
    /// No cannon in the lineup.
    NoCannon,
    /// Too few quota players on court.
    QuotaShortfall { on_court: usize, required: usize },
}

impl fmt::Display for LineupViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineupViolation::DuplicatePlayer(p) => {
                write!(f, "player #{} fills two roles", p.index())
            }
            LineupViolation::NoCannon => f.write_str("no cannon in lineup"),
            LineupViolation::QuotaShortfall { on_court, required } => {
                write!(f, "{on_court} quota players on court, need {required}")
            }
        }
    }
}

impl LineupViolation {
    /// The player at fault, if the rule concerns one.
    pub fn player(&self) -> Option<Player> {
        match self {
            LineupViolation::DuplicatePlayer(p) => Some(*p),
            _ => None,
        }
    }

    /// Like `Display`, with the player named from `model`.
    pub fn describe(&self, model: &ConstraintModel) -> String {
        match self {
            LineupViolation::DuplicatePlayer(p) => format!("{} fills two roles", model.name(*p)),
            _ => self.to_string(),
        }
    }
}

/// Checks single-set lineups against a model.
///
/// A lineup is valid when
///
/// 1. no player fills two roles,
/// 2. at least one cannon plays, and
/// 3. at least `min_quota_on_court` quota players are on court, not
///    counting the libero.
#[derive(Debug, Clone, Copy)]
pub struct LineupValidator<'m> {
    model: &'m ConstraintModel,
}

impl<'m> LineupValidator<'m> {
    pub fn new(model: &'m ConstraintModel) -> Self {
        Self { model }
    }

    /// Returns the first broken rule, or `Ok(())` if the lineup is valid.
    pub fn check(&self, lineup: &SetLineup) -> Result<(), LineupViolation> {
        if let Some(player) = lineup.duplicate() {
            return Err(LineupViolation::DuplicatePlayer(player));
        }

        let cannons = self.model.cannons();
        if !lineup.assignments().any(|(_, p)| cannons.contains(&p)) {
            return Err(LineupViolation::NoCannon);
        }

        let quota = self.model.quota();
        let on_court = lineup
            .court_players()
            .iter()
            .filter(|p| quota.contains(*p))
            .count();
        let required = self.model.rules().min_quota_on_court;
        if on_court < required {
            return Err(LineupViolation::QuotaShortfall { on_court, required });
        }

        Ok(())
    }

    pub fn is_valid(&self, lineup: &SetLineup) -> bool {
        self.check(lineup).is_ok()
    }
}
