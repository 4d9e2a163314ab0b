//! Match-wide fairness rules.
//!
//! # Algorithm
//!
//! 1. Walk every `(role, player)` pair of the three sets, counting the sets
//!    each player appears in and marking a player satisfied when the role
//!    is one they prefer (players without a binding preference are always
//!    satisfied).
//! 2. Reject if a player who appears at all played fewer than
//!    `min_games_played` sets.
//! 3. Reject if a player with a binding preference was never satisfied,
//!    including players who sit out the whole match.

use std::collections::BTreeMap;
use std::fmt;

use super::types::Match;
use crate::model::{ConstraintModel, Player, RoleSet};

/// The first rule a rejected match breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchViolation {
    /// A participating player sits out too many sets.
    TooFewGames {
        player: Player,
        played: u8,
        required: u8,
    },
    /// A non-exempt player never gets a preferred role.
    PreferenceUnmet(Player),
}

impl fmt::Display for MatchViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchViolation::TooFewGames {
                player,
                played,
                required,
            } => write!(
                f,
                "player #{} plays {played} sets, needs {required}",
                player.index()
            ),
            MatchViolation::PreferenceUnmet(player) => {
                write!(f, "player #{} never plays a preferred role", player.index())
            }
        }
    }
}

impl MatchViolation {
    /// The player at fault.
    pub fn player(&self) -> Player {
        match self {
            MatchViolation::TooFewGames { player, .. } | MatchViolation::PreferenceUnmet(player) => {
                *player
            }
        }
    }

    /// Like `Display`, with the player named from `model`.
    pub fn describe(&self, model: &ConstraintModel) -> String {
        let name = model.name(self.player());
        match self {
            MatchViolation::TooFewGames {
                played, required, ..
            } => format!("{name} plays {played} sets, needs {required}"),
            MatchViolation::PreferenceUnmet(_) => format!("{name} never plays a preferred role"),
        }
    }
}

/// Checks candidate matches against the fairness rules of a model.
///
/// Binding preferences are derived once, at construction: the model's
/// preferences minus those of exempt players.
#[derive(Debug, Clone)]
pub struct FairnessValidator {
    allowed: BTreeMap<Player, RoleSet>,
    min_games: u8,
}

impl FairnessValidator {
    pub fn new(model: &ConstraintModel) -> Self {
        Self {
            allowed: model
                .allowed_preferences()
                .map(|(&player, &roles)| (player, roles))
                .collect(),
            min_games: model.rules().min_games_played,
        }
    }

    /// Preferences enforced by this validator.
    pub fn allowed_preferences(&self) -> &BTreeMap<Player, RoleSet> {
        &self.allowed
    }

    /// Returns the first broken rule, or `Ok(())` if the match is fair.
    pub fn check(&self, candidate: &Match) -> Result<(), MatchViolation> {
        let len = candidate
            .assignments()
            .map(|(_, p)| p.index() + 1)
            .chain(self.allowed.keys().map(|p| p.index() + 1))
            .max()
            .unwrap_or(0);
        let mut games = vec![0u8; len];
        let mut satisfied = vec![false; len];

        for (role, player) in candidate.assignments() {
            let i = player.index();
            games[i] += 1;
            if self.allowed.get(&player).map_or(true, |roles| roles.contains(role)) {
                satisfied[i] = true;
            }
        }

        if let Some((i, &played)) = games
            .iter()
            .enumerate()
            .find(|&(_, &n)| n > 0 && n < self.min_games)
        {
            return Err(MatchViolation::TooFewGames {
                player: Player::from_index(i as u16),
                played,
                required: self.min_games,
            });
        }

        if let Some(&player) = self.allowed.keys().find(|p| !satisfied[p.index()]) {
            return Err(MatchViolation::PreferenceUnmet(player));
        }

        Ok(())
    }

    pub fn is_valid(&self, candidate: &Match) -> bool {
        self.check(candidate).is_ok()
    }
}
