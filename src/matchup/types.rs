//! The match record.

use crate::lineup::SetLineup;
use crate::model::{Player, Role};

/// Number of sets in a match.
pub const SETS_PER_MATCH: usize = 3;

/// Three set-lineups played together.
///
/// The order of the sets carries no meaning; the search never produces two
/// matches that differ only in set order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    sets: [SetLineup; SETS_PER_MATCH],
}

impl Match {
    pub fn new(sets: [SetLineup; SETS_PER_MATCH]) -> Self {
        Self { sets }
    }

    pub fn sets(&self) -> &[SetLineup; SETS_PER_MATCH] {
        &self.sets
    }

    /// Every `(role, player)` pair across the three sets.
    pub fn assignments(&self) -> impl Iterator<Item = (Role, Player)> + '_ {
        self.sets.iter().flat_map(|set| set.assignments())
    }

    /// Number of sets in which `player` fills a role.
    pub fn games_played(&self, player: Player) -> usize {
        self.sets.iter().filter(|set| set.contains(player)).count()
    }
}
