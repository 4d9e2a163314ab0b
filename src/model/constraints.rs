//! The resolved, immutable constraint model.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::{debug, warn};

use super::config::{MatchRules, RosterConfig};
use super::types::{Player, Role, RoleSet};
use crate::error::ModelError;
use crate::matchup::SETS_PER_MATCH;

/// Everything the search needs to know about a team.
///
/// Built once from a [`RosterConfig`] and never mutated afterwards; every
/// pipeline stage borrows it.
///
/// The roster is ordered by first appearance in the configuration, taking
/// the fields in this order: setters, outside, opposite, middle, libero,
/// quota, cannons, preferences, exempt. Eligibility sets iterate in roster
/// order, which makes lineup enumeration deterministic.
#[derive(Debug, Clone)]
pub struct ConstraintModel {
    roster: Vec<String>,
    by_name: HashMap<String, Player>,
    setters: BTreeSet<Player>,
    outside: BTreeSet<Player>,
    opposite: BTreeSet<Player>,
    middle: BTreeSet<Player>,
    libero: BTreeSet<Player>,
    quota: BTreeSet<Player>,
    cannons: BTreeSet<Player>,
    preferences: BTreeMap<Player, RoleSet>,
    exempt: BTreeSet<Player>,
    rules: MatchRules,
}

/// Assigns roster positions to names.
#[derive(Default)]
struct Interner {
    roster: Vec<String>,
    by_name: HashMap<String, Player>,
}

impl Interner {
    fn intern(&mut self, name: &str) -> Result<Player, ModelError> {
        if let Some(&player) = self.by_name.get(name) {
            return Ok(player);
        }
        if name.trim().is_empty() {
            return Err(ModelError::Invalid("blank player name".into()));
        }
        let index = u16::try_from(self.roster.len()).map_err(|_| {
            ModelError::Invalid(format!("roster exceeds {} players", u16::MAX))
        })?;
        let player = Player::from_index(index);
        self.roster.push(name.to_string());
        self.by_name.insert(name.to_string(), player);
        Ok(player)
    }

    fn intern_all(&mut self, names: &[String]) -> Result<BTreeSet<Player>, ModelError> {
        names.iter().map(|name| self.intern(name)).collect()
    }
}

impl ConstraintModel {
    pub(crate) fn from_config(config: &RosterConfig) -> Result<Self, ModelError> {
        let rules = config.rules;
        if usize::from(rules.min_games_played) > SETS_PER_MATCH {
            return Err(ModelError::Invalid(format!(
                "min_games_played is {} but a match has only {SETS_PER_MATCH} sets",
                rules.min_games_played
            )));
        }
        if rules.min_quota_on_court > Role::COURT.len() {
            return Err(ModelError::Invalid(format!(
                "min_quota_on_court is {} but only {} players are on court",
                rules.min_quota_on_court,
                Role::COURT.len()
            )));
        }

        let mut names = Interner::default();
        let setters = names.intern_all(&config.setters)?;
        let outside = names.intern_all(&config.outside)?;
        let opposite = names.intern_all(&config.opposite)?;
        let middle = names.intern_all(&config.middle)?;
        let libero = names.intern_all(&config.libero)?;
        let quota = names.intern_all(&config.quota)?;
        let cannons = names.intern_all(&config.cannons)?;
        let mut preferences = BTreeMap::new();
        for (name, roles) in &config.preferences {
            let player = names.intern(name)?;
            preferences.insert(player, roles.iter().copied().collect::<RoleSet>());
        }
        let exempt = names.intern_all(&config.exempt)?;

        let model = Self {
            roster: names.roster,
            by_name: names.by_name,
            setters,
            outside,
            opposite,
            middle,
            libero,
            quota,
            cannons,
            preferences,
            exempt,
            rules,
        };
        model.warn_unreachable();
        debug!(
            event = "model_built",
            players = model.roster.len(),
            preferences = model.preferences.len(),
            exempt = model.exempt.len(),
            libero = model.has_libero(),
        );
        Ok(model)
    }

    /// Warns about configurations that are legal but cannot behave the way
    /// the author probably intended.
    fn warn_unreachable(&self) {
        for (&player, roles) in self.allowed_preferences() {
            if !self.is_eligible_anywhere(player) {
                warn!(
                    player = self.name(player),
                    "player has a preference but is in no eligibility set; no match can satisfy it"
                );
            } else if roles.is_empty() {
                warn!(
                    player = self.name(player),
                    "player has an empty preference; no match can satisfy it"
                );
            } else if roles.contains(Role::Libero) && roles.len() == 1 && !self.has_libero() {
                warn!(
                    player = self.name(player),
                    "player prefers libero only but no libero is configured"
                );
            }
        }
        for &player in &self.exempt {
            if !self.preferences.contains_key(&player) {
                warn!(
                    player = self.name(player),
                    "exempt player has no preference; exemption has no effect"
                );
            }
        }
    }

    fn is_eligible_anywhere(&self, player: Player) -> bool {
        [
            &self.setters,
            &self.outside,
            &self.opposite,
            &self.middle,
            &self.libero,
        ]
        .iter()
        .any(|set| set.contains(&player))
    }

    /// Number of distinct players named anywhere in the roster.
    pub fn roster_len(&self) -> usize {
        self.roster.len()
    }

    /// Name of a player.
    ///
    /// Players from another model may be out of range; they render as `?`.
    pub fn name(&self, player: Player) -> &str {
        self.roster
            .get(player.index())
            .map(String::as_str)
            .unwrap_or("?")
    }

    /// Looks up a player by exact name.
    pub fn player(&self, name: &str) -> Option<Player> {
        self.by_name.get(name).copied()
    }

    /// All players in roster order.
    pub fn players(&self) -> impl Iterator<Item = Player> + '_ {
        (0..self.roster.len()).map(|i| Player::from_index(i as u16))
    }

    pub fn setters(&self) -> &BTreeSet<Player> {
        &self.setters
    }

    pub fn outside(&self) -> &BTreeSet<Player> {
        &self.outside
    }

    pub fn opposite(&self) -> &BTreeSet<Player> {
        &self.opposite
    }

    pub fn middle(&self) -> &BTreeSet<Player> {
        &self.middle
    }

    pub fn libero(&self) -> &BTreeSet<Player> {
        &self.libero
    }

    /// Whether lineups include a libero slot.
    pub fn has_libero(&self) -> bool {
        !self.libero.is_empty()
    }

    pub fn quota(&self) -> &BTreeSet<Player> {
        &self.quota
    }

    pub fn cannons(&self) -> &BTreeSet<Player> {
        &self.cannons
    }

    /// All declared preferences, exempt players included.
    pub fn preferences(&self) -> &BTreeMap<Player, RoleSet> {
        &self.preferences
    }

    pub fn exempt(&self) -> &BTreeSet<Player> {
        &self.exempt
    }

    /// Preferences that must be honoured in this match: every declared
    /// preference except those of exempt players.
    pub fn allowed_preferences(&self) -> impl Iterator<Item = (&Player, &RoleSet)> + '_ {
        self.preferences
            .iter()
            .filter(|(player, _)| !self.exempt.contains(player))
    }

    pub fn rules(&self) -> &MatchRules {
        &self.rules
    }
}
