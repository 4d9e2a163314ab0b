//! Roster configuration.
//!
//! A [`RosterConfig`] is the raw, name-based description of a team as it
//! appears in a roster file. [`RosterConfig::build`] resolves it into an
//! immutable [`ConstraintModel`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::constraints::ConstraintModel;
use super::types::Role;
use crate::error::ModelError;

/// The roster shipped with the crate, used by the `lineups` binary when no
/// roster file is given.
pub const EXAMPLE_ROSTER: &str = include_str!("../../rosters/example.toml");

/// Rule thresholds applied during the search.
///
/// The defaults are the standard rules: every player who takes part in a
/// match plays at least two of the three sets, and at least two quota
/// players are on court (the libero does not count).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchRules {
    /// Minimum number of sets played by every player appearing in a match.
    pub min_games_played: u8,
    /// Minimum number of quota players on court in every set, libero excluded.
    pub min_quota_on_court: usize,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            min_games_played: 2,
            min_quota_on_court: 2,
        }
    }
}

impl MatchRules {
    /// Sets the minimum number of sets per participating player.
    pub fn with_min_games_played(mut self, n: u8) -> Self {
        self.min_games_played = n;
        self
    }

    /// Sets the minimum number of quota players on court.
    pub fn with_min_quota_on_court(mut self, n: usize) -> Self {
        self.min_quota_on_court = n;
        self
    }
}

/// Name-based team description.
///
/// # Examples
///
/// ```
/// use volley_lineup::model::RosterConfig;
///
/// let model = RosterConfig::from_toml_str(r#"
///     setters  = ["Ana"]
///     outside  = ["Ben", "Cy"]
///     middle   = ["Dee", "Eve"]
///     opposite = ["Fox"]
///     quota    = ["Ana", "Fox"]
///     cannons  = ["Ben"]
///
///     [preferences]
///     Ben = ["oh1", "oh2"]
/// "#).unwrap().build().unwrap();
///
/// assert_eq!(model.roster_len(), 6);
/// assert!(!model.has_libero());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RosterConfig {
    /// Players who can set.
    pub setters: Vec<String>,
    /// Players who can play outside hitter.
    pub outside: Vec<String>,
    /// Players who can play opposite.
    pub opposite: Vec<String>,
    /// Players who can play middle blocker.
    pub middle: Vec<String>,
    /// Players who can play libero. Empty means no libero in any set.
    pub libero: Vec<String>,
    /// Players counted by the on-court quota.
    pub quota: Vec<String>,
    /// High-scoring hitters; every set needs one.
    pub cannons: Vec<String>,
    /// Preferred roles per player.
    pub preferences: BTreeMap<String, Vec<Role>>,
    /// Players whose preference is waived for this match.
    pub exempt: Vec<String>,
    /// Rule thresholds.
    pub rules: MatchRules,
}

impl RosterConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a roster from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid roster.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a roster from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ModelError> {
        Ok(toml::from_str(s)?)
    }

    /// The bundled example roster.
    pub fn example() -> Result<Self, ModelError> {
        Self::from_toml_str(EXAMPLE_ROSTER)
    }

    /// Resolves names and validates the configuration.
    pub fn build(&self) -> Result<ConstraintModel, ModelError> {
        ConstraintModel::from_config(self)
    }

    pub fn with_setters<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.setters = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_outside<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.outside = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_opposite<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opposite = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_middle<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.middle = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_libero<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.libero = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_quota<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.quota = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_cannons<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cannons = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_exempt<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exempt = names.into_iter().map(Into::into).collect();
        self
    }

    /// Adds (or replaces) the preferred roles of one player.
    pub fn with_preference<R>(mut self, name: impl Into<String>, roles: R) -> Self
    where
        R: IntoIterator<Item = Role>,
    {
        self.preferences
            .insert(name.into(), roles.into_iter().collect());
        self
    }

    /// Sets the rule thresholds.
    pub fn with_rules(mut self, rules: MatchRules) -> Self {
        self.rules = rules;
        self
    }
}
