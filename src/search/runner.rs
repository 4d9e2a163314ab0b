//! Search execution.
//!
//! # Algorithm
//!
//! 1. Generate every structural lineup and keep the valid ones, in
//!    generation order, in a single vector
//! 2. Walk every index triple `i < j < k` of that vector
//! 3. Yield the triples that pass the fairness rules
//!
//! Step 1 is eager; steps 2 and 3 are lazy, so memory holds the valid
//! lineups and one candidate at a time.

use std::borrow::Cow;

use serde::Serialize;
use tracing::{debug, info, trace};

use super::config::SearchConfig;
use crate::lineup::{LineupValidator, LineupViolation, SetLineup};
use crate::matchup::{triple_count, FairnessValidator, IndexTriples, Match, MatchViolation};
use crate::model::ConstraintModel;

/// Counters collected along the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Structural lineups produced by the generator.
    pub lineups_generated: usize,
    /// Lineups that passed every per-set rule.
    pub lineups_valid: usize,
    pub rejected_duplicate: usize,
    pub rejected_no_cannon: usize,
    pub rejected_quota: usize,
    /// Triples judged by the fairness validator so far.
    pub candidates_examined: u64,
    pub rejected_games: u64,
    pub rejected_preference: u64,
    /// Matches accepted so far.
    pub accepted: u64,
}

impl SearchStats {
    fn record_lineup(&mut self, violation: LineupViolation) {
        match violation {
            LineupViolation::DuplicatePlayer(_) => self.rejected_duplicate += 1,
            LineupViolation::NoCannon => self.rejected_no_cannon += 1,
            LineupViolation::QuotaShortfall { .. } => self.rejected_quota += 1,
        }
    }

    fn record_match(&mut self, violation: MatchViolation) {
        match violation {
            MatchViolation::TooFewGames { .. } => self.rejected_games += 1,
            MatchViolation::PreferenceUnmet(_) => self.rejected_preference += 1,
        }
    }
}

/// The valid lineups of a model, ready to be combined into matches.
///
/// # Examples
///
/// ```
/// use volley_lineup::model::RosterConfig;
/// use volley_lineup::search::MatchSearch;
///
/// let model = RosterConfig::new()
///     .with_setters(["A"]).with_outside(["B", "C", "G"])
///     .with_middle(["D", "E"]).with_opposite(["F"])
///     .with_quota(["A", "F"]).with_cannons(["B", "C"])
///     .build().unwrap();
///
/// let search = MatchSearch::new(&model);
/// assert_eq!(search.valid_lineups().len(), 3);
///
/// let mut matches = search.matches();
/// assert_eq!(matches.by_ref().count(), 1);
/// assert_eq!(matches.accepted(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MatchSearch<'m> {
    model: &'m ConstraintModel,
    lineups: Vec<SetLineup>,
    stats: SearchStats,
}

impl<'m> MatchSearch<'m> {
    /// Generates and filters the lineups of `model`.
    pub fn new(model: &'m ConstraintModel) -> Self {
        let validator = LineupValidator::new(model);
        let mut stats = SearchStats::default();
        let mut lineups = Vec::new();

        for lineup in model.lineups() {
            stats.lineups_generated += 1;
            match validator.check(&lineup) {
                Ok(()) => lineups.push(lineup),
                Err(violation) => {
                    trace!(event = "lineup_rejected", reason = %violation.describe(model));
                    stats.record_lineup(violation);
                }
            }
        }
        stats.lineups_valid = lineups.len();

        info!(
            event = "lineups_generated",
            generated = stats.lineups_generated,
            valid = stats.lineups_valid,
            rejected_duplicate = stats.rejected_duplicate,
            rejected_no_cannon = stats.rejected_no_cannon,
            rejected_quota = stats.rejected_quota,
        );

        Self {
            model,
            lineups,
            stats,
        }
    }

    pub fn model(&self) -> &'m ConstraintModel {
        self.model
    }

    /// Valid lineups in generation order.
    pub fn valid_lineups(&self) -> &[SetLineup] {
        &self.lineups
    }

    /// Lineup-stage counters. Match counters are still zero.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Number of candidate matches, `C(V, 3)`.
    pub fn candidate_count(&self) -> u128 {
        triple_count(self.lineups.len())
    }

    /// Accepted matches, lazily, borrowing the valid lineups.
    pub fn matches(&self) -> AcceptedMatches<'_> {
        AcceptedMatches::new(self.model, Cow::Borrowed(self.lineups.as_slice()), self.stats)
    }

    /// Accepted matches, lazily, taking ownership of the valid lineups.
    pub fn into_matches(self) -> AcceptedMatches<'m> {
        AcceptedMatches::new(self.model, Cow::Owned(self.lineups), self.stats)
    }
}

/// Lazy iterator over accepted matches.
///
/// Once the iterator returns `None`, [`accepted`](Self::accepted) is the
/// total number of accepted matches.
#[derive(Debug, Clone)]
pub struct AcceptedMatches<'a> {
    model: &'a ConstraintModel,
    lineups: Cow<'a, [SetLineup]>,
    triples: IndexTriples,
    validator: FairnessValidator,
    stats: SearchStats,
}

impl<'a> AcceptedMatches<'a> {
    fn new(model: &'a ConstraintModel, lineups: Cow<'a, [SetLineup]>, stats: SearchStats) -> Self {
        Self {
            model,
            triples: IndexTriples::new(lineups.len()),
            validator: FairnessValidator::new(model),
            lineups,
            stats,
        }
    }

    /// Matches accepted so far.
    pub fn accepted(&self) -> u64 {
        self.stats.accepted
    }

    /// Candidates judged so far.
    pub fn examined(&self) -> u64 {
        self.stats.candidates_examined
    }

    /// Whether every candidate has been judged.
    pub fn is_exhausted(&self) -> bool {
        self.triples.remaining() == 0
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

impl Iterator for AcceptedMatches<'_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        for [i, j, k] in self.triples.by_ref() {
            let candidate = Match::new([self.lineups[i], self.lineups[j], self.lineups[k]]);
            self.stats.candidates_examined += 1;
            match self.validator.check(&candidate) {
                Ok(()) => {
                    self.stats.accepted += 1;
                    debug!(
                        event = "match_accepted",
                        accepted = self.stats.accepted,
                        sets = ?[i, j, k],
                    );
                    return Some(candidate);
                }
                Err(violation) => {
                    trace!(
                        event = "match_rejected",
                        sets = ?[i, j, k],
                        reason = %violation.describe(self.model),
                    );
                    self.stats.record_match(violation);
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.triples.size_hint().1)
    }
}

/// Outcome of a [`SearchRunner`] run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Accepted matches in discovery order; empty when
    /// [`SearchConfig::keep_matches`] is off.
    pub matches: Vec<Match>,
    /// Number of accepted matches.
    pub accepted: u64,
    /// Whether every candidate was judged (false when stopped by
    /// [`SearchConfig::max_matches`]).
    pub exhausted: bool,
    /// Pipeline counters.
    pub stats: SearchStats,
}

/// Runs the whole pipeline for a model.
pub struct SearchRunner;

impl SearchRunner {
    /// Searches `model` and collects the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use volley_lineup::model::{Role, RosterConfig};
    /// use volley_lineup::search::{SearchConfig, SearchRunner};
    ///
    /// let model = RosterConfig::new()
    ///     .with_setters(["A"]).with_outside(["B", "C", "G"])
    ///     .with_middle(["D", "E"]).with_opposite(["F"])
    ///     .with_quota(["A", "F"]).with_cannons(["B", "C"])
    ///     .with_preference("G", [Role::Outside1])
    ///     .build().unwrap();
    ///
    /// // G is always paired after B or C, so never plays oh1.
    /// let result = SearchRunner::run(&model, &SearchConfig::default());
    /// assert_eq!(result.accepted, 0);
    /// assert!(result.exhausted);
    /// ```
    pub fn run(model: &ConstraintModel, config: &SearchConfig) -> SearchResult {
        Self::run_with(model, config, |_, _| {})
    }

    /// Searches `model`, calling `on_match` with the 1-based index of each
    /// accepted match as it is found.
    pub fn run_with<F>(model: &ConstraintModel, config: &SearchConfig, mut on_match: F) -> SearchResult
    where
        F: FnMut(u64, &Match),
    {
        let search = MatchSearch::new(model);
        info!(
            event = "search_start",
            valid_lineups = search.valid_lineups().len(),
            candidates = %search.candidate_count(),
            max_matches = ?config.max_matches,
        );

        let mut matches = search.into_matches();
        let mut kept = Vec::new();
        let mut index = 0u64;
        let limit = config.max_matches.unwrap_or(usize::MAX);
        for found in matches.by_ref().take(limit) {
            index += 1;
            on_match(index, &found);
            if config.keep_matches {
                kept.push(found);
            }
        }

        let stats = *matches.stats();
        let exhausted = matches.is_exhausted();
        info!(
            event = "search_end",
            accepted = stats.accepted,
            examined = stats.candidates_examined,
            rejected_games = stats.rejected_games,
            rejected_preference = stats.rejected_preference,
            exhausted,
        );

        SearchResult {
            matches: kept,
            accepted: stats.accepted,
            exhausted,
            stats,
        }
    }
}
