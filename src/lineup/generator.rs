//! Structural lineup enumeration.
//!
//! # Algorithm
//!
//! The candidate space is the Cartesian product
//!
//! ```text
//! setter × C(outside, 2) × C(middle, 2) × opposite [× libero]
//! ```
//!
//! walked as an odometer with the libero as the fastest-moving digit and
//! the setter as the slowest. Each unordered pair is emitted once, with the
//! earlier roster entry in slot 1. Nothing is filtered here: a player
//! eligible for two roles can appear twice in one candidate. The
//! [`LineupValidator`](super::LineupValidator) rejects those.

use std::collections::BTreeSet;

use super::types::SetLineup;
use crate::model::{ConstraintModel, Player};

/// Unordered pairs of distinct members, in set order.
fn pairs(set: &BTreeSet<Player>) -> Vec<[Player; 2]> {
    let members: Vec<Player> = set.iter().copied().collect();
    let mut out = Vec::with_capacity(members.len() * members.len().saturating_sub(1) / 2);
    for (i, &first) in members.iter().enumerate() {
        for &second in &members[i + 1..] {
            out.push([first, second]);
        }
    }
    out
}

/// Lazy iterator over every structural lineup of a model.
///
/// Cloning a generator restarts nothing; it copies the current position.
/// Call [`LineupGenerator::new`] again for a fresh pass.
///
/// # Examples
///
/// ```
/// use volley_lineup::lineup::LineupGenerator;
/// use volley_lineup::model::RosterConfig;
///
/// let model = RosterConfig::new()
///     .with_setters(["A"]).with_outside(["B", "C", "G"])
///     .with_middle(["D", "E"]).with_opposite(["F"])
///     .build().unwrap();
///
/// // 1 setter × 3 outside pairs × 1 middle pair × 1 opposite
/// assert_eq!(LineupGenerator::new(&model).len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct LineupGenerator {
    setters: Vec<Player>,
    outside: Vec<[Player; 2]>,
    middle: Vec<[Player; 2]>,
    opposites: Vec<Player>,
    liberos: Vec<Option<Player>>,
    /// Digit positions: setter, outside pair, middle pair, opposite, libero.
    cursor: [usize; 5],
    remaining: usize,
}

impl LineupGenerator {
    /// Creates a generator positioned at the first candidate.
    pub fn new(model: &ConstraintModel) -> Self {
        let liberos = if model.has_libero() {
            model.libero().iter().copied().map(Some).collect()
        } else {
            vec![None]
        };
        let mut generator = Self {
            setters: model.setters().iter().copied().collect(),
            outside: pairs(model.outside()),
            middle: pairs(model.middle()),
            opposites: model.opposite().iter().copied().collect(),
            liberos,
            cursor: [0; 5],
            remaining: 0,
        };
        generator.remaining = generator.total();
        generator
    }

    /// Size of the full candidate space, independent of the current position.
    pub fn total(&self) -> usize {
        self.radices().iter().product()
    }

    fn radices(&self) -> [usize; 5] {
        [
            self.setters.len(),
            self.outside.len(),
            self.middle.len(),
            self.opposites.len(),
            self.liberos.len(),
        ]
    }

    fn current(&self) -> SetLineup {
        let [s, oh, mb, opp, lib] = self.cursor;
        SetLineup::new(
            self.setters[s],
            self.outside[oh],
            self.middle[mb],
            self.opposites[opp],
            self.liberos[lib],
        )
    }

    fn advance(&mut self) {
        let radices = self.radices();
        for digit in (0..self.cursor.len()).rev() {
            self.cursor[digit] += 1;
            if self.cursor[digit] < radices[digit] {
                return;
            }
            self.cursor[digit] = 0;
        }
    }
}

impl Iterator for LineupGenerator {
    type Item = SetLineup;

    fn next(&mut self) -> Option<SetLineup> {
        if self.remaining == 0 {
            return None;
        }
        let lineup = self.current();
        self.remaining -= 1;
        self.advance();
        Some(lineup)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LineupGenerator {}

impl ConstraintModel {
    /// A fresh pass over every structural lineup of this model.
    pub fn lineups(&self) -> LineupGenerator {
        LineupGenerator::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Role, RosterConfig};
    use std::collections::HashSet;

    fn base() -> RosterConfig {
        RosterConfig::new()
            .with_setters(["A"])
            .with_outside(["B", "C"])
            .with_middle(["D", "E"])
            .with_opposite(["F"])
    }

    #[test]
    fn test_single_structural_lineup() {
        let model = base().build().unwrap();
        let p = |name| model.player(name).unwrap();

        let all: Vec<SetLineup> = model.lineups().collect();
        assert_eq!(all.len(), 1);
        assert_eq!(
            all[0],
            SetLineup::new(p("A"), [p("B"), p("C")], [p("D"), p("E")], p("F"), None)
        );
    }

    #[test]
    fn test_pair_emitted_once() {
        let model = base().with_outside(["B", "C", "G", "H"]).build().unwrap();
        let all: Vec<SetLineup> = model.lineups().collect();
        // C(4, 2)
        assert_eq!(all.len(), 6);

        let unordered: HashSet<BTreeSet<Player>> = all
            .iter()
            .map(|l| {
                [l.get(Role::Outside1), l.get(Role::Outside2)]
                    .into_iter()
                    .flatten()
                    .collect()
            })
            .collect();
        assert_eq!(unordered.len(), 6);
    }

    #[test]
    fn test_cartesian_count() {
        let model = base()
            .with_setters(["A", "S"])
            .with_outside(["B", "C", "G"])
            .with_middle(["D", "E", "M"])
            .with_opposite(["F", "O"])
            .with_libero(["L", "K"])
            .build()
            .unwrap();
        // 2 × 3 × 3 × 2 × 2
        assert_eq!(model.lineups().len(), 72);
        assert_eq!(model.lineups().count(), 72);
    }

    #[test]
    fn test_libero_slot_presence() {
        let without = base().build().unwrap();
        assert!(without.lineups().all(|l| l.libero().is_none()));

        let with = base().with_libero(["L"]).build().unwrap();
        assert!(with.lineups().all(|l| l.libero().is_some()));
    }

    #[test]
    fn test_duplicates_are_not_filtered() {
        // B can play outside and opposite: the generator still pairs B with B.
        let model = base().with_opposite(["B"]).build().unwrap();
        let all: Vec<SetLineup> = model.lineups().collect();
        assert_eq!(all.len(), 1);
        assert!(all[0].duplicate().is_some());
    }

    #[test]
    fn test_empty_when_a_role_cannot_be_filled() {
        assert_eq!(base().with_setters(Vec::<String>::new()).build().unwrap().lineups().count(), 0);
        assert_eq!(base().with_outside(["B"]).build().unwrap().lineups().count(), 0);
        assert_eq!(base().with_middle(["D"]).build().unwrap().lineups().count(), 0);
        assert_eq!(base().with_opposite(Vec::<String>::new()).build().unwrap().lineups().count(), 0);
    }

    #[test]
    fn test_restartable() {
        let model = base().with_outside(["B", "C", "G"]).build().unwrap();
        let first: Vec<SetLineup> = model.lineups().collect();
        let second: Vec<SetLineup> = model.lineups().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_libero_is_fastest_digit() {
        let model = base()
            .with_opposite(["F", "O"])
            .with_libero(["L", "K"])
            .build()
            .unwrap();
        let order: Vec<(Option<Player>, Option<Player>)> = model
            .lineups()
            .map(|l| (l.get(Role::Opposite), l.libero()))
            .collect();
        let p = |name| model.player(name);
        assert_eq!(
            order,
            vec![
                (p("F"), p("L")),
                (p("F"), p("K")),
                (p("O"), p("L")),
                (p("O"), p("K")),
            ]
        );
    }

    #[test]
    fn test_size_hint_tracks_progress() {
        let model = base().with_outside(["B", "C", "G"]).build().unwrap();
        let mut generator = model.lineups();
        assert_eq!(generator.len(), 3);
        generator.next();
        assert_eq!(generator.len(), 2);
        assert_eq!(generator.total(), 3);
    }
}
