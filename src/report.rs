//! Rendering matches for people and for machines.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::lineup::SetLineup;
use crate::matchup::Match;
use crate::model::{ConstraintModel, Role};
use crate::search::{SearchResult, SearchStats};

/// Text rendering of one set: `s=Ana oh1=Ben ...`.
pub struct LineupReport<'a> {
    model: &'a ConstraintModel,
    lineup: &'a SetLineup,
}

impl<'a> LineupReport<'a> {
    pub fn new(model: &'a ConstraintModel, lineup: &'a SetLineup) -> Self {
        Self { model, lineup }
    }
}

impl fmt::Display for LineupReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, (role, player)) in self.lineup.assignments().enumerate() {
            if n > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{role}={}", self.model.name(player))?;
        }
        Ok(())
    }
}

/// Text rendering of a numbered match, one line per set.
///
/// ```text
/// Match 1
///   Set 1: s=A oh1=B oh2=C mb1=D mb2=E opp=F
///   Set 2: ...
/// ```
pub struct MatchReport<'a> {
    model: &'a ConstraintModel,
    index: u64,
    found: &'a Match,
}

impl<'a> MatchReport<'a> {
    pub fn new(model: &'a ConstraintModel, index: u64, found: &'a Match) -> Self {
        Self {
            model,
            index,
            found,
        }
    }
}

impl fmt::Display for MatchReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Match {}", self.index)?;
        for (n, lineup) in self.found.sets().iter().enumerate() {
            write!(f, "\n  Set {}: {}", n + 1, LineupReport::new(self.model, lineup))?;
        }
        Ok(())
    }
}

/// Serializable form of a match: for each set, role label to player name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub index: u64,
    pub sets: Vec<BTreeMap<Role, String>>,
}

impl MatchRecord {
    pub fn new(model: &ConstraintModel, index: u64, found: &Match) -> Self {
        let sets = found
            .sets()
            .iter()
            .map(|lineup| {
                lineup
                    .assignments()
                    .map(|(role, player)| (role, model.name(player).to_string()))
                    .collect()
            })
            .collect();
        Self { index, sets }
    }
}

/// Serializable end-of-run summary: `{"accepted": N, "stats": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRecord {
    pub accepted: u64,
    pub stats: SearchStats,
}

impl SummaryRecord {
    pub fn new(result: &SearchResult) -> Self {
        Self {
            accepted: result.accepted,
            stats: result.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RosterConfig;
    use crate::search::{SearchConfig, SearchRunner};

    fn fixture() -> (ConstraintModel, Match) {
        let model = RosterConfig::new()
            .with_setters(["A"])
            .with_outside(["B", "C", "G"])
            .with_middle(["D", "E"])
            .with_opposite(["F"])
            .with_libero(["L"])
            .build()
            .unwrap();
        let sets: Vec<SetLineup> = model.lineups().collect();
        let found = Match::new([sets[0], sets[1], sets[2]]);
        (model, found)
    }

    #[test]
    fn test_lineup_line() {
        let (model, found) = fixture();
        let line = LineupReport::new(&model, &found.sets()[0]).to_string();
        assert_eq!(line, "s=A oh1=B oh2=C mb1=D mb2=E opp=F lib=L");
    }

    #[test]
    fn test_match_block() {
        let (model, found) = fixture();
        let text = MatchReport::new(&model, 7, &found).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Match 7");
        assert_eq!(lines[2], "  Set 2: s=A oh1=B oh2=G mb1=D mb2=E opp=F lib=L");
    }

    #[test]
    fn test_record_json() {
        let (model, found) = fixture();
        let record = MatchRecord::new(&model, 1, &found);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["index"], 1);
        assert_eq!(json["sets"][2]["oh1"], "C");
        assert_eq!(json["sets"][2]["lib"], "L");
        assert_eq!(json["sets"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_summary_json() {
        let model = RosterConfig::new()
            .with_setters(["A"])
            .with_outside(["B", "C", "G"])
            .with_middle(["D", "E"])
            .with_opposite(["F"])
            .with_quota(["A", "F"])
            .with_cannons(["B", "C"])
            .build()
            .unwrap();
        let result = SearchRunner::run(&model, &SearchConfig::default());
        assert_eq!(result.accepted, 1);
        let json = serde_json::to_value(SummaryRecord::new(&result)).unwrap();

        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["accepted", "stats"]);
        assert_eq!(json["accepted"], result.accepted);
        assert_eq!(json["stats"]["lineups_valid"], result.stats.lineups_valid);
        assert_eq!(json["stats"]["candidates_examined"], 1);
    }
}
