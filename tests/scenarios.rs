//! End-to-end searches on small hand-built rosters.

use volley_lineup::lineup::{LineupValidator, LineupViolation, SetLineup};
use volley_lineup::matchup::{FairnessValidator, Match};
use volley_lineup::model::{ConstraintModel, Role, RosterConfig};
use volley_lineup::search::{MatchSearch, SearchConfig, SearchRunner};

fn six() -> RosterConfig {
    RosterConfig::new()
        .with_setters(["A"])
        .with_outside(["B", "C"])
        .with_middle(["D", "E"])
        .with_opposite(["F"])
        .with_cannons(["B"])
        .with_quota(["A", "F"])
}

fn only_lineup(model: &ConstraintModel) -> SetLineup {
    let all: Vec<SetLineup> = model.lineups().collect();
    assert_eq!(all.len(), 1);
    all[0]
}

#[test]
fn single_structural_lineup_passes() {
    let model = six().build().unwrap();
    let lineup = only_lineup(&model);
    let name = |role| lineup.get(role).map(|p| model.name(p));

    assert_eq!(name(Role::Setter), Some("A"));
    assert_eq!(name(Role::Outside1), Some("B"));
    assert_eq!(name(Role::Outside2), Some("C"));
    assert_eq!(name(Role::Middle1), Some("D"));
    assert_eq!(name(Role::Middle2), Some("E"));
    assert_eq!(name(Role::Opposite), Some("F"));
    assert_eq!(name(Role::Libero), None);
    assert!(LineupValidator::new(&model).is_valid(&lineup));
}

#[test]
fn single_quota_player_fails() {
    let model = six().with_quota(["A"]).build().unwrap();
    let lineup = only_lineup(&model);
    assert!(matches!(
        LineupValidator::new(&model).check(&lineup),
        Err(LineupViolation::QuotaShortfall { on_court: 1, .. })
    ));
}

#[test]
fn no_cannon_fails() {
    let model = six().with_cannons(Vec::<String>::new()).build().unwrap();
    let lineup = only_lineup(&model);
    assert_eq!(
        LineupValidator::new(&model).check(&lineup),
        Err(LineupViolation::NoCannon)
    );
}

#[test]
fn shared_player_fails() {
    // A can set and play opposite; the only lineup uses A twice.
    let model = six().with_opposite(["A"]).build().unwrap();
    let lineup = only_lineup(&model);
    assert!(matches!(
        LineupValidator::new(&model).check(&lineup),
        Err(LineupViolation::DuplicatePlayer(_))
    ));
}

#[test]
fn single_valid_lineup_gives_no_triples() {
    // With a single valid lineup there are no triples at all.
    let model = six().build().unwrap();
    assert_eq!(SearchRunner::run(&model, &SearchConfig::default()).accepted, 0);

    // The same lineup played three times is fair on its own terms.
    let lineup = only_lineup(&model);
    let m = Match::new([lineup, lineup, lineup]);
    assert!(FairnessValidator::new(&model).is_valid(&m));
}

#[test]
fn competing_setter_preferences_reject_every_match() {
    // Both setters want to set, but three sets cannot give each of them
    // the two sets they need once they appear.
    let model = RosterConfig::new()
        .with_setters(["A", "B"])
        .with_outside(["C", "D", "H"])
        .with_middle(["E", "F"])
        .with_opposite(["G"])
        .with_cannons(["C", "D"])
        .with_quota(["A", "B", "G"])
        .with_preference("A", [Role::Setter])
        .with_preference("B", [Role::Setter])
        .build()
        .unwrap();

    let result = SearchRunner::run(&model, &SearchConfig::default());
    assert_eq!(result.stats.lineups_valid, 6);
    assert_eq!(result.stats.candidates_examined, 20);
    assert_eq!(result.accepted, 0);
    assert!(result.matches.is_empty());
    assert!(result.exhausted);

    // Mixed-setter triples fail on games played; the two single-setter
    // triples leave the other setter's preference unmet.
    assert_eq!(result.stats.rejected_games, 18);
    assert_eq!(result.stats.rejected_preference, 2);
}

#[test]
fn libero_preference_met_when_libero_configured() {
    let model = six()
        .with_outside(["B", "C", "G"])
        .with_cannons(["B", "C"])
        .with_libero(["L"])
        .with_preference("L", [Role::Libero])
        .build()
        .unwrap();
    let result = SearchRunner::run(&model, &SearchConfig::default());
    assert_eq!(result.accepted, 1);
    for lineup in result.matches[0].sets() {
        assert_eq!(lineup.role_count(), 7);
    }
}

#[test]
fn example_roster_search_is_consistent() {
    let model = RosterConfig::example().unwrap().build().unwrap();
    let search = MatchSearch::new(&model);
    assert_eq!(search.stats().lineups_generated, model.lineups().len());

    let validator = FairnessValidator::new(&model);
    let mut matches = search.matches();
    let found: Vec<Match> = matches.by_ref().take(25).collect();
    assert!(found.iter().all(|m| validator.is_valid(m)));
    assert_eq!(matches.accepted(), found.len() as u64);
}
