//! Integration tests for the scoring engine: per-performance points and team totals.

use fantasy_league::{
    recompute_team_total, score_performance, FullRecompute, MatchId, OverallRules,
    PerformanceRecord, PlayerId, Position, PositionRules, Roster, RosterEntry,
    ScoredPerformance, ScoringRuleSet, Team, TotalsAggregator, GAME_PLAYED_MINUTES,
};
use std::collections::BTreeMap;
use uuid::Uuid;

fn rules() -> ScoringRuleSet {
    ScoringRuleSet::default()
}

fn scored(player_id: PlayerId, match_id: MatchId, points: i32) -> ScoredPerformance {
    ScoredPerformance {
        player_id,
        match_id,
        record: PerformanceRecord::default(),
        points,
    }
}

#[test]
fn attacker_example_scores_fourteen() {
    let record = PerformanceRecord {
        goals: 2,
        assists: 1,
        yellow_cards: 1,
        minutes_played: 90,
        bonus_points: 2,
        ..PerformanceRecord::default()
    };
    // 2 played - 1 yellow + 2*4 goals + 1*3 assist + 2 bonus
    assert_eq!(score_performance(&record, Position::Attacker, &rules()), 14);
}

#[test]
fn empty_performance_scores_zero() {
    for position in Position::ALL {
        assert_eq!(
            score_performance(&PerformanceRecord::default(), position, &rules()),
            0
        );
    }
}

#[test]
fn game_played_bonus_starts_at_sixty_minutes() {
    let at = |minutes| PerformanceRecord {
        minutes_played: minutes,
        ..PerformanceRecord::default()
    };
    let r = rules();
    let before = score_performance(&at(GAME_PLAYED_MINUTES - 1), Position::Midfielder, &r);
    let after = score_performance(&at(GAME_PLAYED_MINUTES), Position::Midfielder, &r);
    assert_eq!(before, 0);
    assert_eq!(after - before, r.overall.game_played);
}

#[test]
fn goals_conceded_penalty_steps_every_two_goals() {
    let r = rules();
    let step = r.position_rules(Position::Goalkeeper).two_goals_conceded;
    let conceded = |n| {
        let record = PerformanceRecord {
            goals_conceded: n,
            ..PerformanceRecord::default()
        };
        score_performance(&record, Position::Goalkeeper, &r)
    };
    assert_eq!(conceded(0), 0);
    assert_eq!(conceded(1), 0);
    assert_eq!(conceded(2), step);
    assert_eq!(conceded(3), step);
    assert_eq!(conceded(4), 2 * step);
    assert_eq!(conceded(5), 2 * step);
}

#[test]
fn outfield_players_ignore_clean_sheets_and_goals_conceded() {
    let custom = ScoringRuleSet {
        overall: OverallRules::default(),
        position_based: BTreeMap::from([(
            Position::Midfielder,
            PositionRules {
                goal_scored: 5,
                assists: 3,
                clean_sheet: 5,
                two_goals_conceded: -2,
            },
        )]),
    };
    let record = PerformanceRecord {
        clean_sheet: true,
        goals_conceded: 4,
        ..PerformanceRecord::default()
    };
    assert_eq!(score_performance(&record, Position::Midfielder, &custom), 0);
    assert_eq!(score_performance(&record, Position::Attacker, &rules()), 0);
}

#[test]
fn defenders_earn_clean_sheets() {
    let record = PerformanceRecord {
        clean_sheet: true,
        minutes_played: 90,
        ..PerformanceRecord::default()
    };
    // 2 played + 4 clean sheet
    assert_eq!(score_performance(&record, Position::Defender, &rules()), 6);
    assert_eq!(score_performance(&record, Position::Goalkeeper, &rules()), 6);
}

#[test]
fn position_without_rules_is_neutral() {
    let no_positions = ScoringRuleSet {
        overall: OverallRules::default(),
        position_based: BTreeMap::new(),
    };
    let record = PerformanceRecord {
        goals: 3,
        assists: 2,
        clean_sheet: true,
        goals_conceded: 2,
        minutes_played: 90,
        ..PerformanceRecord::default()
    };
    // Only the game-played points remain.
    assert_eq!(score_performance(&record, Position::Defender, &no_positions), 2);
}

#[test]
fn cards_reduce_points() {
    let record = PerformanceRecord {
        yellow_cards: 1,
        red_cards: 1,
        ..PerformanceRecord::default()
    };
    assert_eq!(score_performance(&record, Position::Attacker, &rules()), -4);
}

#[test]
fn bonus_points_are_added_verbatim() {
    let record = |bonus| PerformanceRecord {
        bonus_points: bonus,
        ..PerformanceRecord::default()
    };
    assert_eq!(score_performance(&record(3), Position::Defender, &rules()), 3);
    assert_eq!(score_performance(&record(-2), Position::Defender, &rules()), -2);
}

#[test]
fn points_are_monotonic_in_positive_and_negative_stats() {
    let base = PerformanceRecord {
        goals_conceded: 3,
        minutes_played: 75,
        ..PerformanceRecord::default()
    };
    let r = rules();
    for position in Position::ALL {
        let score = |rec: PerformanceRecord| score_performance(&rec, position, &r);
        for n in 0..5 {
            let with = |f: fn(&mut PerformanceRecord, u32), v: u32| {
                let mut rec = base;
                f(&mut rec, v);
                score(rec)
            };
            assert!(with(|r, v| r.goals = v, n + 1) >= with(|r, v| r.goals = v, n));
            assert!(with(|r, v| r.assists = v, n + 1) >= with(|r, v| r.assists = v, n));
            assert!(
                with(|r, v| r.bonus_points = v as i32, n + 1)
                    >= with(|r, v| r.bonus_points = v as i32, n)
            );
            assert!(
                with(|r, v| r.yellow_cards = v, n + 1) <= with(|r, v| r.yellow_cards = v, n)
            );
            assert!(with(|r, v| r.red_cards = v, n + 1) <= with(|r, v| r.red_cards = v, n));
        }
    }
}

#[test]
fn captain_points_count_twice() {
    let (m1, m2) = (Uuid::new_v4(), Uuid::new_v4());
    // Player 1 (not captain): 4 + 6 = 10. Player 2 (captain): 15.
    let performances = vec![scored(1, m1, 4), scored(1, m2, 6), scored(2, m1, 15)];
    let roster = Roster::new(
        "4-4-2",
        vec![RosterEntry::player(1), RosterEntry::captain(2)],
    );
    assert_eq!(recompute_team_total(&roster, &performances), 40);
}

#[test]
fn recompute_is_idempotent() {
    let m = Uuid::new_v4();
    let performances = vec![scored(1, m, 7), scored(2, m, -3), scored(3, m, 5)];
    let roster = Roster::new(
        "4-4-2",
        vec![RosterEntry::captain(1), RosterEntry::player(2)],
    );
    let first = recompute_team_total(&roster, &performances);
    let second = recompute_team_total(&roster, &performances);
    assert_eq!(first, second);
    assert_eq!(first, 7 - 3 + 7);
}

#[test]
fn unrostered_players_and_repeated_entries_are_not_counted() {
    let m = Uuid::new_v4();
    let performances = vec![scored(1, m, 5), scored(9, m, 100)];
    let roster = Roster::new(
        "4-4-2",
        vec![RosterEntry::player(1), RosterEntry::player(1)],
    );
    // No captain: base only, player 1 counted once.
    assert_eq!(recompute_team_total(&roster, &performances), 5);
}

#[test]
fn full_recompute_totals_every_team() {
    let m = Uuid::new_v4();
    let performances = vec![scored(1, m, 3), scored(2, m, 4)];
    let a = Team::new(
        "A",
        Uuid::new_v4(),
        Roster::new("4-4-2", vec![RosterEntry::captain(1), RosterEntry::player(2)]),
    );
    let b = Team::new(
        "B",
        Uuid::new_v4(),
        Roster::new("4-4-2", vec![RosterEntry::player(1), RosterEntry::captain(2)]),
    );
    let totals = FullRecompute.team_totals(&[&a, &b], &performances);
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[&a.id], 3 + 4 + 3);
    assert_eq!(totals[&b.id], 3 + 4 + 4);
}
