//! Scoring: per-performance points and team totals with the captain bonus.

use crate::config::ScoringRuleSet;
use crate::models::{
    PerformanceRecord, PlayerId, Position, Roster, ScoredPerformance, Team, TeamId,
};
use std::collections::{HashMap, HashSet};

/// Minutes a player must be on the pitch to earn the game-played points.
pub const GAME_PLAYED_MINUTES: u32 = 60;

/// Points earned by one performance, given the player's position.
///
/// The goals-conceded penalty is stepped: it applies once per two goals,
/// remainder ignored, and only for goalkeepers and defenders.
pub fn score_performance(
    record: &PerformanceRecord,
    position: Position,
    rules: &ScoringRuleSet,
) -> i32 {
    let overall = &rules.overall;
    let position_rules = rules.position_rules(position);
    let mut points: i32 = 0;

    if record.minutes_played >= GAME_PLAYED_MINUTES {
        points = points.saturating_add(overall.game_played);
    }
    points = points.saturating_add(times(record.yellow_cards, overall.yellow_card));
    points = points.saturating_add(times(record.red_cards, overall.red_card));

    points = points.saturating_add(times(record.goals, position_rules.goal_scored));
    points = points.saturating_add(times(record.assists, position_rules.assists));

    if position.is_defensive() {
        if record.clean_sheet {
            points = points.saturating_add(position_rules.clean_sheet);
        }
        if record.goals_conceded >= 2 {
            let steps = record.goals_conceded / 2;
            points = points.saturating_add(times(steps, position_rules.two_goals_conceded));
        }
    }

    points.saturating_add(record.bonus_points)
}

/// `n` applications of a per-event rule value, saturating instead of overflowing.
fn times(n: u32, value: i32) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX).saturating_mul(value)
}

/// Sum of one player's points across every match.
pub fn player_points(player_id: PlayerId, performances: &[ScoredPerformance]) -> i64 {
    performances
        .iter()
        .filter(|p| p.player_id == player_id)
        .map(|p| i64::from(p.points))
        .sum()
}

/// Team total: every distinct rostered player's summed points, plus the
/// captain's summed points a second time.
pub fn recompute_team_total(roster: &Roster, performances: &[ScoredPerformance]) -> i64 {
    let mut per_player: HashMap<PlayerId, i64> = HashMap::new();
    for p in performances {
        *per_player.entry(p.player_id).or_insert(0) += i64::from(p.points);
    }
    let points_for = |id: PlayerId| per_player.get(&id).copied().unwrap_or(0);

    let mut seen = HashSet::new();
    let base: i64 = roster
        .entries
        .iter()
        .filter(|e| seen.insert(e.player_id))
        .map(|e| points_for(e.player_id))
        .sum();
    let captain = roster.captain().map(points_for).unwrap_or(0);
    base + captain
}

/// Produces every team's total from the full performance set. Callers only
/// see the resulting map, so the strategy can change without touching them.
pub trait TotalsAggregator {
    fn team_totals(
        &self,
        teams: &[&Team],
        performances: &[ScoredPerformance],
    ) -> HashMap<TeamId, i64>;
}

/// Recomputes every team from scratch on each call.
#[derive(Clone, Copy, Debug, Default)]
pub struct FullRecompute;

impl TotalsAggregator for FullRecompute {
    fn team_totals(
        &self,
        teams: &[&Team],
        performances: &[ScoredPerformance],
    ) -> HashMap<TeamId, i64> {
        teams
            .iter()
            .map(|t| (t.id, recompute_team_total(&t.roster, performances)))
            .collect()
    }
}
