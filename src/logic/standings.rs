//! Team totals and leaderboards.

use crate::logic::scoring::TotalsAggregator;
use crate::models::{House, League, PlayerId, Position, Team, TeamId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Recompute every team's total from all stored performances.
///
/// Totals are computed into a fresh map first and written afterwards in one
/// pass, so no caller ever sees some teams updated and others not.
pub fn recompute_totals<A: TotalsAggregator>(league: &mut League<A>) {
    let performances = league.all_performances();
    let teams: Vec<&Team> = league.teams.values().collect();
    let totals = league.aggregator.team_totals(&teams, &performances);

    for team in league.teams.values_mut() {
        team.total_points = totals.get(&team.id).copied().unwrap_or(0);
    }
    log::debug!(
        "Recomputed totals for {} team(s) from {} performance(s)",
        league.teams.len(),
        performances.len()
    );
}

/// One row of the team leaderboard.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub rank: usize,
    pub team_id: TeamId,
    pub team_name: String,
    pub owner: String,
    pub house: House,
    pub captain: Option<PlayerId>,
    pub total_points: i64,
}

/// One row of the player leaderboard.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStanding {
    pub rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub position: Position,
    pub house: House,
    pub total_points: i64,
}

/// Teams by total points (highest first, ties by name, then id). With `house`, only
/// teams whose owner belongs to it; ranks count within the returned list.
pub fn team_leaderboard<A>(league: &League<A>, house: Option<House>) -> Vec<TeamStanding> {
    let mut rows: Vec<TeamStanding> = league
        .teams
        .values()
        .filter_map(|t| {
            let owner = league.users.get(&t.user_id)?;
            if house.is_some_and(|h| h != owner.house) {
                return None;
            }
            Some(TeamStanding {
                rank: 0,
                team_id: t.id,
                team_name: t.name.clone(),
                owner: owner.name.clone(),
                house: owner.house,
                captain: t.roster.captain(),
                total_points: t.total_points,
            })
        })
        .collect();
    rows.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.team_name.cmp(&b.team_name))
            .then_with(|| a.team_id.cmp(&b.team_id))
    });
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }
    rows
}

/// Players by points summed over all matches (highest first, ties by name),
/// optionally restricted to one house.
pub fn player_leaderboard<A>(league: &League<A>, house: Option<House>) -> Vec<PlayerStanding> {
    let mut totals: HashMap<PlayerId, i64> = HashMap::new();
    for p in league.performances.values() {
        *totals.entry(p.player_id).or_insert(0) += i64::from(p.points);
    }

    let mut rows: Vec<PlayerStanding> = league
        .players
        .values()
        .filter(|p| house.map_or(true, |h| h == p.house))
        .map(|p| PlayerStanding {
            rank: 0,
            player_id: p.id,
            name: p.name.clone(),
            position: p.position,
            house: p.house,
            total_points: totals.get(&p.id).copied().unwrap_or(0),
        })
        .collect();
    rows.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.name.cmp(&b.name))
    });
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }
    rows
}

/// 1-based rank of a team across the whole league.
pub fn team_rank<A>(league: &League<A>, team_id: TeamId) -> Option<usize> {
    team_leaderboard(league, None)
        .into_iter()
        .find(|row| row.team_id == team_id)
        .map(|row| row.rank)
}
