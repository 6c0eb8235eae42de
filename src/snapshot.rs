//! Serializable league contents, replayed through the normal league operations.

use crate::config::LeagueConfig;
use crate::logic::{create_team, record_performances, FullRecompute};
use crate::models::{House, League, LeagueError, Player, PlayerPerformance, Roster, RosterEntry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A team together with its owner.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamSnapshot {
    pub owner: String,
    pub house: House,
    pub name: String,
    pub formation: String,
    pub players: Vec<RosterEntry>,
}

/// A match and the performances recorded for it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub name: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub performances: Vec<PlayerPerformance>,
}

/// Everything except the player catalog, which is imported separately.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    #[serde(default)]
    pub team_updates_locked: bool,
    #[serde(default)]
    pub teams: Vec<TeamSnapshot>,
    #[serde(default)]
    pub matches: Vec<MatchSnapshot>,
}

impl League<FullRecompute> {
    /// Build a league by replaying a snapshot: every team is validated and every
    /// performance scored exactly as if submitted one by one.
    pub fn from_snapshot(
        config: LeagueConfig,
        players: Vec<Player>,
        snapshot: LeagueSnapshot,
    ) -> Result<Self, LeagueError> {
        let mut league = League::with_players(config, players)?;

        for team in snapshot.teams {
            let user_id = league.register_user(team.owner, team.house);
            create_team(
                &mut league,
                user_id,
                &team.name,
                Roster::new(team.formation, team.players),
            )?;
        }
        for game in snapshot.matches {
            let match_id = league.create_match(game.name, game.date)?;
            record_performances(&mut league, match_id, &game.performances)?;
        }
        league.team_updates_locked = snapshot.team_updates_locked;
        Ok(league)
    }
}
