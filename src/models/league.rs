//! League state: reference players, users, teams, matches and scored performances.

use crate::config::LeagueConfig;
use crate::logic::{player_points, FullRecompute, ValidationFailure};
use crate::models::game::{GameMatch, MatchId};
use crate::models::performance::ScoredPerformance;
use crate::models::player::{House, Player, PlayerId};
use crate::models::roster::{Team, TeamId, User, UserId};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Errors that can occur during league operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LeagueError {
    #[error("user {0} not found")]
    UserNotFound(UserId),
    #[error("user {0} has no team")]
    TeamNotFound(UserId),
    #[error("user {0} already has a team; update the existing team instead")]
    TeamAlreadyExists(UserId),
    #[error("team updates are locked")]
    TeamUpdatesLocked,
    #[error("team name must not be empty")]
    EmptyTeamName,
    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),
    #[error("a player with id {0} already exists")]
    DuplicatePlayerId(PlayerId),
    #[error("match {0} not found")]
    MatchNotFound(MatchId),
    #[error("match name must not be empty")]
    EmptyMatchName,
    #[error("a match named '{0}' already exists")]
    DuplicateMatchName(String),
    #[error("invalid team: {0}")]
    Validation(#[from] ValidationFailure),
}

/// Full league state. Every mutation takes `&mut self` (or `&mut League`), so
/// changes that trigger a totals recompute cannot interleave.
///
/// `A` decides how team totals are produced; see [`crate::TotalsAggregator`].
#[derive(Clone, Debug)]
pub struct League<A = FullRecompute> {
    pub config: LeagueConfig,
    pub players: BTreeMap<PlayerId, Player>,
    pub users: HashMap<UserId, User>,
    pub teams: HashMap<TeamId, Team>,
    pub matches: HashMap<MatchId, GameMatch>,
    /// At most one record per (player, match).
    pub performances: BTreeMap<(PlayerId, MatchId), ScoredPerformance>,
    /// When set, teams can be neither created nor changed.
    pub team_updates_locked: bool,
    pub aggregator: A,
}

impl League<FullRecompute> {
    /// Create an empty league with the given configuration.
    pub fn new(config: LeagueConfig) -> Self {
        Self::with_aggregator(config, FullRecompute)
    }

    /// Create a league with an initial player catalog.
    pub fn with_players(config: LeagueConfig, players: Vec<Player>) -> Result<Self, LeagueError> {
        let mut league = Self::new(config);
        for p in players {
            league.add_player(p)?;
        }
        Ok(league)
    }
}

impl<A> League<A> {
    pub fn with_aggregator(config: LeagueConfig, aggregator: A) -> Self {
        Self {
            config,
            players: BTreeMap::new(),
            users: HashMap::new(),
            teams: HashMap::new(),
            matches: HashMap::new(),
            performances: BTreeMap::new(),
            team_updates_locked: false,
            aggregator,
        }
    }

    /// Add a player to the catalog. Ids are unique.
    pub fn add_player(&mut self, player: Player) -> Result<(), LeagueError> {
        if self.players.contains_key(&player.id) {
            return Err(LeagueError::DuplicatePlayerId(player.id));
        }
        self.players.insert(player.id, player);
        Ok(())
    }

    /// Register a new user and return their id.
    pub fn register_user(&mut self, name: impl Into<String>, house: House) -> UserId {
        let user = User::new(name, house);
        let id = user.id;
        self.users.insert(id, user);
        id
    }

    /// Create a match. Names are non-blank and unique.
    pub fn create_match(
        &mut self,
        name: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Result<MatchId, LeagueError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(LeagueError::EmptyMatchName);
        }
        if self.matches.values().any(|m| m.name == name) {
            return Err(LeagueError::DuplicateMatchName(name.to_string()));
        }
        let game = GameMatch::new(name, date);
        let id = game.id;
        self.matches.insert(id, game);
        Ok(id)
    }

    pub fn match_by_name(&self, name: &str) -> Option<&GameMatch> {
        self.matches.values().find(|m| m.name == name)
    }

    pub fn team_for_user(&self, user_id: UserId) -> Option<&Team> {
        self.teams.values().find(|t| t.user_id == user_id)
    }

    /// All stored performances, in (player, match) order.
    pub fn all_performances(&self) -> Vec<ScoredPerformance> {
        self.performances.values().copied().collect()
    }

    /// A player's points summed over every match.
    pub fn player_total_points(&self, player_id: PlayerId) -> i64 {
        let performances: Vec<ScoredPerformance> = self
            .performances
            .range((player_id, MatchId::nil())..=(player_id, MatchId::max()))
            .map(|(_, p)| *p)
            .collect();
        player_points(player_id, &performances)
    }

    /// The player's performance in their most recent match (by match date).
    pub fn latest_performance(&self, player_id: PlayerId) -> Option<&ScoredPerformance> {
        self.performances
            .range((player_id, MatchId::nil())..=(player_id, MatchId::max()))
            .map(|(_, p)| p)
            .max_by_key(|p| self.matches.get(&p.match_id).map(|m| m.date))
    }

    pub fn set_team_updates_locked(&mut self, locked: bool) {
        self.team_updates_locked = locked;
        log::info!(
            "Team updates have been {}",
            if locked { "locked" } else { "unlocked" }
        );
    }

    /// Flip the team-updates lock and return the new value.
    pub fn toggle_team_updates(&mut self) -> bool {
        let locked = !self.team_updates_locked;
        self.set_team_updates_locked(locked);
        locked
    }
}
