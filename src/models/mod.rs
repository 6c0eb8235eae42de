//! Data structures for the league: players, rosters, matches, performances, league state.

mod game;
mod league;
mod performance;
mod player;
mod roster;

pub use game::{GameMatch, MatchId};
pub use league::{League, LeagueError};
pub use performance::{PerformanceRecord, PlayerPerformance, ScoredPerformance};
pub use player::{House, ParseTagError, Player, PlayerId, Position};
pub use roster::{Roster, RosterEntry, Team, TeamId, User, UserId};
