//! League business logic: validation, scoring, team lifecycle, results, standings.

mod results;
mod scoring;
mod standings;
mod teams;
mod validation;

pub use results::{delete_match, record_performances, reset_player_performances};
pub use scoring::{
    player_points, recompute_team_total, score_performance, FullRecompute, TotalsAggregator,
    GAME_PLAYED_MINUTES,
};
pub use standings::{
    player_leaderboard, recompute_totals, team_leaderboard, team_rank, PlayerStanding,
    TeamStanding,
};
pub use teams::{create_team, replace_roster};
pub use validation::{validate_roster, PlayerLookup, ValidationFailure};
