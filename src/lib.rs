//! Fantasy football league: library with models, configuration and business logic.

pub mod config;
pub mod import;
pub mod logic;
pub mod models;
pub mod snapshot;

pub use config::{
    ConfigError, Formation, FormationCatalog, LeagueConfig, OverallRules, PositionRules,
    ScoringRuleSet,
};
pub use import::{load_players, read_players, ImportError};
pub use logic::{
    create_team, delete_match, player_leaderboard, player_points, recompute_team_total,
    recompute_totals, record_performances, replace_roster, reset_player_performances,
    score_performance, team_leaderboard, team_rank, validate_roster, FullRecompute,
    PlayerLookup, PlayerStanding, TeamStanding, TotalsAggregator, ValidationFailure,
    GAME_PLAYED_MINUTES,
};
pub use models::{
    GameMatch, House, League, LeagueError, MatchId, PerformanceRecord, Player, PlayerId,
    PlayerPerformance, Position, Roster, RosterEntry, ScoredPerformance, Team, TeamId, User,
    UserId,
};
pub use snapshot::{LeagueSnapshot, MatchSnapshot, TeamSnapshot};
