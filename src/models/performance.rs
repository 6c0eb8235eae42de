//! Per-match player statistics and their scored form.

use crate::models::game::MatchId;
use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Raw statistics for one player in one match. Counts are unsigned, so negative
/// values never reach the scoring engine.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceRecord {
    pub goals: u32,
    pub assists: u32,
    pub clean_sheet: bool,
    pub goals_conceded: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub minutes_played: u32,
    /// Added to the score verbatim.
    pub bonus_points: i32,
}

/// Statistics submitted for one player, before the match is known to the store.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerPerformance {
    pub player_id: PlayerId,
    #[serde(flatten)]
    pub record: PerformanceRecord,
}

/// A stored performance: at most one per (player, match), with its points precomputed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoredPerformance {
    pub player_id: PlayerId,
    pub match_id: MatchId,
    pub record: PerformanceRecord,
    pub points: i32,
}
