//! Match results: record, delete and reset performances. Each change is
//! followed by a full totals recompute.

use crate::logic::scoring::{score_performance, TotalsAggregator};
use crate::logic::standings::recompute_totals;
use crate::models::{League, LeagueError, MatchId, PlayerId, PlayerPerformance, ScoredPerformance};

/// Store (or overwrite) performances for one match, scoring each by the
/// player's position. Unknown players are skipped. Returns how many records
/// were stored.
pub fn record_performances<A: TotalsAggregator>(
    league: &mut League<A>,
    match_id: MatchId,
    performances: &[PlayerPerformance],
) -> Result<usize, LeagueError> {
    if !league.matches.contains_key(&match_id) {
        return Err(LeagueError::MatchNotFound(match_id));
    }

    let mut scored = Vec::with_capacity(performances.len());
    for perf in performances {
        let Some(player) = league.players.get(&perf.player_id) else {
            log::warn!(
                "Player with id {} not found, skipping performance data",
                perf.player_id
            );
            continue;
        };
        scored.push(ScoredPerformance {
            player_id: perf.player_id,
            match_id,
            record: perf.record,
            points: score_performance(&perf.record, player.position, &league.config.scoring),
        });
    }

    let stored = scored.len();
    for s in scored {
        league.performances.insert((s.player_id, s.match_id), s);
    }
    log::info!("Stored {} performance(s) for match {}", stored, match_id);
    recompute_totals(league);
    Ok(stored)
}

/// Delete a match together with all of its performances.
pub fn delete_match<A: TotalsAggregator>(
    league: &mut League<A>,
    match_id: MatchId,
) -> Result<(), LeagueError> {
    let game = league
        .matches
        .remove(&match_id)
        .ok_or(LeagueError::MatchNotFound(match_id))?;
    let before = league.performances.len();
    league.performances.retain(|(_, m), _| *m != match_id);
    log::info!(
        "Deleted match '{}' and {} performance(s)",
        game.name,
        before - league.performances.len()
    );
    recompute_totals(league);
    Ok(())
}

/// Remove every performance recorded for a player.
pub fn reset_player_performances<A: TotalsAggregator>(
    league: &mut League<A>,
    player_id: PlayerId,
) -> Result<(), LeagueError> {
    if !league.players.contains_key(&player_id) {
        return Err(LeagueError::PlayerNotFound(player_id));
    }
    league.performances.retain(|(p, _), _| *p != player_id);
    log::info!("Reset all performance data for player {}", player_id);
    recompute_totals(league);
    Ok(())
}
