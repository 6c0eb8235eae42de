//! Team lifecycle: create a user's team, replace its roster.

use crate::logic::scoring::TotalsAggregator;
use crate::logic::standings::recompute_totals;
use crate::logic::validation::validate_roster;
use crate::models::{League, LeagueError, Roster, Team, TeamId, UserId};

/// Create the user's team. One team per user; the roster must pass validation.
pub fn create_team<A: TotalsAggregator>(
    league: &mut League<A>,
    user_id: UserId,
    name: &str,
    roster: Roster,
) -> Result<TeamId, LeagueError> {
    if league.team_updates_locked {
        return Err(LeagueError::TeamUpdatesLocked);
    }
    if !league.users.contains_key(&user_id) {
        return Err(LeagueError::UserNotFound(user_id));
    }
    if league.team_for_user(user_id).is_some() {
        return Err(LeagueError::TeamAlreadyExists(user_id));
    }
    let name = name.trim();
    if name.is_empty() {
        return Err(LeagueError::EmptyTeamName);
    }
    validate_roster(&roster.entries, &roster.formation, &league.players, &league.config)?;

    let team = Team::new(name, user_id, roster);
    let id = team.id;
    log::info!(
        "Created team '{}' ({} players, formation {})",
        team.name,
        team.roster.entries.len(),
        team.roster.formation
    );
    league.teams.insert(id, team);
    recompute_totals(league);
    Ok(id)
}

/// Replace the user's whole roster. The new roster is validated before
/// anything changes; on error the old roster is left as it was.
pub fn replace_roster<A: TotalsAggregator>(
    league: &mut League<A>,
    user_id: UserId,
    roster: Roster,
) -> Result<(), LeagueError> {
    if league.team_updates_locked {
        return Err(LeagueError::TeamUpdatesLocked);
    }
    let team_id = league
        .team_for_user(user_id)
        .map(|t| t.id)
        .ok_or(LeagueError::TeamNotFound(user_id))?;
    validate_roster(&roster.entries, &roster.formation, &league.players, &league.config)?;

    if let Some(team) = league.teams.get_mut(&team_id) {
        team.roster = roster;
        log::info!("Replaced roster of team '{}'", team.name);
    }
    recompute_totals(league);
    Ok(())
}
