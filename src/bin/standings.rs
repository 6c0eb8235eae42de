//! Print league standings: loads the player catalog and a league snapshot,
//! replays them (validating every team, scoring every performance) and writes
//! the team and player leaderboards as JSON to stdout.
//! Run with: cargo run --bin standings
//! Inputs come from env: PLAYERS_CSV (default players.csv), LEAGUE_FILE
//! (default league.json), optional LEAGUE_CONFIG and HOUSE (leaderboard filter).

use anyhow::{Context, Result};
use fantasy_league::{
    load_players, player_leaderboard, team_leaderboard, House, League, LeagueConfig,
    LeagueSnapshot, PlayerStanding, TeamStanding,
};

#[derive(serde::Serialize)]
struct StandingsReport {
    house: Option<House>,
    team_updates_locked: bool,
    teams: Vec<TeamStanding>,
    players: Vec<PlayerStanding>,
}

fn default_players_csv() -> String {
    "players.csv".to_string()
}

fn default_league_file() -> String {
    "league.json".to_string()
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let players_csv = std::env::var("PLAYERS_CSV").unwrap_or_else(|_| default_players_csv());
    let league_file = std::env::var("LEAGUE_FILE").unwrap_or_else(|_| default_league_file());
    let config = match std::env::var("LEAGUE_CONFIG") {
        Ok(path) => LeagueConfig::load(&path)
            .with_context(|| format!("Failed to load league config: {path}"))?,
        Err(_) => LeagueConfig::default(),
    };
    let house = match std::env::var("HOUSE") {
        Ok(h) => Some(h.parse::<House>().context("Invalid HOUSE filter")?),
        Err(_) => None,
    };

    let players = load_players(&players_csv)
        .with_context(|| format!("Failed to import players: {players_csv}"))?;
    let contents = std::fs::read_to_string(&league_file)
        .with_context(|| format!("Failed to read league file: {league_file}"))?;
    let snapshot: LeagueSnapshot = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse league file: {league_file}"))?;

    log::info!(
        "Loaded {} player(s), {} team(s), {} match(es)",
        players.len(),
        snapshot.teams.len(),
        snapshot.matches.len()
    );
    let league = League::from_snapshot(config, players, snapshot)
        .context("Failed to replay league snapshot")?;

    let report = StandingsReport {
        house,
        team_updates_locked: league.team_updates_locked,
        teams: team_leaderboard(&league, house),
        players: player_leaderboard(&league, house),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
