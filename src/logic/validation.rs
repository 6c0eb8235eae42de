//! Roster validation: budget, formation and house-diversity rules.

use crate::config::LeagueConfig;
use crate::models::{House, Player, PlayerId, Position, RosterEntry};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use thiserror::Error;

/// Why a roster was rejected. Checks run in a fixed order and the first
/// failing rule is reported.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ValidationFailure {
    #[error("a team needs at least one player")]
    InvalidInput,
    #[error("unknown formation '{0}'")]
    UnknownFormation(String),
    #[error("player {0} does not exist")]
    UnknownPlayer(PlayerId),
    #[error("player {0} is selected more than once")]
    DuplicatePlayer(PlayerId),
    #[error("a captain must be selected")]
    MissingCaptain,
    #[error("only one captain is allowed ({0} selected)")]
    MultipleCaptains(usize),
    #[error("team price {total} exceeds budget {ceiling}")]
    BudgetExceeded { total: u64, ceiling: u32 },
    #[error("formation needs {expected} {position} but team has {actual}")]
    FormationMismatch {
        position: Position,
        expected: u32,
        actual: u32,
    },
    #[error("formation needs {expected} players but team has {actual}")]
    RosterSize { expected: u32, actual: u32 },
    #[error("team needs a player from every house (missing: {})", join_houses(.0))]
    MissingHouses(BTreeSet<House>),
    #[error("{count} players from {house}; at most {max} allowed")]
    HouseOverrepresented {
        house: House,
        count: usize,
        max: usize,
    },
}

fn join_houses(houses: &BTreeSet<House>) -> String {
    houses
        .iter()
        .map(|h| h.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolves player ids to reference data.
pub trait PlayerLookup {
    fn lookup(&self, id: PlayerId) -> Option<&Player>;
}

impl PlayerLookup for HashMap<PlayerId, Player> {
    fn lookup(&self, id: PlayerId) -> Option<&Player> {
        self.get(&id)
    }
}

impl PlayerLookup for BTreeMap<PlayerId, Player> {
    fn lookup(&self, id: PlayerId) -> Option<&Player> {
        self.get(&id)
    }
}

/// Check a proposed roster against every team rule.
///
/// Order: input/formation, player lookup, duplicates, captain, budget,
/// formation counts, house coverage, house cap. No side effects.
pub fn validate_roster<L: PlayerLookup + ?Sized>(
    entries: &[RosterEntry],
    formation_name: &str,
    players: &L,
    config: &LeagueConfig,
) -> Result<(), ValidationFailure> {
    if entries.is_empty() {
        return Err(ValidationFailure::InvalidInput);
    }
    let formation = config
        .formations
        .get(formation_name)
        .ok_or_else(|| ValidationFailure::UnknownFormation(formation_name.to_string()))?;

    let resolved: Vec<&Player> = entries
        .iter()
        .map(|e| {
            players
                .lookup(e.player_id)
                .ok_or(ValidationFailure::UnknownPlayer(e.player_id))
        })
        .collect::<Result<_, _>>()?;

    let mut seen = HashSet::with_capacity(entries.len());
    for e in entries {
        if !seen.insert(e.player_id) {
            return Err(ValidationFailure::DuplicatePlayer(e.player_id));
        }
    }

    match entries.iter().filter(|e| e.is_captain).count() {
        0 => return Err(ValidationFailure::MissingCaptain),
        1 => {}
        n => return Err(ValidationFailure::MultipleCaptains(n)),
    }

    let total: u64 = resolved.iter().map(|p| u64::from(p.price)).sum();
    if total > u64::from(config.budget) {
        return Err(ValidationFailure::BudgetExceeded {
            total,
            ceiling: config.budget,
        });
    }

    let mut by_position: HashMap<Position, u32> = HashMap::new();
    for p in &resolved {
        *by_position.entry(p.position).or_insert(0) += 1;
    }
    for position in Position::ALL {
        let expected = formation.required(position);
        let actual = by_position.get(&position).copied().unwrap_or(0);
        if expected != actual {
            return Err(ValidationFailure::FormationMismatch {
                position,
                expected,
                actual,
            });
        }
    }
    let actual = u32::try_from(entries.len()).unwrap_or(u32::MAX);
    if actual != formation.size() {
        return Err(ValidationFailure::RosterSize {
            expected: formation.size(),
            actual,
        });
    }

    let mut by_house: BTreeMap<House, usize> = BTreeMap::new();
    for p in &resolved {
        *by_house.entry(p.house).or_insert(0) += 1;
    }
    let missing: BTreeSet<House> = config
        .houses
        .iter()
        .filter(|h| !by_house.contains_key(*h))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(ValidationFailure::MissingHouses(missing));
    }

    if let Some((&house, &count)) = by_house.iter().find(|&(_, &c)| c > config.max_per_house) {
        return Err(ValidationFailure::HouseOverrepresented {
            house,
            count,
            max: config.max_per_house,
        });
    }

    Ok(())
}
